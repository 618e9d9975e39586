use std::{fs, io, path::PathBuf};

use crate::models::Db;

pub const DB_PATH: &str = "data/db.json";

// Storage seam for the booking document. The whole document is loaded and
// written back on every mutation; tests swap in `MemStore`.
pub trait DocumentStore: Send + Sync {
    fn load(&self) -> io::Result<Db>;
    fn save(&self, db: &Db) -> io::Result<()>;
}

// JSON file on local disk. No cross-process locking: two processes writing
// concurrently race on the whole file, last write wins.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    // Writes the seed document on first run. Never overwrites an existing
    // file, so calling this again is a no-op.
    pub fn initialize(&self) -> io::Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.save(&Db::seed())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> io::Result<Db> {
        let text = fs::read_to_string(&self.path)?;
        let db: Db = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(db)
    }

    fn save(&self, db: &Db) -> io::Result<()> {
        let text = serde_json::to_string_pretty(db)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, text)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

// In-memory document, for tests that should not touch disk.
pub struct MemStore {
    db: std::sync::Mutex<Db>,
}

impl MemStore {
    pub fn new(db: Db) -> Self {
        MemStore {
            db: std::sync::Mutex::new(db),
        }
    }

    pub fn seeded() -> Self {
        MemStore::new(Db::seed())
    }
}

impl DocumentStore for MemStore {
    fn load(&self) -> io::Result<Db> {
        Ok(self.db.lock().unwrap().clone())
    }

    fn save(&self, db: &Db) -> io::Result<()> {
        *self.db.lock().unwrap() = db.clone();
        Ok(())
    }
}

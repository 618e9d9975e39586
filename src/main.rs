// Define data modules
mod error; // Request-level error kinds and HTTP mapping
mod logic; // Availability check and booking validation pipeline
mod models; // Data structures (Apartment, Booking, Db, etc.)
mod routes_admin; // HTTP handlers for the admin pages
mod routes_pages; // HTTP handlers for the public pages
mod service; // Booking/apartment operations over the store
mod store; // Persistent storage (load/save db.json)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tera::Tera;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use crate::service::BookingService;
use crate::store::{FileStore, DB_PATH};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BookingService>,
    pub tera: Arc<Tera>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = FileStore::new(DB_PATH);
    store.initialize().expect("storage init failed");

    let tera = Tera::new("templates/**/*.html").expect("template parse failed");

    let state = AppState {
        service: Arc::new(BookingService::new(Arc::new(store))),
        tera: Arc::new(tera),
    };

    let app = Router::new()
        // public pages
        .route("/", get(routes_pages::home))
        .route("/apartments", get(routes_pages::apartments_index))
        .route("/apartments/:id", get(routes_pages::apartment_detail))
        .route("/apartments/:id/book", post(routes_pages::book_apartment))
        .route("/success", get(routes_pages::booking_success))
        // admin pages
        .route(
            "/admin/apartments",
            get(routes_admin::apartments_index).post(routes_admin::create_apartment),
        )
        .route("/admin/apartments/new", get(routes_admin::new_apartment_form))
        // static assets
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!("server running at http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server error");
}

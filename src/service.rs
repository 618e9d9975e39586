// --------------------------------------------------
// Booking/apartment service: every operation loads the
// full document, applies at most one mutation, and writes
// it back before returning.
//
// Mutations run under a process-wide mutex so two in-flight
// requests cannot read the same counter and both write.
// Nothing guards against a second *process* on the same
// file; that limitation is inherited from the flat-file
// storage model.
// --------------------------------------------------

use std::sync::{Arc, Mutex};

use chrono::{DateTime, FixedOffset};

use crate::error::AppError;
use crate::models::{Apartment, Booking, NewApartment, NewBooking};
use crate::store::DocumentStore;

fn now_fixed_offset() -> DateTime<FixedOffset> {
    let local = chrono::Local::now();
    let offset_seconds = local.offset().local_minus_utc();
    let fixed = FixedOffset::east_opt(offset_seconds).unwrap();
    local.with_timezone(&fixed)
}

pub struct BookingService {
    store: Arc<dyn DocumentStore>,
    write_lock: Mutex<()>,
}

impl BookingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        BookingService {
            store,
            write_lock: Mutex::new(()),
        }
    }

    // All apartments in storage insertion order.
    pub fn list_apartments(&self) -> Result<Vec<Apartment>, AppError> {
        let db = self.store.load()?;
        Ok(db.apartments)
    }

    pub fn get_apartment(&self, id: u64) -> Result<Apartment, AppError> {
        let db = self.store.load()?;
        db.apartments
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound)
    }

    // Assigns the next apartment id and persists. Field coercion and
    // presence checks happen in the admin route.
    pub fn add_apartment(&self, input: NewApartment) -> Result<Apartment, AppError> {
        let _guard = self.write_lock.lock().unwrap();

        let mut db = self.store.load()?;
        db.counters.apartment += 1;
        let apartment = Apartment {
            id: db.counters.apartment,
            name: input.name,
            location: input.location,
            description: input.description,
            bedrooms: input.bedrooms,
            price_per_night: input.price_per_night,
            amenities: input.amenities,
            images: input.images,
        };
        db.apartments.push(apartment.clone());
        self.store.save(&db)?;
        Ok(apartment)
    }

    // Bookings for one apartment in storage insertion order.
    pub fn bookings_for_apartment(&self, apartment_id: u64) -> Result<Vec<Booking>, AppError> {
        let db = self.store.load()?;
        Ok(db
            .bookings
            .into_iter()
            .filter(|b| b.apartment_id == apartment_id)
            .collect())
    }

    pub fn get_booking(&self, id: u64) -> Result<Booking, AppError> {
        let db = self.store.load()?;
        db.bookings
            .into_iter()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound)
    }

    // Assigns the next booking id, stamps the creation time, and persists.
    // Performs no availability or date re-validation: callers must have run
    // the validation pipeline first, or an overlapping booking will be
    // stored without complaint.
    pub fn create_booking(&self, input: NewBooking) -> Result<Booking, AppError> {
        let _guard = self.write_lock.lock().unwrap();

        let mut db = self.store.load()?;
        db.counters.booking += 1;
        let booking = Booking {
            id: db.counters.booking,
            apartment_id: input.apartment_id,
            full_name: input.full_name,
            phone: input.phone,
            email: input.email,
            check_in: input.check_in,
            check_out: input.check_out,
            total_price: input.total_price,
            created_at: now_fixed_offset(),
        };
        db.bookings.push(booking.clone());
        self.store.save(&db)?;
        Ok(booking)
    }
}

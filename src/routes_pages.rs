// --------------------------------------------------
// Public pages: apartment browsing, booking submission,
// and the confirmation view.
//
// Handlers parse and validate the request shape, call into
// the service, and render Tera templates. All overlap and
// date-order enforcement happens here via the validation
// pipeline, before the service persists anything.
// --------------------------------------------------

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tera::Context;

use crate::error::AppError;
use crate::logic::{plan_booking, BookingRequest};
use crate::AppState;

pub fn render(state: &AppState, template: &str, mut ctx: Context) -> Result<Html<String>, AppError> {
    ctx.insert("app_name", "دار الضيافة");
    let body = state.tera.render(template, &ctx)?;
    Ok(Html(body))
}

// -----------------------------
// GET /
// Home page with the apartment list
// -----------------------------
pub async fn home(State(state): State<AppState>) -> Result<Response, AppError> {
    let apartments = state.service.list_apartments()?;

    let mut ctx = Context::new();
    ctx.insert("title", "الرئيسية");
    ctx.insert("apartments", &apartments);
    Ok(render(&state, "home.html", ctx)?.into_response())
}

// -----------------------------
// GET /apartments
// Full listing page
// -----------------------------
pub async fn apartments_index(State(state): State<AppState>) -> Result<Response, AppError> {
    let apartments = state.service.list_apartments()?;

    let mut ctx = Context::new();
    ctx.insert("title", "الشقق المتاحة");
    ctx.insert("apartments", &apartments);
    Ok(render(&state, "apartments.html", ctx)?.into_response())
}

// -----------------------------
// GET /apartments/:id
// Detail page with existing reservations
// -----------------------------
pub async fn apartment_detail(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let apartment = state.service.get_apartment(id)?;
    let bookings = state.service.bookings_for_apartment(id)?;

    let mut ctx = Context::new();
    ctx.insert("title", &apartment.name);
    ctx.insert("apartment", &apartment);
    ctx.insert("bookings", &bookings);
    Ok(render(&state, "apartment.html", ctx)?.into_response())
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BookForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
}

// -----------------------------
// POST /apartments/:id/book
// Runs the validation pipeline, persists, redirects to the
// confirmation page
// -----------------------------
pub async fn book_apartment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<BookForm>,
) -> Result<Response, AppError> {
    let apartment = state.service.get_apartment(id)?;
    let existing = state.service.bookings_for_apartment(id)?;

    let request = BookingRequest {
        full_name: form.full_name,
        phone: form.phone,
        email: form.email,
        check_in: form.check_in,
        check_out: form.check_out,
    };

    let planned = plan_booking(&apartment, &existing, &request)?;
    let booking = state.service.create_booking(planned)?;

    tracing::info!(
        "booking {} created for apartment {} ({} -> {})",
        booking.id,
        booking.apartment_id,
        booking.check_in.date_naive(),
        booking.check_out.date_naive()
    );

    Ok(Redirect::to(&format!("/success?bookingId={}", booking.id)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    #[serde(rename = "bookingId")]
    pub booking_id: Option<u64>,
}

// -----------------------------
// GET /success?bookingId=N
// Confirmation keyed by booking id; bounces home when the
// id is absent or unknown
// -----------------------------
pub async fn booking_success(
    State(state): State<AppState>,
    Query(q): Query<SuccessQuery>,
) -> Result<Response, AppError> {
    let Some(booking_id) = q.booking_id.filter(|id| *id > 0) else {
        return Ok(Redirect::to("/").into_response());
    };

    let booking = match state.service.get_booking(booking_id) {
        Ok(b) => b,
        Err(AppError::NotFound) => return Ok(Redirect::to("/").into_response()),
        Err(e) => return Err(e),
    };

    let mut ctx = Context::new();
    ctx.insert("title", "تم تأكيد الحجز");
    ctx.insert("booking", &booking);
    Ok(render(&state, "booking_success.html", ctx)?.into_response())
}

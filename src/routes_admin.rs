// --------------------------------------------------
// Minimal admin surface: list apartments and add new ones.
// No authentication; the admin pages are plain routes.
// --------------------------------------------------

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tera::Context;

use crate::error::AppError;
use crate::models::NewApartment;
use crate::routes_pages::render;
use crate::AppState;

// -----------------------------
// GET /admin/apartments
// -----------------------------
pub async fn apartments_index(State(state): State<AppState>) -> Result<Response, AppError> {
    let apartments = state.service.list_apartments()?;

    let mut ctx = Context::new();
    ctx.insert("title", "لوحة التحكم - الشقق");
    ctx.insert("apartments", &apartments);
    Ok(render(&state, "admin_apartments.html", ctx)?.into_response())
}

// -----------------------------
// GET /admin/apartments/new
// -----------------------------
pub async fn new_apartment_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut ctx = Context::new();
    ctx.insert("title", "إضافة شقة جديدة");
    Ok(render(&state, "admin_new_apartment.html", ctx)?.into_response())
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApartmentForm {
    pub name: String,
    pub location: String,
    pub description: String,
    pub bedrooms: String,
    pub price_per_night: String,
    pub amenities: String,
    pub images: String,
}

// Comma-separated text field -> trimmed list, empties dropped.
fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

// -----------------------------
// POST /admin/apartments
// Presence checks on name/location/price, numeric coercion,
// then append-and-persist
// -----------------------------
pub async fn create_apartment(
    State(state): State<AppState>,
    Form(form): Form<ApartmentForm>,
) -> Result<Response, AppError> {
    if form.name.trim().is_empty()
        || form.location.trim().is_empty()
        || form.price_per_night.trim().is_empty()
    {
        return Err(AppError::Validation(
            "الاسم والموقع والسعر مطلوبة".to_string(),
        ));
    }

    let price_per_night: f64 = form
        .price_per_night
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("سعر غير صحيح".to_string()))?;

    let bedrooms = if form.bedrooms.trim().is_empty() {
        1
    } else {
        form.bedrooms
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("عدد غرف النوم غير صحيح".to_string()))?
    };

    let apartment = state.service.add_apartment(NewApartment {
        name: form.name.trim().to_string(),
        location: form.location.trim().to_string(),
        description: form.description.trim().to_string(),
        bedrooms,
        price_per_night,
        amenities: split_list(&form.amenities),
        images: split_list(&form.images),
    })?;

    tracing::info!("apartment {} added: {}", apartment.id, apartment.name);

    Ok(Redirect::to("/admin/apartments").into_response())
}

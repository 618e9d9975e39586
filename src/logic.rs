/*
Availability and booking-validation logic.
Module is independently written from HTTP / Axum for testing
*/

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};

use crate::error::AppError;
use crate::models::{Apartment, Booking, NewBooking};

// Raw booking form fields as submitted; everything arrives as text and is
// checked and parsed by `plan_booking`.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
}

// True when the proposed stay does not collide with any existing booking.
//
// Intervals are half-open [check_in, check_out): a stay ending on the day
// another begins is NOT an overlap, so back-to-back bookings are allowed.
// Caller guarantees end > start.
pub fn is_available(
    existing: &[Booking],
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> bool {
    for booking in existing {
        let overlaps = start < booking.check_out && end > booking.check_in;
        if overlaps {
            return false;
        }
    }
    true
}

// Whole days between check-in and check-out; partial days truncate.
pub fn nights_between(check_in: DateTime<FixedOffset>, check_out: DateTime<FixedOffset>) -> i64 {
    (check_out - check_in).num_days()
}

// Parse a submitted check-in/check-out value. Date pickers send
// "YYYY-MM-DD"; API callers may send full RFC 3339 timestamps.
fn parse_check_date(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let naive = date.and_hms_opt(0, 0, 0)?;
    Utc.fix().from_local_datetime(&naive).single()
}

// Ordered validation pipeline for a booking submission. Checks run in a
// fixed order and the first failure wins, so the user-facing message is
// deterministic:
//
// 1) required fields present        -> Validation
// 2) dates parse                    -> Validation
// 3) check-out strictly after check-in -> Validation
// 4) no overlap with existing stays -> Unavailable
//
// On success returns the `NewBooking` to persist, with total price =
// whole-day nights x the apartment's nightly rate.
pub fn plan_booking(
    apartment: &Apartment,
    existing: &[Booking],
    req: &BookingRequest,
) -> Result<NewBooking, AppError> {
    if req.full_name.trim().is_empty()
        || req.phone.trim().is_empty()
        || req.check_in.trim().is_empty()
        || req.check_out.trim().is_empty()
    {
        return Err(AppError::Validation(
            "الرجاء تعبئة جميع الحقول المطلوبة".to_string(),
        ));
    }

    let (check_in, check_out) =
        match (parse_check_date(&req.check_in), parse_check_date(&req.check_out)) {
            (Some(ci), Some(co)) => (ci, co),
            _ => return Err(AppError::Validation("تواريخ غير صحيحة".to_string())),
        };

    if check_out <= check_in {
        return Err(AppError::Validation(
            "تاريخ المغادرة يجب أن يكون بعد تاريخ الوصول".to_string(),
        ));
    }

    if !is_available(existing, check_in, check_out) {
        return Err(AppError::Unavailable);
    }

    let nights = nights_between(check_in, check_out);
    let total_price = nights as f64 * apartment.price_per_night;

    Ok(NewBooking {
        apartment_id: apartment.id,
        full_name: req.full_name.trim().to_string(),
        phone: req.phone.trim().to_string(),
        email: req.email.trim().to_string(),
        check_in,
        check_out,
        total_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Db;

    fn day(s: &str) -> DateTime<FixedOffset> {
        parse_check_date(s).unwrap()
    }

    fn booking(check_in: &str, check_out: &str) -> Booking {
        Booking {
            id: 1,
            apartment_id: 1,
            full_name: "سارة".to_string(),
            phone: "0500000000".to_string(),
            email: String::new(),
            check_in: day(check_in),
            check_out: day(check_out),
            total_price: 0.0,
            created_at: day("2024-05-01"),
        }
    }

    fn request(check_in: &str, check_out: &str) -> BookingRequest {
        BookingRequest {
            full_name: "خالد".to_string(),
            phone: "0555555555".to_string(),
            email: "k@example.com".to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        }
    }

    #[test]
    fn overlap_rejects_intersecting_ranges() {
        let existing = [booking("2024-06-01", "2024-06-04")];

        // straddles the start
        assert!(!is_available(&existing, day("2024-05-30"), day("2024-06-02")));
        // fully inside
        assert!(!is_available(&existing, day("2024-06-02"), day("2024-06-03")));
        // straddles the end
        assert!(!is_available(&existing, day("2024-06-03"), day("2024-06-05")));
        // fully covers
        assert!(!is_available(&existing, day("2024-05-30"), day("2024-06-10")));
    }

    #[test]
    fn back_to_back_stays_are_allowed() {
        let existing = [booking("2024-06-01", "2024-06-04")];

        // new stay ends exactly when the existing one starts
        assert!(is_available(&existing, day("2024-05-28"), day("2024-06-01")));
        // new stay starts exactly when the existing one ends
        assert!(is_available(&existing, day("2024-06-04"), day("2024-06-07")));
    }

    #[test]
    fn disjoint_ranges_are_available() {
        let existing = [booking("2024-06-01", "2024-06-04")];
        assert!(is_available(&existing, day("2024-06-10"), day("2024-06-12")));
        assert!(is_available(&[], day("2024-06-01"), day("2024-06-04")));
    }

    #[test]
    fn nights_are_whole_day_differences() {
        assert_eq!(nights_between(day("2024-06-01"), day("2024-06-04")), 3);
        assert_eq!(nights_between(day("2024-06-01"), day("2024-06-02")), 1);
    }

    #[test]
    fn plan_computes_total_from_nightly_rate() {
        let apartment = Db::seed().apartments[0].clone(); // 480 per night
        let planned = plan_booking(&apartment, &[], &request("2024-06-01", "2024-06-04")).unwrap();
        assert_eq!(planned.total_price, 1440.0);
        assert_eq!(planned.apartment_id, 1);
    }

    #[test]
    fn plan_rejects_missing_fields_first() {
        let apartment = Db::seed().apartments[0].clone();
        let mut req = request("2024-06-01", "2024-06-04");
        req.phone = String::new();
        // even with unparseable dates, missing fields win
        req.check_out = "soon".to_string();
        match plan_booking(&apartment, &[], &req) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "الرجاء تعبئة جميع الحقول المطلوبة")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn plan_rejects_unparseable_dates() {
        let apartment = Db::seed().apartments[0].clone();
        let req = request("not-a-date", "2024-06-04");
        assert!(matches!(
            plan_booking(&apartment, &[], &req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn plan_rejects_reversed_or_equal_dates() {
        let apartment = Db::seed().apartments[0].clone();
        assert!(matches!(
            plan_booking(&apartment, &[], &request("2024-06-04", "2024-06-01")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            plan_booking(&apartment, &[], &request("2024-06-01", "2024-06-01")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn plan_rejects_overlap_as_unavailable() {
        let apartment = Db::seed().apartments[0].clone();
        let existing = [booking("2024-06-01", "2024-06-04")];
        assert!(matches!(
            plan_booking(&apartment, &existing, &request("2024-06-03", "2024-06-05")),
            Err(AppError::Unavailable)
        ));
    }

    #[test]
    fn plan_accepts_rfc3339_timestamps() {
        let apartment = Db::seed().apartments[0].clone();
        let req = request("2024-06-01T00:00:00+00:00", "2024-06-04T00:00:00+00:00");
        let planned = plan_booking(&apartment, &[], &req).unwrap();
        assert_eq!(planned.total_price, 1440.0);
    }
}

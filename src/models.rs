use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub bedrooms: u32,
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub apartment_id: u64,
    pub full_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub check_in: DateTime<FixedOffset>,
    pub check_out: DateTime<FixedOffset>,
    pub total_price: f64,
    pub created_at: DateTime<FixedOffset>,
}

// Last id assigned per sequence. Never decreases; always >= the max id
// present in the matching list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counters {
    pub apartment: u64,
    pub booking: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Db {
    pub counters: Counters,
    pub apartments: Vec<Apartment>,
    pub bookings: Vec<Booking>,
}

impl Db {
    // Initial document written on first run: three apartments, no bookings.
    pub fn seed() -> Self {
        Db {
            counters: Counters {
                apartment: 3,
                booking: 0,
            },
            apartments: vec![
                Apartment {
                    id: 1,
                    name: "جناح ديلوكس - البحر".to_string(),
                    location: "كورنيش جدة".to_string(),
                    description: "إطلالة بحرية رائعة مع صالة واسعة ومطبخ مجهز بالكامل.".to_string(),
                    bedrooms: 2,
                    price_per_night: 480.0,
                    amenities: vec![
                        "واي فاي".to_string(),
                        "موقف سيارات".to_string(),
                        "مسبح".to_string(),
                        "مطبخ".to_string(),
                    ],
                    images: vec!["/public/img/apt1.jpg".to_string()],
                },
                Apartment {
                    id: 2,
                    name: "شقة عائلية - المدينة".to_string(),
                    location: "الرياض - العليا".to_string(),
                    description: "خيار ممتاز للعوائل بالقرب من المولات والمطاعم.".to_string(),
                    bedrooms: 3,
                    price_per_night: 620.0,
                    amenities: vec![
                        "واي فاي".to_string(),
                        "تلفاز".to_string(),
                        "مطبخ".to_string(),
                        "خدمة تنظيف".to_string(),
                    ],
                    images: vec!["/public/img/apt2.jpg".to_string()],
                },
                Apartment {
                    id: 3,
                    name: "استوديو أنيق".to_string(),
                    location: "الخبر - الواجهة البحرية".to_string(),
                    description: "استوديو مريح لرحلات العمل القصيرة.".to_string(),
                    bedrooms: 1,
                    price_per_night: 300.0,
                    amenities: vec!["واي فاي".to_string(), "موقف سيارات".to_string()],
                    images: vec!["/public/img/apt3.jpg".to_string()],
                },
            ],
            bookings: Vec::new(),
        }
    }
}

// Booking fields accepted by the service once validation has passed.
// Id and creation timestamp are assigned at persistence time.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub apartment_id: u64,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub check_in: DateTime<FixedOffset>,
    pub check_out: DateTime<FixedOffset>,
    pub total_price: f64,
}

// Apartment fields accepted by the service. Coercion and defaulting happen
// in the admin route before this is built.
#[derive(Debug, Clone)]
pub struct NewApartment {
    pub name: String,
    pub location: String,
    pub description: String,
    pub bedrooms: u32,
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

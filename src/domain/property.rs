// src/domain/property.rs

use chrono::{NaiveDate, NaiveDateTime};

/// A sold property decoded from one export row, ready to be inserted.
/// Every attribute is optional here; the decoder only hands out drafts whose
/// identity and sale fields are present.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct NewProperty {
    // Address fields (street, city and zip code identify a property)
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    // Sale
    pub sale_price: Option<i64>,
    pub sale_date: Option<NaiveDate>,

    // Dimensions
    pub lot_size: Option<f64>,
    pub square_footage: Option<i64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub source_url: Option<String>,
}

impl NewProperty {
    /// Names of the required attributes that are still absent.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.street.is_none() {
            missing.push("street");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.state.is_none() {
            missing.push("state");
        }
        if self.zip_code.is_none() {
            missing.push("zip_code");
        }
        if self.sale_price.is_none() {
            missing.push("sale_price");
        }
        if self.sale_date.is_none() {
            missing.push("sale_date");
        }
        missing
    }

    /// The deduplication key, available once the address is complete.
    pub fn natural_key(&self) -> Option<NaturalKey> {
        Some(NaturalKey {
            street: self.street.clone()?,
            city: self.city.clone()?,
            zip_code: self.zip_code.clone()?,
        })
    }
}

/// Gallery image owned by a property.
#[derive(Debug, PartialEq, Clone)]
pub struct NewPropertyImage {
    pub url: String,
}

/// (street, city, zip code). State is left out so re-listings with a noisy
/// state field still collapse onto one property.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct NaturalKey {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

/// A property as stored in the `properties` table, joined with its image.
#[derive(Debug, PartialEq, Clone)]
pub struct PropertyRecord {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub sale_price: Option<i64>,
    pub sale_date: Option<NaiveDate>,
    pub lot_size: Option<f64>,
    pub square_footage: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub source_url: Option<String>,
    pub buyer_name: Option<String>,
    pub seller_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl PropertyRecord {
    pub fn address_full(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street.as_deref().unwrap_or(""),
            self.city.as_deref().unwrap_or(""),
            self.state.as_deref().unwrap_or(""),
            self.zip_code.as_deref().unwrap_or("")
        )
    }
}

//! Turns one export record into a property draft, or a reason to skip it.

use crate::domain::{NewProperty, NewPropertyImage};
use crate::ingest::columns::ColumnMap;
use crate::ingest::extractors::{
    parse_bathrooms, parse_bedrooms, parse_lot_size_acres, parse_price, parse_sale_date,
    parse_square_footage,
};
use csv::StringRecord;
use serde::Deserialize;
use std::fmt;

// payload (column 0)
//  ├── address
//  │    ├── streetAddress
//  │    ├── addressLocality
//  │    ├── addressRegion
//  │    └── postalCode
//  └── geo
//       ├── latitude
//       └── longitude

#[derive(Debug, Deserialize)]
struct ListingPayload {
    #[serde(default)]
    address: Option<PostalAddress>,
    #[serde(default)]
    geo: Option<GeoCoordinates>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress {
    street_address: Option<JsonScalar>,
    address_locality: Option<JsonScalar>,
    address_region: Option<JsonScalar>,
    postal_code: Option<JsonScalar>,
}

#[derive(Debug, Default, Deserialize)]
struct GeoCoordinates {
    latitude: Option<JsonScalar>,
    longitude: Option<JsonScalar>,
}

/// Exports are inconsistent about quoting numbers (zip codes, coordinates).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonScalar {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl JsonScalar {
    fn into_text(self) -> Option<String> {
        match self {
            JsonScalar::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            JsonScalar::Number(n) => Some(n.to_string()),
            JsonScalar::Other(_) => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            JsonScalar::Text(s) => s.trim().parse::<f64>().ok(),
            JsonScalar::Number(n) => n.as_f64(),
            JsonScalar::Other(_) => None,
        }
    }
}

/// Why a row was not turned into a property.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    InsufficientColumns(usize),
    MalformedAddress(String),
    NotSold(String),
    MissingRequired(Vec<&'static str>),
    Duplicate,
}

impl SkipReason {
    /// Stable key used to aggregate skips in the run summary.
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::InsufficientColumns(_) => "insufficient columns",
            SkipReason::MalformedAddress(_) => "malformed address payload",
            SkipReason::NotSold(_) => "not sold",
            SkipReason::MissingRequired(_) => "missing required fields",
            SkipReason::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InsufficientColumns(n) => write!(f, "Insufficient columns ({n})"),
            SkipReason::MalformedAddress(msg) => write!(f, "Malformed address payload: {msg}"),
            SkipReason::NotSold(status) => write!(f, "Not a SOLD property ({status})"),
            SkipReason::MissingRequired(fields) => {
                write!(f, "Missing essential data: {}", fields.join(", "))
            }
            SkipReason::Duplicate => write!(f, "Property already exists"),
        }
    }
}

/// Result of decoding a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Listing {
        property: NewProperty,
        image: Option<NewPropertyImage>,
    },
    Skip(SkipReason),
}

/// Decodes one export record. Pure: no I/O and no state.
pub fn decode_row(record: &StringRecord, columns: &ColumnMap) -> Decoded {
    if record.len() < columns.min_columns() {
        return Decoded::Skip(SkipReason::InsufficientColumns(record.len()));
    }

    let field = move |idx: usize| record.get(idx);

    let payload: ListingPayload =
        match serde_json::from_str(field(columns.address_json).unwrap_or("")) {
            Ok(payload) => payload,
            Err(e) => return Decoded::Skip(SkipReason::MalformedAddress(e.to_string())),
        };

    let status = field(columns.status).unwrap_or("");
    if status.trim().to_uppercase() != "SOLD" {
        return Decoded::Skip(SkipReason::NotSold(status.to_string()));
    }

    let address = payload.address.unwrap_or_default();
    let geo = payload.geo.unwrap_or_default();
    let area_and_lot = field(columns.area_and_lot);

    let property = NewProperty {
        street: address.street_address.and_then(JsonScalar::into_text),
        city: address.address_locality.and_then(JsonScalar::into_text),
        state: address.address_region.and_then(JsonScalar::into_text),
        zip_code: address.postal_code.and_then(JsonScalar::into_text),
        sale_price: parse_price(field(columns.sale_price)),
        sale_date: parse_sale_date(field(columns.sale_date)),
        lot_size: parse_lot_size_acres(area_and_lot),
        square_footage: parse_square_footage(area_and_lot),
        bedrooms: parse_bedrooms(field(columns.bedrooms)),
        bathrooms: parse_bathrooms(field(columns.bathrooms)),
        latitude: geo.latitude.as_ref().and_then(JsonScalar::to_f64),
        longitude: geo.longitude.as_ref().and_then(JsonScalar::to_f64),
        source_url: field(columns.source_url)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    };

    let missing = property.missing_required();
    if !missing.is_empty() {
        return Decoded::Skip(SkipReason::MissingRequired(missing));
    }

    let image = field(columns.image_url)
        .filter(|url| url.starts_with("http"))
        .map(|url| NewPropertyImage {
            url: url.to_string(),
        });

    Decoded::Listing { property, image }
}

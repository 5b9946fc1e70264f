//! Field extractors for the free-text columns of the listing export.
//!
//! Every extractor is total: it takes the raw column (if any) and returns the
//! typed value or `None`. Malformed text never produces an error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static SQFT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([\d,]+)\s*sqft").expect("valid sqft regex"));
static LOT_ACRES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(on\s+([\d.]+)\s+acres?\)").expect("valid lot regex"));
static BEDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+)\s*bd").expect("valid beds regex"));
static BATHS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([\d.]+)\s*ba").expect("valid baths regex"));
// chrono skips optional whitespace and takes any digit count for %Y
static SALE_DATE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z]{3}\s+\d{1,2},\s+\d{4}$").expect("valid sale date regex")
});

/// e.g. "MAR 26, 2025"
const SALE_DATE_FORMAT: &str = "%b %d, %Y";

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// "$1,234,567" -> 1234567. Only digits may remain once `$` and `,` are
/// stripped, so signs and decimals are rejected.
pub fn parse_price(raw: Option<&str>) -> Option<i64> {
    let cleaned: String = non_empty(raw)?
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let digits = cleaned.trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i64>().ok()
}

/// "MAR 26, 2025" -> 2025-03-26. Anything else is logged and dropped.
pub fn parse_sale_date(raw: Option<&str>) -> Option<NaiveDate> {
    let text = non_empty(raw)?;
    let parsed = SALE_DATE_SHAPE_RE
        .is_match(text)
        .then(|| NaiveDate::parse_from_str(text, SALE_DATE_FORMAT).ok())
        .flatten();
    if parsed.is_none() {
        log::warn!("Could not parse date: {text}");
    }
    parsed
}

/// "1,200sqft (on 0.30 acres)" -> 1200
pub fn parse_square_footage(raw: Option<&str>) -> Option<i64> {
    let caps = SQFT_RE.captures(non_empty(raw)?)?;
    caps[1].replace(',', "").parse::<i64>().ok()
}

/// "1,200sqft (on 0.30 acres)" -> 0.30
pub fn parse_lot_size_acres(raw: Option<&str>) -> Option<f64> {
    let caps = LOT_ACRES_RE.captures(non_empty(raw)?)?;
    caps[1].parse::<f64>().ok()
}

/// "3bd" -> 3
pub fn parse_bedrooms(raw: Option<&str>) -> Option<i64> {
    let caps = BEDS_RE.captures(non_empty(raw)?)?;
    caps[1].parse::<i64>().ok()
}

/// "2.5ba" -> 2.5
pub fn parse_bathrooms(raw: Option<&str>) -> Option<f64> {
    let caps = BATHS_RE.captures(non_empty(raw)?)?;
    caps[1].parse::<f64>().ok()
}

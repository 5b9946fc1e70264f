use crate::db::connection::{init_db, Database};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: [&str; 14] = [
    "address", "url", "image", "price_change", "status", "sold_date", "price", "beds_label",
    "beds_icon", "beds", "baths_icon", "baths", "area_icon", "area",
];

/// Fresh database in its own temp dir. Keep the `TempDir` alive for the test.
pub fn init_test_db() -> (Database, TempDir) {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("Temp dir creation failed: {e}"));
    let db = Database::new(dir.path().join("test_db.sqlite3"));

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (db, dir)
}

pub fn address_json(street: &str, city: &str, zip: &str) -> String {
    format!(
        r#"{{"address":{{"streetAddress":"{street}","addressLocality":"{city}","addressRegion":"UT","postalCode":"{zip}"}},"geo":{{"latitude":40.23,"longitude":-111.65}}}}"#
    )
}

/// A full-width export row for a sold listing at `street` in Provo.
pub fn sold_row(street: &str, date: &str, price: &str) -> Vec<String> {
    listing_row(&address_json(street, "Provo", "84601"), "SOLD", date, price, "")
}

pub fn listing_row(address: &str, status: &str, date: &str, price: &str, image: &str) -> Vec<String> {
    vec![
        address.to_string(),
        "https://www.trulia.com/p/ut/provo/listing".to_string(),
        image.to_string(),
        String::new(),
        status.to_string(),
        date.to_string(),
        price.to_string(),
        String::new(),
        String::new(),
        "3bd".to_string(),
        String::new(),
        "2ba".to_string(),
        String::new(),
        "1,850sqft (on 0.22 acres)".to_string(),
    ]
}

/// Writes a header plus `rows` to `dir/name` with proper CSV quoting.
pub fn write_csv(dir: &Path, name: &str, rows: &[Vec<String>]) -> PathBuf {
    let path = dir.join(name);
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&path)
        .unwrap();
    writer.write_record(HEADER).unwrap();
    for row in rows {
        writer.write_record(row).unwrap();
    }
    writer.flush().unwrap();
    path
}

pub fn count(db: &Database, table: &str) -> i64 {
    db.with_conn(|conn| {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?)
    })
    .unwrap()
}

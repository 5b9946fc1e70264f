use crate::domain::{NaturalKey, NewProperty, NewPropertyImage, Page, PropertyRecord};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Page size of the sold-properties listing.
pub const PER_PAGE: i64 = 10;

/// Finds a property by its natural key (street, city, zip code).
pub fn find_by_natural_key(conn: &Connection, key: &NaturalKey) -> Result<Option<i64>, ServerError> {
    conn.query_row(
        r#"
        SELECT id FROM properties
        WHERE street = ?1 AND city = ?2 AND zip_code = ?3
        LIMIT 1
        "#,
        params![&key.street, &key.city, &key.zip_code],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(e.to_string()))
}

/// Inserts a new property and, if given, its image. Returns the property id.
///
/// Callers own the transaction; both inserts land or neither does.
pub fn insert_property(
    conn: &Connection,
    prop: &NewProperty,
    image: Option<&NewPropertyImage>,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    let mut stmt = conn.prepare_cached(
        r#"
        INSERT INTO properties (
            street, city, state, zip_code, sale_price, sale_date, lot_size,
            square_footage, latitude, longitude, bedrooms, bathrooms, source_url,
            created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        "#,
    )?;
    stmt.execute(params![
        &prop.street,
        &prop.city,
        &prop.state,
        &prop.zip_code,
        &prop.sale_price,
        &prop.sale_date,
        &prop.lot_size,
        &prop.square_footage,
        &prop.latitude,
        &prop.longitude,
        &prop.bedrooms,
        &prop.bathrooms,
        &prop.source_url,
        now,
    ])?;
    let property_id = conn.last_insert_rowid();

    if let Some(image) = image {
        conn.execute(
            "INSERT INTO property_images (property_id, url) VALUES (?1, ?2)",
            params![property_id, &image.url],
        )?;
    }

    Ok(property_id)
}

pub fn count_properties(conn: &Connection) -> Result<i64, ServerError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))?)
}

/// Returns one page of properties, most recent sale first.
///
/// Pages past the end come back empty rather than as an error.
pub fn get_properties_page(
    conn: &Connection,
    page: i64,
    per_page: i64,
) -> Result<Page<PropertyRecord>, ServerError> {
    let page = page.max(1);
    let total_items = count_properties(conn)?;

    let Some(offset) = Page::<PropertyRecord>::offset(page, per_page) else {
        return Ok(Page::new(Vec::new(), page, per_page, total_items));
    };

    let mut stmt = conn.prepare(
        r#"
        SELECT
            p.id, p.street, p.city, p.state, p.zip_code, p.sale_price, p.sale_date,
            p.lot_size, p.square_footage, p.latitude, p.longitude, p.bedrooms,
            p.bathrooms, p.source_url, p.buyer_name, p.seller_name, p.created_at,
            i.url AS image_url
        FROM properties p
        LEFT JOIN property_images i ON i.property_id = p.id
        -- NULL sale dates sort last; id keeps ties stable
        ORDER BY p.sale_date IS NULL, p.sale_date DESC, p.id DESC
        LIMIT ?1 OFFSET ?2
        "#,
    )?;

    let rows = stmt.query_map(
        params![per_page, offset],
        property_from_row,
    )?;

    let mut items = Vec::new();
    for row in rows {
        items.push(row?);
    }

    Ok(Page::new(items, page, per_page, total_items))
}

fn property_from_row(row: &Row<'_>) -> rusqlite::Result<PropertyRecord> {
    Ok(PropertyRecord {
        id: row.get("id")?,
        street: row.get("street")?,
        city: row.get("city")?,
        state: row.get("state")?,
        zip_code: row.get("zip_code")?,
        sale_price: row.get("sale_price")?,
        sale_date: row.get("sale_date")?,
        lot_size: row.get("lot_size")?,
        square_footage: row.get("square_footage")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        bedrooms: row.get("bedrooms")?,
        bathrooms: row.get("bathrooms")?,
        source_url: row.get("source_url")?,
        buyer_name: row.get("buyer_name")?,
        seller_name: row.get("seller_name")?,
        created_at: row.get("created_at")?,
        image_url: row.get("image_url")?,
    })
}

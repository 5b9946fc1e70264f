//! Column layout of the listing export.

/// Positions of the columns the decoder reads, by name.
///
/// The export has no stable header names, so positions are the contract.
/// `Default` is the layout of the current export; a different layout only
/// needs a different map, not a different decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// JSON document with `address` and `geo` objects
    pub address_json: usize,
    pub source_url: usize,
    pub image_url: usize,
    pub status: usize,
    pub sale_date: usize,
    pub sale_price: usize,
    pub bedrooms: usize,
    pub bathrooms: usize,
    /// "1,200sqft (on 0.30 acres)"
    pub area_and_lot: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            address_json: 0,
            source_url: 1,
            image_url: 2,
            status: 4,
            sale_date: 5,
            sale_price: 6,
            bedrooms: 9,
            bathrooms: 11,
            area_and_lot: 13,
        }
    }
}

impl ColumnMap {
    /// Records shorter than this are rejected before any field is read.
    pub fn min_columns(&self) -> usize {
        [
            self.address_json,
            self.source_url,
            self.image_url,
            self.status,
            self.sale_date,
            self.sale_price,
            self.bedrooms,
            self.bathrooms,
            self.area_and_lot,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

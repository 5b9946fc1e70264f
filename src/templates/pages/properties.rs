// templates/pages/properties.rs

use crate::domain::{Page, PropertyRecord};
use crate::templates::{components::pagination_nav, desktop_layout};
use maud::{html, Markup};

pub fn properties_page(page: &Page<PropertyRecord>) -> Markup {
    desktop_layout(
        "Sold Properties",
        html! {
            h1 { "Sold Properties" }
            p class="muted" { (page.total_items) " properties, most recent sale first" }

            @if page.items.is_empty() {
                p { "No properties on this page." }
            } @else {
                div style="overflow-x: auto;" {
                    table {
                        thead {
                            tr {
                                th { "" }
                                th { "Address" }
                                th { "Sale Price" }
                                th { "Sale Date" }
                                th { "Beds" }
                                th { "Baths" }
                                th { "Sq Ft" }
                                th { "Lot (acres)" }
                                th { "Listing" }
                            }
                        }
                        tbody {
                            @for prop in &page.items {
                                (property_row(prop))
                            }
                        }
                    }
                }
            }

            (pagination_nav(page, "/index"))
        },
    )
}

fn property_row(prop: &PropertyRecord) -> Markup {
    html! {
        tr {
            td {
                @if let Some(url) = &prop.image_url {
                    img class="thumb" src=(url) alt=(prop.address_full()) loading="lazy";
                }
            }
            td { (prop.address_full()) }
            td {
                @match prop.sale_price {
                    Some(price) => (format_price(price)),
                    None => span class="muted" { "-" },
                }
            }
            td {
                @match prop.sale_date {
                    Some(date) => (date.format("%b %-d, %Y").to_string()),
                    None => span class="muted" { "-" },
                }
            }
            td { (optional(prop.bedrooms)) }
            td { (optional(prop.bathrooms)) }
            td {
                @match prop.square_footage {
                    Some(sqft) => (format_count(sqft)),
                    None => span class="muted" { "-" },
                }
            }
            td {
                @match prop.lot_size {
                    Some(acres) => (format!("{acres:.2}")),
                    None => span class="muted" { "-" },
                }
            }
            td {
                @if let Some(url) = &prop.source_url {
                    a href=(url) target="_blank" rel="noopener" { "View" }
                }
            }
        }
    }
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// 452000 -> "$452,000"
pub fn format_price(price: i64) -> String {
    let sign = if price < 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(price.unsigned_abs()))
}

fn format_count(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(value.unsigned_abs()))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

use maud::{html, Markup};

pub mod error;
pub mod pagination;

pub use error::html_error_response;
pub use pagination::pagination_nav;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

use crate::domain::Page;
use maud::{html, Markup};

/// Newer/older links plus a "Page X of Y" marker. `base` is the route the
/// `?page=` parameter is appended to.
pub fn pagination_nav<T>(page: &Page<T>, base: &str) -> Markup {
    html! {
        nav class="pagination" {
            @if let Some(prev) = page.prev_num() {
                a href=(format!("{base}?page={prev}")) { "« Newer" }
            } @else {
                span class="muted" { "« Newer" }
            }

            span { "Page " (page.page) " of " (page.total_pages.max(1)) }

            @if let Some(next) = page.next_num() {
                a href=(format!("{base}?page={next}")) { "Older »" }
            } @else {
                span class="muted" { "Older »" }
            }
        }
    }
}

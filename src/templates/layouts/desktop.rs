use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
              header class="site-header" {
                  h3 { "Real Estate Sales Tracker" }
                  nav {
                      ul {
                          li { a href="/" { "Sold Properties" } }
                          li { a href="/imports" { "Imports" } }
                      }
                  }
              }
                main class="container" {
                    (content)
                }
            }
        }
    }
}

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
.site-header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.site-header ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.container { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 2rem; }
table { width: 100%; border-collapse: collapse; }
th { padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left; }
td { padding: 8px; border-bottom: 1px solid #f3f4f6; vertical-align: top; }
.thumb { width: 96px; height: 64px; object-fit: cover; border-radius: 4px; }
.pagination { display: flex; gap: 1rem; align-items: center; justify-content: center; margin-top: 1.5rem; }
.muted { color: #6b7280; font-style: italic; }
"#;

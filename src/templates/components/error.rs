use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Maps a ServerError onto its status code and error page.
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::DbError(msg) => {
            log::error!("Database error while serving request: {msg}");
            render_error(500, "Database Error")
        }

        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

/// Error page in the site layout, so navigation stays available.
fn render_error(status: u16, message: &str) -> Response {
    let title = format!("Error {status}");
    let page = desktop_layout(
        &title,
        html! {
            h1 { (title) }
            p class="muted" { (message) }
            p { a href="/" { "Back to sold properties" } }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

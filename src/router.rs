use crate::db::import_runs::get_recent_imports;
use crate::db::properties::{get_properties_page, PER_PAGE};
use crate::db::Database;
use crate::domain::page::page_from_query;
use crate::errors::ServerError;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::templates;
use astra::Request;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") | ("GET", "/index") => {
            let page = page_from_query(req.uri().query());
            let properties = db.with_conn(|conn| get_properties_page(conn, page, PER_PAGE))?;
            html_response(templates::pages::properties_page(&properties))
        }
        ("GET", "/imports") => {
            let runs = db.with_conn(|conn| get_recent_imports(conn))?;
            html_response(templates::pages::imports_page(&runs))
        }
        _ => Err(ServerError::NotFound),
    }
}

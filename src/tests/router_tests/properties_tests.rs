use crate::db::connection::Database;
use crate::ingest::{ImportOptions, Importer};
use crate::router::handle;
use crate::tests::utils::{init_test_db, sold_row, write_csv};
use astra::Body;
use http::{Method, Request};
use std::io::Read;
use std::path::Path;

fn get(db: &Database, uri: &str) -> (u16, String) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let mut resp = handle(req, db).expect("Handler failed");

    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    (resp.status().as_u16(), String::from_utf8(body_bytes).unwrap())
}

fn seed(db: &Database, dir: &Path, n: usize) {
    let rows: Vec<_> = (1..=n)
        .map(|i| sold_row(&format!("{i} Main St"), &format!("JAN {i:02}, 2025"), "$452,000"))
        .collect();
    let csv = write_csv(dir, "seed.csv", &rows);
    Importer::new(db, ImportOptions::default()).run(&csv).unwrap();
}

#[test]
fn index_lists_most_recent_sales() {
    let (db, dir) = init_test_db();
    seed(&db, dir.path(), 12);

    let (status, body) = get(&db, "/");

    assert_eq!(status, 200);
    assert!(body.contains("Sold Properties"));
    assert!(body.contains("12 Main St, Provo, UT 84601"));
    assert!(body.contains("$452,000"));
    assert!(body.contains("Page 1 of 2"));
    // Oldest two sales land on page 2
    assert!(!body.contains("<td>1 Main St, Provo"));
}

#[test]
fn index_alias_honours_page_parameter() {
    let (db, dir) = init_test_db();
    seed(&db, dir.path(), 12);

    let (status, body) = get(&db, "/index?page=2");

    assert_eq!(status, 200);
    assert!(body.contains("Page 2 of 2"));
    assert!(body.contains("1 Main St, Provo, UT 84601"));
    assert!(body.contains("2 Main St, Provo, UT 84601"));
    assert!(!body.contains("<td>3 Main St, Provo"));
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let (db, dir) = init_test_db();
    seed(&db, dir.path(), 3);

    let (status, body) = get(&db, "/index?page=4");

    assert_eq!(status, 200);
    assert!(body.contains("No properties on this page."));
}

#[test]
fn largest_page_number_renders_an_empty_page() {
    let (db, dir) = init_test_db();
    seed(&db, dir.path(), 3);

    let (status, body) = get(&db, "/index?page=9223372036854775807");

    assert_eq!(status, 200);
    assert!(body.contains("No properties on this page."));
    assert!(!body.contains("<td>1 Main St, Provo"));
    assert!(body.contains("Page 9223372036854775807 of 1"));
}

#[test]
fn invalid_page_falls_back_to_first() {
    let (db, dir) = init_test_db();
    seed(&db, dir.path(), 3);

    let (status, body) = get(&db, "/?page=abc");

    assert_eq!(status, 200);
    assert!(body.contains("3 Main St, Provo, UT 84601"));
}

#[test]
fn unknown_route_is_not_found() {
    let (db, _dir) = init_test_db();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/properties/1")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &db).unwrap_err();
    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 404);
}

#[test]
fn post_to_index_is_not_found() {
    let (db, _dir) = init_test_db();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(
        handle(req, &db),
        Err(crate::errors::ServerError::NotFound)
    ));
}

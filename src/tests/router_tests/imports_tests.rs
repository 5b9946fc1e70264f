use crate::ingest::{ImportOptions, Importer};
use crate::router::handle;
use crate::tests::utils::{init_test_db, sold_row, write_csv};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

#[test]
fn imports_page_shows_recorded_runs() {
    let (db, dir) = init_test_db();
    let csv = write_csv(
        dir.path(),
        "trulia1.csv",
        &[sold_row("12 Oak St", "MAR 26, 2025", "$452,000")],
    );
    Importer::new(&db, ImportOptions::default()).run(&csv).unwrap();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/imports")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &db).expect("Handler failed");

    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    assert!(body.contains("Recent Runs"));
    assert!(body.contains("trulia1.csv"));
    assert!(body.contains("Completed"));
}

#[test]
fn imports_page_without_runs() {
    let (db, _dir) = init_test_db();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/imports")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &db).expect("Handler failed");

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    assert!(body.contains("No imports yet."));
}

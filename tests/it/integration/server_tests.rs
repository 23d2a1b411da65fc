//! Server tests: routing through the handler and one real socket round trip.

use crate::helpers::{SMALL_CSV, write_fixture};
use album_dashboard::app::ViewOptions;
use album_dashboard::data::DatasetCache;
use album_dashboard::server::{AppState, DashboardHandler, DashboardServer};
use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tiny_http::Method;

fn ready_handler() -> DashboardHandler {
    let (_dir, path) = write_fixture("albums.csv", SMALL_CSV);
    let dataset = DatasetCache::new().load(&path).expect("load");
    DashboardHandler::new(AppState::Ready(dataset), ViewOptions::default())
}

#[test]
fn test_dashboard_page_applies_query() {
    let handler = ready_handler();
    let response = handler.handle(&Method::Get, "/?artist=B&rival=A&rival=B");

    assert_eq!(response.status, 200);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.body.contains(r#"<option value="B" selected>B</option>"#));
    assert!(response.body.contains(r#"<svg class="line-chart""#));
}

#[test]
fn test_unknown_artist_falls_back_to_default() {
    let handler = ready_handler();
    let response = handler.handle(&Method::Get, "/?artist=Nobody");

    assert_eq!(response.status, 200);
    assert!(response.body.contains(r#"<option value="A" selected>A</option>"#));
}

#[test]
fn test_load_failure_page() {
    let cache = DatasetCache::new();
    let result = cache.load(Path::new("/nonexistent/kpop_albums.csv"));
    let handler = DashboardHandler::new(AppState::from_load(result), ViewOptions::default());

    let page = handler.handle(&Method::Get, "/");
    assert_eq!(page.status, 500);
    assert!(page.body.contains("NotFoundError"));
    assert!(page.body.contains("kpop_albums.csv"));

    let api = handler.handle(&Method::Get, "/api/dataset");
    assert_eq!(api.status, 500);
    assert_eq!(handler.handle(&Method::Get, "/health").status, 200);
}

#[test]
fn test_socket_round_trip() {
    let server = DashboardServer::bind("127.0.0.1:0", ready_handler()).expect("bind");
    let url = server.url();
    let addr = url
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string();

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    let worker = std::thread::spawn(move || server.run(&flag));

    let mut stream = TcpStream::connect(&addr).expect("connect");
    write!(
        stream,
        "GET /health HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        addr
    )
    .expect("send request");
    let mut response = String::new();
    stream.read_to_string(&mut response).expect("read response");

    shutdown.store(true, Ordering::Relaxed);
    worker.join().expect("server thread");

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.ends_with("ok"));
}

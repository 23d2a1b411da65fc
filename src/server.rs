//! Local HTTP server for the dashboard page.
//!
//! ## Architecture
//!
//! A single thread owns a `tiny_http` server and answers requests one at a
//! time. Each page request builds a [`Dashboard`] over the shared dataset,
//! applies the selection from the query string, and renders the page
//! synchronously. Nothing runs in the background.
//!
//! Routes:
//! - `/` - the dashboard page
//! - `/health` - liveness probe
//! - `/api/dataset` - the full dataset as JSON

use crate::app::{Dashboard, SelectionQuery, ViewOptions};
use crate::constants::SERVER_POLL_MS;
use crate::data::DataError;
use crate::perf::ScopedTimer;
use crate::render::{render_error_page, render_page};
use crate::types::Dataset;
use anyhow::anyhow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};
use tracing::{debug, error, info, warn};

/// Renders above this threshold (ms) are logged as slow
const SLOW_RENDER_MS: f64 = 100.0;

/// Helper to create HTTP headers, returning None if the bytes are invalid
fn create_header(name: &[u8], value: &[u8]) -> Option<Header> {
    Header::from_bytes(name, value).ok()
}

/// Outcome of the startup load
pub enum AppState {
    /// Dataset loaded; pages render normally
    Ready(Arc<Dataset>),
    /// Dataset failed to load; every page shows the failure
    Failed { kind: &'static str, message: String },
}

impl AppState {
    pub fn from_load(result: Result<Arc<Dataset>, DataError>) -> Self {
        match result {
            Ok(dataset) => AppState::Ready(dataset),
            Err(e) => AppState::Failed {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

/// A response ready to be written to the socket
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
        }
    }

    fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body,
        }
    }
}

/// Route table and page handlers, independent of the socket
pub struct DashboardHandler {
    state: AppState,
    options: ViewOptions,
}

impl DashboardHandler {
    pub fn new(state: AppState, options: ViewOptions) -> Self {
        Self { state, options }
    }

    /// Answer one request
    pub fn handle(&self, method: &Method, url: &str) -> HttpResponse {
        if *method != Method::Get && *method != Method::Head {
            return HttpResponse::text(405, "method not allowed");
        }

        let path = url.split(['?', '#']).next().unwrap_or("/");
        match path {
            "/" | "/index.html" => self.dashboard_page(url),
            "/health" => HttpResponse::text(200, "ok"),
            "/api/dataset" => self.dataset_json(),
            _ => HttpResponse::text(404, "not found"),
        }
    }

    fn dashboard_page(&self, url: &str) -> HttpResponse {
        let dataset = match &self.state {
            AppState::Ready(dataset) => Arc::clone(dataset),
            AppState::Failed { kind, message } => {
                return HttpResponse::html(
                    500,
                    render_error_page(&self.options.title, kind, message),
                );
            }
        };

        let _timer = ScopedTimer::new("render_dashboard", SLOW_RENDER_MS);
        let query = SelectionQuery::from_url(url);
        debug!(
            "Selection artist={:?} rivals={:?}",
            query.artist, query.rivals
        );

        let mut dashboard = Dashboard::new(dataset, self.options.clone());
        dashboard.apply_query(&query);
        HttpResponse::html(200, render_page(&dashboard.view()))
    }

    fn dataset_json(&self) -> HttpResponse {
        match &self.state {
            AppState::Ready(dataset) => match serde_json::to_string(dataset.records()) {
                Ok(body) => HttpResponse::json(body),
                Err(e) => {
                    error!("Failed to serialize dataset: {}", e);
                    HttpResponse::text(500, "serialization failed")
                }
            },
            AppState::Failed { kind, message } => {
                HttpResponse::text(500, format!("{}: {}", kind, message))
            }
        }
    }
}

/// The bound server plus its handler
pub struct DashboardServer {
    server: Server,
    handler: DashboardHandler,
}

impl DashboardServer {
    /// Bind to `addr` (`host:port`); port 0 picks a free port
    pub fn bind(addr: &str, handler: DashboardHandler) -> anyhow::Result<Self> {
        let server = Server::http(addr)
            .map_err(|e| anyhow!("Failed to start dashboard server on {}: {}", addr, e))?;
        Ok(Self { server, handler })
    }

    /// Address actually bound, as an `http://` URL
    pub fn url(&self) -> String {
        match self.server.server_addr().to_ip() {
            Some(addr) => format!("http://{}/", addr),
            None => "http://localhost/".to_string(),
        }
    }

    /// Serve requests until `shutdown` is set
    pub fn run(&self, shutdown: &AtomicBool) {
        info!("Dashboard available at {}", self.url());
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match self
                .server
                .recv_timeout(Duration::from_millis(SERVER_POLL_MS))
            {
                Ok(Some(request)) => self.serve(request),
                Ok(None) => {}
                Err(e) => {
                    error!("Dashboard server stopped: {}", e);
                    break;
                }
            }
        }
    }

    fn serve(&self, request: Request) {
        let response = self.handler.handle(request.method(), request.url());
        debug!(
            "{} {} -> {}",
            request.method(),
            request.url(),
            response.status
        );

        let mut http = Response::from_string(response.body).with_status_code(StatusCode(response.status));
        if let Some(header) = create_header(&b"Content-Type"[..], response.content_type.as_bytes()) {
            http = http.with_header(header);
        }
        if let Err(e) = request.respond(http) {
            warn!("Failed to send response: {}", e);
        }
    }
}

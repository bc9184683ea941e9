//! Shared test helpers: an in-process axum stub of the report backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Multipart, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use reportdesk_client::RestReportClient;
use reportdesk_core::config::api::ApiConfig;
use reportdesk_core::types::pagination::total_pages;
use reportdesk_entity::report::{
    CreateReportRequest, Report, ReportPage, ToggleReportRequest, UpdateReportRequest,
};

/// HTML document returned by the stub generate endpoint.
pub const GENERATED_HTML: &str = "<html>OK</html>";

/// Build a sample report with the given id.
pub fn sample_report(id: i64) -> Report {
    Report {
        id,
        template: format!("<p>template {id}</p>"),
        user_mail: "owner@example.com".to_string(),
        active: true,
        create_at: Utc::now(),
        update_at: Utc::now(),
    }
}

#[derive(Clone)]
struct BackendState {
    reports: Arc<Mutex<Vec<Report>>>,
    /// Multipart fields received by the last generate call.
    generate_fields: Arc<Mutex<HashMap<String, String>>>,
}

/// An in-process stub of the report backend.
pub struct TestBackend {
    /// Base URL including the `/api/v1` prefix.
    pub base_url: String,
    reports: Arc<Mutex<Vec<Report>>>,
    generate_fields: Arc<Mutex<HashMap<String, String>>>,
}

impl TestBackend {
    /// Spawn the stub on an ephemeral port, pre-seeded with reports.
    pub async fn spawn(initial: Vec<Report>) -> Self {
        let state = BackendState {
            reports: Arc::new(Mutex::new(initial)),
            generate_fields: Arc::new(Mutex::new(HashMap::new())),
        };

        let api = Router::new()
            .route(
                "/reports",
                get(list_reports).post(create_report).put(update_report),
            )
            .route("/reports/filter", get(filter_reports))
            .route("/reports/turnonoff", post(toggle_report))
            .route("/reports/generate", post(generate_report))
            .with_state(state.clone());
        let app = Router::new().nest("/api/v1", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend died");
        });

        Self {
            base_url: format!("http://{addr}/api/v1"),
            reports: state.reports,
            generate_fields: state.generate_fields,
        }
    }

    /// A REST client pointed at this backend.
    pub fn client(&self) -> Arc<RestReportClient> {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            request_timeout_seconds: 5,
            generate_timeout_seconds: 5,
        };
        Arc::new(RestReportClient::from_config(&config).expect("Failed to build client"))
    }

    /// Snapshot of the backend's report table.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// Multipart fields received by the last generate call.
    pub fn generate_fields(&self) -> HashMap<String, String> {
        self.generate_fields.lock().unwrap().clone()
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<u64>,
    page_size: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FilterQuery {
    id: i64,
    user_mail: Option<String>,
    page: Option<u64>,
    page_size: Option<u64>,
}

fn paginate(reports: Vec<Report>, page: Option<u64>, page_size: Option<u64>) -> ReportPage {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(10).max(1);
    let total_count = reports.len() as u64;
    let start = ((page - 1) * page_size) as usize;
    let items: Vec<Report> = reports
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();
    ReportPage {
        reports: items,
        total_count,
        page,
        page_size,
        total_pages: total_pages(total_count, page_size),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

async fn list_reports(State(state): State<BackendState>, Query(q): Query<PageQuery>) -> Response {
    let reports = state.reports.lock().unwrap().clone();
    axum::Json(paginate(reports, q.page, q.page_size)).into_response()
}

async fn filter_reports(
    State(state): State<BackendState>,
    Query(q): Query<FilterQuery>,
) -> Response {
    let reports: Vec<Report> = state
        .reports
        .lock()
        .unwrap()
        .iter()
        .filter(|r| r.id == q.id)
        .filter(|r| q.user_mail.as_ref().is_none_or(|mail| &r.user_mail == mail))
        .cloned()
        .collect();
    axum::Json(paginate(reports, q.page, q.page_size)).into_response()
}

async fn create_report(
    State(state): State<BackendState>,
    axum::Json(req): axum::Json<CreateReportRequest>,
) -> Response {
    let mut reports = state.reports.lock().unwrap();
    let id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    let report = Report {
        id,
        template: req.template,
        user_mail: req.user_mail,
        active: true,
        create_at: Utc::now(),
        update_at: Utc::now(),
    };
    reports.push(report.clone());
    (StatusCode::CREATED, axum::Json(report)).into_response()
}

async fn update_report(
    State(state): State<BackendState>,
    axum::Json(req): axum::Json<UpdateReportRequest>,
) -> Response {
    let mut reports = state.reports.lock().unwrap();
    match reports.iter_mut().find(|r| r.id == req.id) {
        Some(entry) => {
            entry.template = req.template;
            entry.update_at = Utc::now();
            axum::Json(entry.clone()).into_response()
        }
        None => error_response(StatusCode::NOT_FOUND, "report not found"),
    }
}

async fn toggle_report(
    State(state): State<BackendState>,
    axum::Json(req): axum::Json<ToggleReportRequest>,
) -> Response {
    let mut reports = state.reports.lock().unwrap();
    match reports.iter_mut().find(|r| r.id == req.id) {
        Some(entry) => {
            entry.active = req.active;
            StatusCode::NO_CONTENT.into_response()
        }
        None => error_response(StatusCode::NOT_FOUND, "report not found"),
    }
}

async fn generate_report(State(state): State<BackendState>, mut multipart: Multipart) -> Response {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.unwrap_or_default();
            fields.insert("file_name".to_string(), file_name);
            fields.insert("file_len".to_string(), bytes.len().to_string());
        } else {
            let value = field.text().await.unwrap_or_default();
            fields.insert(name, value);
        }
    }

    let Some(id) = fields.get("idReport").and_then(|v| v.parse::<i64>().ok()) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid idReport");
    };
    *state.generate_fields.lock().unwrap() = fields;

    let known = state.reports.lock().unwrap().iter().any(|r| r.id == id);
    if !known {
        return error_response(StatusCode::NOT_FOUND, "report not found");
    }

    ([(header::CONTENT_TYPE, "text/html")], GENERATED_HTML).into_response()
}

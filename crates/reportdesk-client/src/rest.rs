//! reqwest-backed implementation of [`ReportApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use tracing::debug;
use validator::Validate;

use reportdesk_core::config::api::ApiConfig;
use reportdesk_core::{AppError, AppResult};
use reportdesk_entity::generation::GenerateReportRequest;
use reportdesk_entity::report::{
    CreateReportRequest, FilterReportsQuery, ListReportsQuery, Report, ReportPage,
    ToggleReportRequest, UpdateReportRequest, minify_template,
};

use crate::api::ReportApi;

/// HTTP client for the report backend.
///
/// All operations are one-shot: no retry policy, every failure propagates
/// to the caller as an [`AppError`] carrying a human-readable message.
#[derive(Debug, Clone)]
pub struct RestReportClient {
    http: reqwest::Client,
    base_url: String,
    generate_timeout: Duration,
}

impl RestReportClient {
    /// Create a client from configuration.
    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            generate_timeout: Duration::from_secs(config.generate_timeout_seconds),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a transport-level failure to an [`AppError`].
    fn transport_error(err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::transport(format!("Request timed out: {err}"))
        } else {
            AppError::transport(format!("Network error: {err}"))
        }
    }

    /// Turn a non-2xx response into an [`AppError`], preferring the
    /// backend's `{"error": ...}` message over the raw body.
    async fn status_error(response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);
        if message.is_empty() {
            AppError::http(status, "request failed")
        } else {
            AppError::http(status, message)
        }
    }

    /// Send a request, check the status, and decode a JSON body.
    async fn expect_json<T: serde::de::DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> AppResult<T> {
        let response = request.send().await.map_err(Self::transport_error)?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::serialization(format!("Invalid response body: {e}")))
    }

    fn page_params(query: Option<reportdesk_core::types::PageRequest>) -> Vec<(&'static str, String)> {
        match query {
            Some(page) => vec![
                ("page", page.page.to_string()),
                ("page_size", page.page_size.to_string()),
            ],
            None => Vec::new(),
        }
    }
}

fn validation_error(err: validator::ValidationErrors) -> AppError {
    let message = err
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for '{field}'"))
            })
        })
        .collect::<Vec<_>>()
        .join("; ");
    AppError::validation(message)
}

#[async_trait]
impl ReportApi for RestReportClient {
    async fn list_reports(&self, query: ListReportsQuery) -> AppResult<ReportPage> {
        debug!(page = ?query.page, "listing reports");
        Self::expect_json(
            self.http
                .get(self.url("/reports"))
                .query(&Self::page_params(query.page)),
        )
        .await
    }

    async fn filter_reports(&self, query: FilterReportsQuery) -> AppResult<ReportPage> {
        query.validate().map_err(validation_error)?;
        debug!(id = query.id, user_mail = ?query.user_mail, "filtering reports");

        let mut params = vec![("id", query.id.to_string())];
        if let Some(mail) = &query.user_mail {
            params.push(("user_mail", mail.clone()));
        }
        params.extend(Self::page_params(query.page));

        Self::expect_json(self.http.get(self.url("/reports/filter")).query(&params)).await
    }

    async fn create_report(&self, mut req: CreateReportRequest) -> AppResult<Report> {
        req.validate().map_err(validation_error)?;
        req.template = minify_template(&req.template);
        debug!(user_mail = %req.user_mail, "creating report");
        Self::expect_json(self.http.post(self.url("/reports")).json(&req)).await
    }

    async fn update_report(&self, mut req: UpdateReportRequest) -> AppResult<Report> {
        req.validate().map_err(validation_error)?;
        req.template = minify_template(&req.template);
        debug!(id = req.id, "updating report");
        Self::expect_json(self.http.put(self.url("/reports")).json(&req)).await
    }

    async fn set_report_active(&self, req: ToggleReportRequest) -> AppResult<()> {
        req.validate().map_err(validation_error)?;
        debug!(id = req.id, active = req.active, "toggling report");

        let response = self
            .http
            .post(self.url("/reports/turnonoff"))
            .json(&req)
            .send()
            .await
            .map_err(Self::transport_error)?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        Ok(())
    }

    async fn generate_report(&self, req: GenerateReportRequest) -> AppResult<String> {
        debug!(
            report_id = req.report_id,
            file = %req.file.file_name,
            size = req.file.size(),
            "generating report"
        );

        let mut part = multipart::Part::bytes(req.file.content.to_vec())
            .file_name(req.file.file_name.clone());
        if let Some(mime) = &req.file.content_type {
            part = part
                .mime_str(mime)
                .map_err(|e| AppError::validation(format!("Invalid MIME type '{mime}': {e}")))?;
        }

        let mut form = multipart::Form::new()
            .text("idReport", req.report_id.to_string())
            .part("file", part);
        if let Some(prompt) = req.prompt {
            form = form.text("prompt", prompt);
        }
        if let Some(model) = req.model {
            form = form.text("model", model);
        }
        if let Some(provider) = req.provider {
            form = form.text("llm", provider);
        }

        let response = self
            .http
            .post(self.url("/reports/generate"))
            .timeout(self.generate_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport_error)?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        // The generate endpoint answers with raw HTML text, not JSON.
        response
            .text()
            .await
            .map_err(|e| AppError::serialization(format!("Invalid response body: {e}")))
    }
}

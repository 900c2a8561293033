//! HTTP implementation of the records-service contract
//!
//! All operations POST/GET JSON against a configured base endpoint. Error
//! bodies carry an optional `{ "message": ... }` field; when present that
//! text is surfaced to the user, otherwise a generic per-operation message
//! is used.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use oppdeck_core::error::{Error, Result};
use oppdeck_core::types::{NewOpportunity, Opportunity, StageOption};

use crate::service::RecordService;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Page-fetch request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    search_key: &'a str,
    account_id: &'a str,
    offset: u64,
    limit: u64,
}

/// Count request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountRequest<'a> {
    search_key: &'a str,
    account_id: &'a str,
}

/// Error body shape the service answers with (all fields optional).
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    message: Option<String>,
}

/// Extract the user-facing message from a non-2xx response body.
///
/// Falls back to the HTTP status line when the body carries no `message`.
fn service_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Records service answered {status}"));
    Error::Service { message }
}

/// HTTP client for the records service.
///
/// Cheap to clone (the inner `reqwest::Client` is reference-counted); each
/// spawned task takes its own clone.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RecordsClient {
    /// Build a client for the given endpoint. `auth_token`, when set, is
    /// sent as a bearer token with every request.
    pub fn new(base_url: &str, auth_token: Option<&str>) -> Result<Self> {
        // Url::join drops the last path segment unless the base ends in '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|_| Error::InvalidEndpoint {
            url: base_url.to_string(),
        })?;

        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = auth_token {
            let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::config("Auth token contains invalid header characters"))?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Url {
        // The base is normalized with a trailing slash, so join cannot fail
        // for the fixed relative paths used below.
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Convert a transport-or-status failure into our error type, reading
    /// the body of non-2xx answers for a service message.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(service_error(status, &body))
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        debug!(%url, "POST records service");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        Self::check(response).await
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        debug!(%url, "GET records service");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        Self::check(response).await
    }
}

impl RecordService for RecordsClient {
    async fn fetch_urgent_opportunities(
        &self,
        search_key: &str,
        account_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Opportunity>> {
        let request = SearchRequest {
            search_key,
            account_id,
            offset,
            limit,
        };
        let response = self
            .post_json("urgent-opportunities/search", &request)
            .await?;
        response
            .json::<Vec<Opportunity>>()
            .await
            .map_err(|e| Error::malformed_response(e.to_string()))
    }

    async fn fetch_total_record_count(&self, search_key: &str, account_id: &str) -> Result<u64> {
        let request = CountRequest {
            search_key,
            account_id,
        };
        let response = self
            .post_json("urgent-opportunities/count", &request)
            .await?;
        response
            .json::<u64>()
            .await
            .map_err(|e| Error::malformed_response(e.to_string()))
    }

    async fn save_new_opportunity(&self, opportunity: &NewOpportunity) -> Result<bool> {
        let response = self.post_json("urgent-opportunities", opportunity).await?;
        response
            .json::<bool>()
            .await
            .map_err(|e| Error::malformed_response(e.to_string()))
    }

    async fn fetch_stage_options(&self) -> Result<Vec<StageOption>> {
        let response = self.get("stage-options").await?;
        response
            .json::<Vec<StageOption>>()
            .await
            .map_err(|e| Error::malformed_response(e.to_string()))
    }
}

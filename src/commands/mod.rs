//! Backend API Client
//!
//! HTTP bindings to the backend, organized by domain. Every call returns the
//! same shape, `Result<ApiReply<T>, ApiError>`; each caller decides which
//! fields it cares about.

mod dashboard;
mod social;
mod task;

use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// Re-export all public items
pub use dashboard::*;
pub use social::*;
pub use task::*;

const CSRF_HEADER: &str = "X-CSRFToken";

// ========================
// Result Types
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// The server answered, but not with 2xx
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Normalized response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply<T> {
    pub status: u16,
    /// HTTP 2xx and, when the body carries one, a true `ok` flag
    pub success: bool,
    pub data: Option<T>,
    /// The body's `error` field
    pub error: Option<String>,
}

pub type ApiResult<T> = Result<ApiReply<T>, ApiError>;

impl ApiReply<Value> {
    /// Build a reply from the raw status and body text
    pub fn from_parts(status: u16, body: &str) -> Self {
        let data: Option<Value> = serde_json::from_str(body).ok();
        let ok_flag = data.as_ref().and_then(|v| v.get("ok")).and_then(Value::as_bool);
        let error = data
            .as_ref()
            .and_then(|v| v.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let http_ok = (200..300).contains(&status);
        Self {
            status,
            success: http_ok && ok_flag.unwrap_or(error.is_none()),
            data,
            error,
        }
    }

    /// Decode the body into `T`. A missing body stays `None`.
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        let data = match self.data {
            Some(value) => Some(
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?,
            ),
            None => None,
        };
        Ok(ApiReply {
            status: self.status,
            success: self.success,
            data,
            error: self.error,
        })
    }
}

// ========================
// Endpoints
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Dashboard,
    StartTask(u32),
    CompleteTask(u32),
    IncompleteTask(u32),
    CancelTask(u32),
    DeleteFriend(u32),
    AcceptFriend(u32),
    DeclineFriend(u32),
    AddFriend,
    GlobalPrivacy,
    Followers,
    RemoveFollower(u32),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Dashboard => "/api/dashboard".to_string(),
            Endpoint::StartTask(id) => format!("/task/start/{}", id),
            Endpoint::CompleteTask(id) => format!("/task/complete/{}", id),
            Endpoint::IncompleteTask(id) => format!("/task/incomplete/{}", id),
            Endpoint::CancelTask(id) => format!("/task/cancel/{}", id),
            Endpoint::DeleteFriend(id) => format!("/friend/delete/{}", id),
            Endpoint::AcceptFriend(id) => format!("/friend/accept/{}", id),
            Endpoint::DeclineFriend(id) => format!("/friend/decline/{}", id),
            Endpoint::AddFriend => "/add-friend".to_string(),
            Endpoint::GlobalPrivacy => "/privacy/global".to_string(),
            Endpoint::Followers => "/followers".to_string(),
            Endpoint::RemoveFollower(id) => format!("/follower/remove/{}", id),
        }
    }

    pub fn is_mutating(&self) -> bool {
        !matches!(self, Endpoint::Dashboard | Endpoint::Followers)
    }
}

/// `application/x-www-form-urlencoded` body
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, NON_ALPHANUMERIC),
                utf8_percent_encode(value, NON_ALPHANUMERIC)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

// ========================
// Transport
// ========================

/// Outbound HTTP client. Cheap to clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token: csrf_token.filter(|t| !t.is_empty()),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn post(&self, endpoint: Endpoint) -> RequestBuilder {
        let builder = Request::post(&self.url(endpoint));
        match &self.csrf_token {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }

    pub async fn get(&self, endpoint: Endpoint) -> ApiResult<Value> {
        send(endpoint, Request::get(&self.url(endpoint)).build()).await
    }

    pub async fn post_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> ApiResult<Value> {
        send(endpoint, self.post(endpoint).json(body)).await
    }

    pub async fn post_form(&self, endpoint: Endpoint, fields: &[(&str, &str)]) -> ApiResult<Value> {
        let request = self
            .post(endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encode_form(fields));
        send(endpoint, request).await
    }

    pub async fn post_empty(&self, endpoint: Endpoint) -> ApiResult<Value> {
        send(endpoint, self.post(endpoint).build()).await
    }
}

async fn send(endpoint: Endpoint, request: Result<Request, gloo_net::Error>) -> ApiResult<Value> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let url = request.url();
    let response = request.send().await.map_err(|e| {
        log::warn!("[API] {} failed: {}", url, e);
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if endpoint.is_mutating() {
        log::info!("[API] POST {} -> {}", url, status);
    } else {
        log::debug!("[API] GET {} -> {}", url, status);
    }
    Ok(ApiReply::from_parts(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Dashboard.path(), "/api/dashboard");
        assert_eq!(Endpoint::StartTask(7).path(), "/task/start/7");
        assert_eq!(Endpoint::CancelTask(2).path(), "/task/cancel/2");
        assert_eq!(Endpoint::DeleteFriend(5).path(), "/friend/delete/5");
        assert_eq!(Endpoint::RemoveFollower(9).path(), "/follower/remove/9");
        assert!(Endpoint::AddFriend.is_mutating());
        assert!(!Endpoint::Followers.is_mutating());
    }

    #[test]
    fn test_client_url_trims_base() {
        let client = ApiClient::new("https://goals.test/", Some(String::new()));
        assert_eq!(client.url(Endpoint::GlobalPrivacy), "https://goals.test/privacy/global");
        assert_eq!(client.csrf_token, None);
    }

    #[test]
    fn test_reply_ok_flag() {
        let reply = ApiReply::from_parts(200, r#"{"ok":false}"#);
        assert!(!reply.success);

        let reply = ApiReply::from_parts(200, r#"{"ok":true,"xp":40}"#);
        assert!(reply.success);
        assert_eq!(reply.data.unwrap()["xp"], 40);
    }

    #[test]
    fn test_reply_error_field_without_ok() {
        let reply = ApiReply::from_parts(200, r#"{"error":"Unauthorized"}"#);
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_reply_http_status_and_empty_body() {
        assert!(ApiReply::from_parts(204, "").success);
        assert!(!ApiReply::from_parts(500, "").success);
        assert!(!ApiReply::from_parts(404, r#"{"ok":true}"#).success);
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let reply = ApiReply::from_parts(200, r#"{"ok":true}"#);
        let err = reply.decode::<Vec<u32>>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_encode_form() {
        assert_eq!(encode_form(&[("username", "ana maria")]), "username=ana%20maria");
        assert_eq!(encode_form(&[("username", "x&y=z")]), "username=x%26y%3Dz");
    }
}

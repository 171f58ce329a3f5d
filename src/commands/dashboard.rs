//! Dashboard Commands

use serde_json::Value;

use super::{ApiClient, ApiError, ApiReply, Endpoint};
use crate::models::DashboardResponse;

/// `GET /api/dashboard`. Anything but a decodable 2xx body is an error;
/// the store keeps its previous snapshot in that case.
pub async fn load_dashboard(client: &ApiClient) -> Result<DashboardResponse, ApiError> {
    dashboard_from_reply(client.get(Endpoint::Dashboard).await?)
}

fn dashboard_from_reply(reply: ApiReply<Value>) -> Result<DashboardResponse, ApiError> {
    if !(200..300).contains(&reply.status) {
        return Err(ApiError::Status(reply.status));
    }
    reply
        .decode::<DashboardResponse>()?
        .data
        .ok_or_else(|| ApiError::Decode("empty dashboard body".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_is_status_not_network() {
        let err = dashboard_from_reply(ApiReply::from_parts(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err, ApiError::Status(502));
        assert_eq!(err.to_string(), "server returned HTTP 502");
    }

    #[test]
    fn test_empty_and_malformed_bodies() {
        let err = dashboard_from_reply(ApiReply::from_parts(200, "")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let err = dashboard_from_reply(ApiReply::from_parts(200, r#"{"tasks":5}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decodes_dashboard() {
        let body = r#"{"user":{"username":"ana","xp":5},"tasks":[]}"#;
        let dashboard = dashboard_from_reply(ApiReply::from_parts(200, body)).unwrap();
        assert_eq!(dashboard.user.map(|u| u.username), Some("ana".to_string()));
    }
}

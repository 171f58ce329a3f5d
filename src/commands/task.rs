//! Task Commands
//!
//! Bindings for the task lifecycle endpoints.

use serde_json::Value;

use super::{ApiClient, ApiResult};
use crate::lifecycle::TaskRequest;

/// POST a confirmed lifecycle action with its JSON payload
pub async fn send_task_action(client: &ApiClient, request: &TaskRequest) -> ApiResult<Value> {
    client.post_json(request.endpoint(), &request.payload).await
}

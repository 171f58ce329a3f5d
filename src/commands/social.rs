//! Social Commands
//!
//! Bindings for friend, follower and privacy endpoints.

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ApiResult, Endpoint};
use crate::models::Follower;

#[derive(Serialize)]
struct PrivacyArgs {
    show_global: bool,
}

pub async fn delete_friend(client: &ApiClient, id: u32) -> ApiResult<Value> {
    client.post_empty(Endpoint::DeleteFriend(id)).await
}

pub async fn accept_friend(client: &ApiClient, id: u32) -> ApiResult<Value> {
    client.post_empty(Endpoint::AcceptFriend(id)).await
}

pub async fn decline_friend(client: &ApiClient, id: u32) -> ApiResult<Value> {
    client.post_empty(Endpoint::DeclineFriend(id)).await
}

/// Form-encoded friend request
pub async fn add_friend(client: &ApiClient, username: &str) -> ApiResult<Value> {
    client.post_form(Endpoint::AddFriend, &[("username", username)]).await
}

pub async fn set_global_privacy(client: &ApiClient, show_global: bool) -> ApiResult<Value> {
    client.post_json(Endpoint::GlobalPrivacy, &PrivacyArgs { show_global }).await
}

pub async fn list_followers(client: &ApiClient) -> ApiResult<Vec<Follower>> {
    client.get(Endpoint::Followers).await?.decode()
}

pub async fn remove_follower(client: &ApiClient, rel_id: u32) -> ApiResult<Value> {
    client.post_empty(Endpoint::RemoveFollower(rel_id)).await
}

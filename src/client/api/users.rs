//! Global user API trait

use async_trait::async_trait;

use crate::client::models::{GlobalUser, UserPayload};
use crate::client::pagination::{ListParams, ListResponse};
use crate::error::Result;

/// CRUD operations on `/users`
#[async_trait]
pub trait UserApi: Send + Sync {
    /// List one page of users
    async fn list_users(&self, params: &ListParams) -> Result<ListResponse<GlobalUser>>;

    /// Fetch a single user
    async fn get_user(&self, id: &str) -> Result<GlobalUser>;

    /// Create a user and return the stored record
    async fn create_user(&self, payload: &UserPayload) -> Result<GlobalUser>;

    /// Replace a user's attributes and return the stored record
    async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<GlobalUser>;

    /// Delete a user
    async fn delete_user(&self, id: &str) -> Result<()>;
}

//! Global organization API trait

use async_trait::async_trait;

use crate::client::models::{GlobalOrg, OrgPayload};
use crate::client::pagination::{ListParams, ListResponse};
use crate::error::Result;

/// CRUD operations on `/orgs`
#[async_trait]
pub trait OrgApi: Send + Sync {
    /// List one page of organizations
    async fn list_orgs(&self, params: &ListParams) -> Result<ListResponse<GlobalOrg>>;

    /// Fetch a single organization
    async fn get_org(&self, id: &str) -> Result<GlobalOrg>;

    /// Create an organization and return the stored record
    async fn create_org(&self, payload: &OrgPayload) -> Result<GlobalOrg>;

    /// Replace an organization's attributes and return the stored record
    async fn update_org(&self, id: &str, payload: &OrgPayload) -> Result<GlobalOrg>;

    /// Delete an organization
    async fn delete_org(&self, id: &str) -> Result<()>;
}

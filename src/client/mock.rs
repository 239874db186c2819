//! Mock OneAuth API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{OrgApi, UserApi};
use super::models::{GlobalOrg, GlobalUser, OrgPayload, UserPayload};
use super::pagination::{ListParams, ListResponse};
use crate::error::{RequestFailure, Result};

/// Mock API client for testing.
///
/// Configure stored records via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockOneAuthClient::new()
///     .with_users(vec![GlobalUser { id: "u-1".into(), ... }])
///     .await;
///
/// let page = mock.list_users(&ListParams::new()).await?;
/// assert_eq!(page.data.len(), 1);
/// ```
#[derive(Default)]
pub struct MockOneAuthClient {
    /// Stored users
    users: Arc<Mutex<Vec<GlobalUser>>>,
    /// Stored organizations
    orgs: Arc<Mutex<Vec<GlobalOrg>>>,
    /// Page size used to slice list responses
    page_size: Arc<Mutex<Option<usize>>>,
    /// Failure to return (if any) - consumed on first use
    failure: Arc<Mutex<Option<RequestFailure>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// List parameters received, in call order
    captured_params: Arc<Mutex<Vec<ListParams>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_users: usize,
    pub get_user: usize,
    pub create_user: usize,
    pub update_user: usize,
    pub delete_user: usize,
    pub list_orgs: usize,
    pub get_org: usize,
    pub create_org: usize,
    pub update_org: usize,
    pub delete_org: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_users
            + self.get_user
            + self.create_user
            + self.update_user
            + self.delete_user
            + self.list_orgs
            + self.get_org
            + self.create_org
            + self.update_org
            + self.delete_org
    }
}

impl MockOneAuthClient {
    /// Create a new mock client with no stored records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure users returned by the user endpoints.
    pub async fn with_users(self, users: Vec<GlobalUser>) -> Self {
        *self.users.lock().await = users;
        self
    }

    /// Configure organizations returned by the org endpoints.
    pub async fn with_orgs(self, orgs: Vec<GlobalOrg>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Slice list responses into pages of this size.
    pub async fn with_page_size(self, size: usize) -> Self {
        *self.page_size.lock().await = Some(size);
        self
    }

    /// Configure a failure to return on the next API call.
    /// The failure is consumed after one use.
    pub async fn with_failure(self, failure: RequestFailure) -> Self {
        *self.failure.lock().await = Some(failure);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured list parameters.
    pub async fn captured_params(&self) -> Vec<ListParams> {
        self.captured_params.lock().await.clone()
    }

    /// Current stored users.
    pub async fn users(&self) -> Vec<GlobalUser> {
        self.users.lock().await.clone()
    }

    /// Current stored organizations.
    pub async fn orgs(&self) -> Vec<GlobalOrg> {
        self.orgs.lock().await.clone()
    }

    async fn check_failure(&self) -> Result<()> {
        match self.failure.lock().await.take() {
            Some(failure) => Err(failure.into()),
            None => Ok(()),
        }
    }

    async fn page<T: Clone>(&self, all: &[T], params: &ListParams) -> ListResponse<T> {
        self.captured_params.lock().await.push(params.clone());

        let size = params
            .page_size
            .or(*self.page_size.lock().await)
            .unwrap_or(all.len().max(1));
        let pages = all.len().div_ceil(size);
        let data = all
            .iter()
            .skip(params.page.saturating_mul(size))
            .take(size)
            .cloned()
            .collect();

        ListResponse {
            data,
            pages,
            total: Some(all.len()),
            page: Some(params.page.saturating_add(1)),
        }
    }
}

fn not_found(kind: &str) -> RequestFailure {
    RequestFailure::new(Some(404), format!("{} not found", kind))
}

// ============================================================================
// UserApi Implementation
// ============================================================================

#[async_trait]
impl UserApi for MockOneAuthClient {
    async fn list_users(&self, params: &ListParams) -> Result<ListResponse<GlobalUser>> {
        self.call_count.lock().await.list_users += 1;
        self.check_failure().await?;

        let users = self.users.lock().await.clone();
        Ok(self.page(&users, params).await)
    }

    async fn get_user(&self, id: &str) -> Result<GlobalUser> {
        self.call_count.lock().await.get_user += 1;
        self.check_failure().await?;

        let users = self.users.lock().await;
        let user = users.iter().find(|u| u.id == id).cloned();
        user.ok_or_else(|| not_found("User").into())
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<GlobalUser> {
        self.call_count.lock().await.create_user += 1;
        self.check_failure().await?;

        let mut users = self.users.lock().await;
        let user = GlobalUser {
            id: format!("user-{}", users.len() + 1),
            name: Some(payload.name.clone()),
            email: Some(payload.email.clone()),
            hrms_user_id: payload.hrms_user_id.clone(),
            propeak_user_id: payload.propeak_user_id.clone(),
            skillzengine_user_id: payload.skillzengine_user_id.clone(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<GlobalUser> {
        self.call_count.lock().await.update_user += 1;
        self.check_failure().await?;

        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found("User"))?;
        user.name = Some(payload.name.clone());
        user.email = Some(payload.email.clone());
        user.hrms_user_id = payload.hrms_user_id.clone();
        user.propeak_user_id = payload.propeak_user_id.clone();
        user.skillzengine_user_id = payload.skillzengine_user_id.clone();
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.call_count.lock().await.delete_user += 1;
        self.check_failure().await?;

        let mut users = self.users.lock().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(not_found("User").into());
        }
        Ok(())
    }
}

// ============================================================================
// OrgApi Implementation
// ============================================================================

#[async_trait]
impl OrgApi for MockOneAuthClient {
    async fn list_orgs(&self, params: &ListParams) -> Result<ListResponse<GlobalOrg>> {
        self.call_count.lock().await.list_orgs += 1;
        self.check_failure().await?;

        let orgs = self.orgs.lock().await.clone();
        Ok(self.page(&orgs, params).await)
    }

    async fn get_org(&self, id: &str) -> Result<GlobalOrg> {
        self.call_count.lock().await.get_org += 1;
        self.check_failure().await?;

        let orgs = self.orgs.lock().await;
        let org = orgs.iter().find(|o| o.id == id).cloned();
        org.ok_or_else(|| not_found("Org").into())
    }

    async fn create_org(&self, payload: &OrgPayload) -> Result<GlobalOrg> {
        self.call_count.lock().await.create_org += 1;
        self.check_failure().await?;

        let mut orgs = self.orgs.lock().await;
        let org = GlobalOrg {
            id: format!("org-{}", orgs.len() + 1),
            name: Some(payload.name.clone()),
            hrms_org_id: payload.hrms_org_id.clone(),
            propeak_org_id: payload.propeak_org_id.clone(),
            skillzengine_org_id: payload.skillzengine_org_id.clone(),
        };
        orgs.push(org.clone());
        Ok(org)
    }

    async fn update_org(&self, id: &str, payload: &OrgPayload) -> Result<GlobalOrg> {
        self.call_count.lock().await.update_org += 1;
        self.check_failure().await?;

        let mut orgs = self.orgs.lock().await;
        let org = orgs
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found("Org"))?;
        org.name = Some(payload.name.clone());
        org.hrms_org_id = payload.hrms_org_id.clone();
        org.propeak_org_id = payload.propeak_org_id.clone();
        org.skillzengine_org_id = payload.skillzengine_org_id.clone();
        Ok(org.clone())
    }

    async fn delete_org(&self, id: &str) -> Result<()> {
        self.call_count.lock().await.delete_org += 1;
        self.check_failure().await?;

        let mut orgs = self.orgs.lock().await;
        let before = orgs.len();
        orgs.retain(|o| o.id != id);
        if orgs.len() == before {
            return Err(not_found("Org").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> GlobalUser {
        GlobalUser {
            id: id.to_string(),
            name: Some(format!("User {}", id)),
            email: Some(format!("{}@example.com", id)),
            hrms_user_id: None,
            propeak_user_id: None,
            skillzengine_user_id: None,
        }
    }

    #[tokio::test]
    async fn test_mock_pages_users() {
        let users = (1..=7).map(|i| user(&format!("u{}", i))).collect();
        let mock = MockOneAuthClient::new()
            .with_users(users)
            .await
            .with_page_size(3)
            .await;

        let page = mock.list_users(&ListParams { page: 2, ..Default::default() }).await.unwrap();
        assert_eq!(page.pages, 3);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "u7");
        assert_eq!(page.total, Some(7));
    }

    #[tokio::test]
    async fn test_mock_failure_consumed_once() {
        let mock = MockOneAuthClient::new()
            .with_failure(RequestFailure::new(Some(500), "boom"))
            .await;

        assert!(mock.list_orgs(&ListParams::new()).await.is_err());
        assert!(mock.list_orgs(&ListParams::new()).await.is_ok());
        assert_eq!(mock.call_counts().await.list_orgs, 2);
    }
}

//! OneAuth API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::models::{GlobalOrg, GlobalUser, OrgPayload, UserPayload};
use super::pagination::{ItemResponse, ListParams, ListResponse};
use super::request::RequestClient;
use super::{OrgApi, UserApi};
use crate::error::{ApiError, Result};

/// Default OneAuth API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

const USERS_PATH: &str = "users";
const ORGS_PATH: &str = "orgs";

/// OneAuth API client
pub struct OneAuthClient {
    requests: RequestClient,
    base_url: String,
}

impl OneAuthClient {
    /// Create a client for the given base URL (e.g. `http://host:3000/api`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            requests: RequestClient::new(timeout)?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn item_url(&self, path: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, path, urlencoding::encode(id))
    }

    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ListParams,
    ) -> Result<ListResponse<T>> {
        let url = Url::parse_with_params(&self.collection_url(path), params.to_query_params())
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let response: ListResponse<T> = self
            .requests
            .send_json(Method::GET, url.as_str(), None)
            .await?;
        debug!(
            "Fetched {} {} (page {} of {})",
            response.data.len(),
            path,
            params.page.saturating_add(1),
            response.pages
        );
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, id: &str) -> Result<T> {
        let response: ItemResponse<T> = self
            .requests
            .send_json(Method::GET, &self.item_url(path, id), None)
            .await?;
        Ok(response.into_item())
    }

    async fn write<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        payload: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(payload)?;
        let response: ItemResponse<T> = self.requests.send_json(method, url, Some(&body)).await?;
        if let Some(message) = response.message() {
            debug!("{}", message);
        }
        Ok(response.into_item())
    }

    async fn delete(&self, path: &str, id: &str) -> Result<()> {
        self.requests
            .send(Method::DELETE, &self.item_url(path, id), None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UserApi for OneAuthClient {
    async fn list_users(&self, params: &ListParams) -> Result<ListResponse<GlobalUser>> {
        self.list(USERS_PATH, params).await
    }

    async fn get_user(&self, id: &str) -> Result<GlobalUser> {
        self.get(USERS_PATH, id).await
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<GlobalUser> {
        self.write(Method::POST, &self.collection_url(USERS_PATH), payload)
            .await
    }

    async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<GlobalUser> {
        self.write(Method::PUT, &self.item_url(USERS_PATH, id), payload)
            .await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.delete(USERS_PATH, id).await
    }
}

#[async_trait]
impl OrgApi for OneAuthClient {
    async fn list_orgs(&self, params: &ListParams) -> Result<ListResponse<GlobalOrg>> {
        self.list(ORGS_PATH, params).await
    }

    async fn get_org(&self, id: &str) -> Result<GlobalOrg> {
        self.get(ORGS_PATH, id).await
    }

    async fn create_org(&self, payload: &OrgPayload) -> Result<GlobalOrg> {
        self.write(Method::POST, &self.collection_url(ORGS_PATH), payload)
            .await
    }

    async fn update_org(&self, id: &str, payload: &OrgPayload) -> Result<GlobalOrg> {
        self.write(Method::PUT, &self.item_url(ORGS_PATH, id), payload)
            .await
    }

    async fn delete_org(&self, id: &str) -> Result<()> {
        self.delete(ORGS_PATH, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::request::DEFAULT_TIMEOUT;
    use crate::error::Error;
    use mockito::Matcher;
    use serde_json::json;

    async fn setup() -> (mockito::ServerGuard, OneAuthClient) {
        let server = mockito::Server::new_async().await;
        let client = OneAuthClient::new(&format!("{}/api/", server.url()), DEFAULT_TIMEOUT).unwrap();
        (server, client)
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        assert!(OneAuthClient::new("not a url", DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OneAuthClient::new("http://localhost:3000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[tokio::test]
    async fn test_list_users_sends_one_based_page() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/api/users")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "3".into()),
                Matcher::UrlEncoded("sort".into(), "name:asc".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"data":[{"id":"u-1","name":"Jane"}],"total":21,"pages":3,"page":3}"#)
            .create_async()
            .await;

        let params = ListParams {
            page: 2,
            sort: Some("name:asc".to_string()),
            ..Default::default()
        };
        let response = client.list_users(&params).await.unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.pages, 3);
        assert_eq!(response.total_count(), 21);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_user_accepts_envelope() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/api/users/u-1")
            .with_status(200)
            .with_body(r#"{"user":{"id":"u-1","email":"jane@example.com"}}"#)
            .create_async()
            .await;

        let user = client.get_user("u-1").await.unwrap();
        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_get_org_not_found() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/api/orgs/o-9")
            .with_status(404)
            .with_body(r#"{"error":"Org not found"}"#)
            .create_async()
            .await;

        let err = client.get_org("o-9").await.unwrap_err();
        assert_eq!(err.to_string(), "Org not found");
        assert!(matches!(err, Error::Api(ApiError::Request(_))));
    }

    #[tokio::test]
    async fn test_create_org_posts_payload() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/api/orgs")
            .match_body(Matcher::Json(json!({ "name": "Acme", "hrms_org_id": "H-1" })))
            .with_status(201)
            .with_body(
                r#"{"success":true,"org":{"id":"o-1","name":"Acme","hrms_org_id":"H-1"},"message":"Org added successfully!"}"#,
            )
            .create_async()
            .await;

        let payload = OrgPayload {
            name: "Acme".to_string(),
            hrms_org_id: Some("H-1".to_string()),
            ..Default::default()
        };
        let org = client.create_org(&payload).await.unwrap();

        assert_eq!(org.id, "o-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_user_puts_to_item_url() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("PUT", "/api/users/u-1")
            .with_status(200)
            .with_body(r#"{"id":"u-1","name":"Janet","email":"janet@example.com"}"#)
            .create_async()
            .await;

        let payload = UserPayload {
            name: "Janet".to_string(),
            email: "janet@example.com".to_string(),
            ..Default::default()
        };
        let user = client.update_user("u-1", &payload).await.unwrap();

        assert_eq!(user.name.as_deref(), Some("Janet"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_user_accepts_no_content() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("DELETE", "/api/users/u-1")
            .with_status(204)
            .create_async()
            .await;

        client.delete_user("u-1").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_org_failure_message() {
        let (mut server, client) = setup().await;
        server
            .mock("DELETE", "/api/orgs/o-1")
            .with_status(500)
            .with_body(r#"{"message":"still has members"}"#)
            .create_async()
            .await;

        let err = client.delete_org("o-1").await.unwrap_err();
        assert_eq!(err.to_string(), "still has members");
    }
}

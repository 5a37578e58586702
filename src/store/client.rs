//! Typed REST client for the hosted record store.
//!
//! The store exposes table-like collections under `/rest/v1/<collection>`
//! and the session endpoint under `/auth/v1/user`. This client only ever
//! performs full unfiltered reads; all query semantics live on the server.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::store::records::{Company, Contact, Deal, Task, UserIdentity};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Strip the URL scheme for display purposes.
pub fn host_of(url: &str) -> &str {
    let url = url.trim_end_matches('/');
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

pub struct StoreClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Full unfiltered read of one collection.
    pub async fn select<T: DeserializeOwned>(
        &self,
        collection: &str,
        columns: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, collection);
        let response = self
            .http
            .get(&url)
            .query(&[("select", columns)])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status(),
                url,
            });
        }
        Ok(response.json().await?)
    }

    pub async fn contacts(&self) -> Result<Vec<Contact>, StoreError> {
        self.select("contacts", "*").await
    }

    pub async fn companies(&self) -> Result<Vec<Company>, StoreError> {
        self.select("companies", "*").await
    }

    pub async fn deals(&self) -> Result<Vec<Deal>, StoreError> {
        self.select("deals", "*").await
    }

    pub async fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.select("tasks", "*").await
    }

    /// Resolve the current authenticated user from the session endpoint.
    pub async fn current_user(&self) -> Result<UserIdentity, StoreError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status(),
                url,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(url: String) -> StoreConfig {
        StoreConfig {
            url,
            api_key: "test-key".into(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_select_decodes_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/deals"))
            .and(query_param("select", "*"))
            .and(header("apikey", "test-key"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "d1",
                    "name": "Acme renewal",
                    "value": 1200.0,
                    "stage": "negotiation",
                    "company_name": "Acme",
                    "created_at": "2024-03-01T10:00:00Z",
                }
            ])))
            .mount(&server)
            .await;

        let client = StoreClient::new(&test_config(server.uri())).unwrap();
        let deals = client.deals().await.unwrap();
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].name, "Acme renewal");
        assert_eq!(deals[0].value(), 1200.0);
    }

    #[tokio::test]
    async fn test_select_non_success_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/contacts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = StoreClient::new(&test_config(server.uri())).unwrap();
        let err = client.contacts().await.unwrap_err();
        assert!(matches!(err, StoreError::Status { status, .. } if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_current_user_decodes_identity() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "u1",
                "email": "rep@example.com",
            })))
            .mount(&server)
            .await;

        let client = StoreClient::new(&test_config(server.uri())).unwrap();
        let user = client.current_user().await.unwrap();
        assert_eq!(user.display(), "rep@example.com");
    }

    #[test]
    fn test_host_strips_scheme() {
        assert_eq!(host_of("https://db.example.com/"), "db.example.com");
        assert_eq!(host_of("http://localhost:54321"), "localhost:54321");
        assert_eq!(host_of("db.example.com"), "db.example.com");
    }
}

//! Shared HTTP request plumbing for the service clients

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ServiceError;

/// Thin wrapper over `reqwest` holding a base URL and a shared client.
///
/// Every method performs exactly one round trip. Non-2xx responses become
/// `ServiceError::Server` with the raw body text preserved.
#[derive(Clone)]
pub(crate) struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    /// POST where the response body is irrelevant
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ServiceError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// PUT where the response body is irrelevant
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ServiceError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ServiceError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// GET returning the checked raw response, for binary downloads
    pub async fn get_raw(&self, path: &str) -> Result<reqwest::Response, ServiceError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::check(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "backend request failed");
        Err(ServiceError::Server {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

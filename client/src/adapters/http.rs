//! HTTP implementation of the catalog backend port

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use urlencoding::encode;

use crate::domain::entities::{classify, CatalogRecord, ProductId, Review};
use crate::domain::ports::CatalogApi;
use crate::error::ApiError;

/// reqwest-backed catalog client
pub struct HttpCatalogApi {
    http: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch a feed endpoint and classify each record at this boundary,
    /// so nothing shape-untyped escapes the adapter.
    async fn fetch_records(&self, path: &str) -> Result<Vec<CatalogRecord>, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        let values: Vec<Value> = handle_response(response).await?;
        Ok(values.iter().map(classify).collect())
    }
}

fn search_path(query: &str) -> String {
    format!("/products/search?q={}", encode(query))
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

async fn handle_empty_response(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<CatalogRecord>, ApiError> {
        self.fetch_records("/products").await
    }

    async fn search_products(&self, query: &str) -> Result<Vec<CatalogRecord>, ApiError> {
        self.fetch_records(&search_path(query)).await
    }

    async fn get_product(&self, id: ProductId) -> Result<CatalogRecord, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        let value: Value = handle_response(response).await?;
        Ok(classify(&value))
    }

    async fn list_comments(&self, id: ProductId) -> Result<Vec<Review>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/products/{id}/comments")))
            .send()
            .await?;
        handle_response(response).await
    }

    async fn post_comment(&self, id: ProductId, payload: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/products/{id}/comments")))
            .header(CONTENT_TYPE, "text/plain")
            .body(payload.to_string())
            .send()
            .await?;
        handle_empty_response(response).await
    }
}

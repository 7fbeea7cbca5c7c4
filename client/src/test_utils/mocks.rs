//! In-memory implementation of the catalog port
//!
//! Configurable for testing: holds raw feed values (classified on the
//! way out, like the real adapter), records every search query and
//! posted payload, and can be switched into failure modes per endpoint.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{classify, CatalogRecord, ProductId, Review};
use crate::domain::ports::CatalogApi;
use crate::error::ApiError;
use crate::wire;

#[derive(Default)]
pub struct InMemoryCatalogApi {
    feed: RwLock<Vec<Value>>,
    search_results: RwLock<HashMap<String, Vec<Value>>>,
    comments: RwLock<HashMap<i64, Vec<Review>>>,
    posted: RwLock<Vec<(i64, String)>>,
    search_queries: RwLock<Vec<String>>,
    list_calls: RwLock<u32>,
    fail_listing: RwLock<bool>,
    fail_search: RwLock<bool>,
    fail_comments: RwLock<bool>,
    fail_post: RwLock<bool>,
}

impl InMemoryCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the full-catalog feed with raw records
    pub fn with_feed(self, records: Vec<Value>) -> Self {
        *self.feed.write().unwrap() = records;
        self
    }

    /// Map a query to its result records
    pub fn with_search_result(self, query: &str, records: Vec<Value>) -> Self {
        self.search_results
            .write()
            .unwrap()
            .insert(query.to_string(), records);
        self
    }

    /// Pre-populate the reviews of one product
    pub fn with_comments(self, product: i64, reviews: Vec<Review>) -> Self {
        self.comments.write().unwrap().insert(product, reviews);
        self
    }

    pub fn failing_listing(self) -> Self {
        *self.fail_listing.write().unwrap() = true;
        self
    }

    pub fn failing_search(self) -> Self {
        *self.fail_search.write().unwrap() = true;
        self
    }

    pub fn failing_comments(self) -> Self {
        *self.fail_comments.write().unwrap() = true;
        self
    }

    pub fn failing_post(self) -> Self {
        *self.fail_post.write().unwrap() = true;
        self
    }

    pub fn set_fail_search(&self, fail: bool) {
        *self.fail_search.write().unwrap() = fail;
    }

    pub fn set_fail_post(&self, fail: bool) {
        *self.fail_post.write().unwrap() = fail;
    }

    pub fn set_fail_comments(&self, fail: bool) {
        *self.fail_comments.write().unwrap() = fail;
    }

    /// Every query that reached the backend, in order
    pub fn search_queries(&self) -> Vec<String> {
        self.search_queries.read().unwrap().clone()
    }

    /// Every posted (product id, payload) pair, in order
    pub fn posted(&self) -> Vec<(i64, String)> {
        self.posted.read().unwrap().clone()
    }

    pub fn list_calls(&self) -> u32 {
        *self.list_calls.read().unwrap()
    }
}

fn injected_failure() -> ApiError {
    ApiError::Api {
        status: 500,
        message: "injected failure".to_string(),
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalogApi {
    async fn list_products(&self) -> Result<Vec<CatalogRecord>, ApiError> {
        *self.list_calls.write().unwrap() += 1;
        if *self.fail_listing.read().unwrap() {
            return Err(injected_failure());
        }
        Ok(self.feed.read().unwrap().iter().map(classify).collect())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<CatalogRecord>, ApiError> {
        self.search_queries.write().unwrap().push(query.to_string());
        if *self.fail_search.read().unwrap() {
            return Err(injected_failure());
        }
        Ok(self
            .search_results
            .read()
            .unwrap()
            .get(query)
            .map(|records| records.iter().map(classify).collect())
            .unwrap_or_default())
    }

    async fn get_product(&self, id: ProductId) -> Result<CatalogRecord, ApiError> {
        let feed = self.feed.read().unwrap();
        let found = feed.iter().map(classify).find(|r| r.id() == Some(id));
        // Not-found contract: the backend answers with a record lacking
        // a usable id, not with an error
        Ok(found.unwrap_or_else(|| classify(&Value::Null)))
    }

    async fn list_comments(&self, id: ProductId) -> Result<Vec<Review>, ApiError> {
        if *self.fail_comments.read().unwrap() {
            return Err(injected_failure());
        }
        Ok(self
            .comments
            .read()
            .unwrap()
            .get(&id.0)
            .cloned()
            .unwrap_or_default())
    }

    async fn post_comment(&self, id: ProductId, payload: &str) -> Result<(), ApiError> {
        self.posted.write().unwrap().push((id.0, payload.to_string()));
        if *self.fail_post.read().unwrap() {
            return Err(injected_failure());
        }

        // Mirror the backend: decode the payload and append the review
        let (submitter, text) = wire::decode(payload).map_err(|e| ApiError::Api {
            status: 400,
            message: e.to_string(),
        })?;
        let mut comments = self.comments.write().unwrap();
        let list = comments.entry(id.0).or_default();
        list.push(Review {
            id: Some(list.len() as i64 + 1),
            username: format!("user{submitter}"),
            comment: text.to_string(),
            created_at: None,
        });
        Ok(())
    }
}

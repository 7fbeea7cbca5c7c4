//! Port traits
//!
//! The backend contract the client depends on. The HTTP adapter is the
//! production implementation; tests use a configurable in-memory one.

use async_trait::async_trait;

use crate::domain::entities::{CatalogRecord, ProductId, Review};
use crate::error::ApiError;

/// The catalog backend as the client sees it
///
/// Feed records are classified before they cross this boundary, so
/// callers only ever see `CatalogRecord`, never raw feed shapes.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full catalog, in feed order
    async fn list_products(&self) -> Result<Vec<CatalogRecord>, ApiError>;

    /// Query the search index; an empty sequence is a valid success
    async fn search_products(&self, query: &str) -> Result<Vec<CatalogRecord>, ApiError>;

    /// Fetch a single record. Not-found is signalled by a record
    /// lacking a usable id, not by an error.
    async fn get_product(&self, id: ProductId) -> Result<CatalogRecord, ApiError>;

    /// Fetch the reviews for one item, in feed order
    async fn list_comments(&self, id: ProductId) -> Result<Vec<Review>, ApiError>;

    /// Post an encoded review payload (plain text body, see `wire`)
    async fn post_comment(&self, id: ProductId, payload: &str) -> Result<(), ApiError>;
}

//! Listing store
//!
//! Holds the full catalog, fetched once per store instance.

use std::sync::Arc;

use crate::domain::entities::CatalogRecord;
use crate::domain::ports::CatalogApi;
use crate::error::ApiError;

/// Lifecycle of the full-catalog fetch.
///
/// `Loaded` and `Failed` are terminal for the life of the store; a fresh
/// view builds a fresh store and re-runs the load.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    Loading,
    Loaded(Vec<CatalogRecord>),
    Failed,
}

pub struct ListingStore<C: CatalogApi> {
    api: Arc<C>,
    state: ListingState,
}

impl<C: CatalogApi> ListingStore<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self {
            api,
            state: ListingState::Loading,
        }
    }

    /// Request the full catalog once. Failure is surfaced to the caller
    /// and leaves the store terminally `Failed` - no retry, but the rest
    /// of the application keeps running. Calls after the first completed
    /// one are no-ops.
    pub async fn load_all(&mut self) -> Result<(), ApiError> {
        if self.state != ListingState::Loading {
            return Ok(());
        }

        match self.api.list_products().await {
            Ok(records) => {
                self.state = ListingState::Loaded(records);
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to load catalog: {e}");
                self.state = ListingState::Failed;
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// The held catalog; empty unless loaded.
    pub fn records(&self) -> &[CatalogRecord] {
        match &self.state {
            ListingState::Loaded(records) => records,
            _ => &[],
        }
    }
}

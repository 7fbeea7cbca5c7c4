//! Search controller
//!
//! Issues queries and decides which data set - the cached full listing
//! or the search results - is authoritative for display. Authority is a
//! single explicit state set atomically by `search()`/`clear()`, so a
//! stale result sequence can never outlive a cleared query.

use std::sync::Arc;

use crate::domain::entities::CatalogRecord;
use crate::domain::ports::CatalogApi;
use crate::error::ApiError;

/// Which held data set is currently shown
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayAuthority {
    /// Show the listing store's full catalog
    FullListing,
    /// Show the held result sequence; empty results are a valid active
    /// state ("no results"), distinct from no-query-issued
    SearchActive { results: Vec<CatalogRecord> },
}

pub struct SearchController<C: CatalogApi> {
    api: Arc<C>,
    query: String,
    authority: DisplayAuthority,
    /// Stamp of the most recently issued search; only the latest issue
    /// may commit its response (last-write-wins on the result slot).
    seq: u64,
}

impl<C: CatalogApi> SearchController<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self {
            api,
            query: String::new(),
            authority: DisplayAuthority::FullListing,
            seq: 0,
        }
    }

    /// Issue a query. A blank query clears instead - no request is made
    /// and authority reverts to the full listing. On failure the error
    /// is returned to the caller and the prior query and results are
    /// left untouched.
    pub async fn search(&mut self, query: &str) -> Result<(), ApiError> {
        if query.trim().is_empty() {
            self.clear();
            return Ok(());
        }

        self.seq += 1;
        let issued = self.seq;
        match self.api.search_products(query).await {
            Ok(results) => {
                if issued == self.seq {
                    self.query = query.to_string();
                    self.authority = DisplayAuthority::SearchActive { results };
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("search for {query:?} failed: {e}");
                Err(e)
            }
        }
    }

    /// Reset query and results; observably identical to a fresh
    /// controller with no query ever issued.
    pub fn clear(&mut self) {
        self.query.clear();
        self.authority = DisplayAuthority::FullListing;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(test)]
    pub fn authority(&self) -> &DisplayAuthority {
        &self.authority
    }

    pub fn is_active(&self) -> bool {
        matches!(self.authority, DisplayAuthority::SearchActive { .. })
    }

    /// Select the records to display given the full listing snapshot.
    pub fn display<'a>(&'a self, listing: &'a [CatalogRecord]) -> &'a [CatalogRecord] {
        match &self.authority {
            DisplayAuthority::FullListing => listing,
            DisplayAuthority::SearchActive { results } => results,
        }
    }
}

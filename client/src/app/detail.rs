//! Detail controller
//!
//! Owns the single selected item, its review sequence, and the review
//! submission lifecycle for the life of the detail view.

use std::sync::Arc;

use crate::domain::entities::{CatalogItem, CatalogRecord, ProductId, Review, ReviewSubmission};
use crate::domain::ports::CatalogApi;
use crate::error::AppError;
use crate::wire;

/// Lifecycle of the viewed item. Terminal once `Ready` or `NotFound`.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(CatalogItem),
    NotFound,
}

/// Review submission sub-state. Returns to `Idle` on both outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

pub struct DetailController<C: CatalogApi> {
    api: Arc<C>,
    product_id: ProductId,
    state: DetailState,
    reviews: Vec<Review>,
    submission: SubmissionState,
    draft: String,
}

impl<C: CatalogApi> DetailController<C> {
    pub fn new(api: Arc<C>, product_id: ProductId) -> Self {
        Self {
            api,
            product_id,
            state: DetailState::Loading,
            reviews: Vec::new(),
            submission: SubmissionState::Idle,
            draft: String::new(),
        }
    }

    /// Fetch the item and its reviews. The item fetch decides
    /// `Ready`/`NotFound`; the review fetch is a side channel whose
    /// failure degrades to an empty list without affecting readiness.
    pub async fn load(&mut self) {
        match self.api.get_product(self.product_id).await {
            // A record without a usable id signals not-found; a leaked
            // account row has no item semantics to display either.
            Ok(CatalogRecord::Item(item)) if item.id.is_some() => {
                self.state = DetailState::Ready(item);
            }
            Ok(_) => self.state = DetailState::NotFound,
            Err(e) => {
                tracing::error!("failed to load product {}: {e}", self.product_id);
                self.state = DetailState::NotFound;
            }
        }

        self.refresh_reviews().await;
    }

    /// Re-fetch the review list. Failures are logged and swallowed;
    /// whatever list is currently held stays.
    async fn refresh_reviews(&mut self) {
        match self.api.list_comments(self.product_id).await {
            Ok(reviews) => self.reviews = reviews,
            Err(e) => {
                tracing::warn!("failed to load reviews for {}: {e}", self.product_id);
            }
        }
    }

    /// Submit the current draft as a review.
    ///
    /// Rejected locally - no request sent - when the draft is blank or
    /// contains the wire delimiter. On success the draft is cleared and
    /// the review list re-fetched; on failure the draft is preserved so
    /// the user can retry.
    pub async fn submit_review(&mut self, submitter: i64) -> Result<(), AppError> {
        let submission = ReviewSubmission::new(submitter, self.draft.clone());
        if submission.is_blank() {
            return Err(AppError::Validation("review text is empty".to_string()));
        }
        let payload = wire::encode(&submission)?;

        self.submission = SubmissionState::Submitting;
        let result = self.api.post_comment(self.product_id, &payload).await;
        self.submission = SubmissionState::Idle;

        match result {
            Ok(()) => {
                self.draft.clear();
                self.refresh_reviews().await;
                Ok(())
            }
            Err(e) => Err(AppError::Api(e)),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[cfg(test)]
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }
}

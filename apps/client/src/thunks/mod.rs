//! One thunk per remote operation. Each thunk performs exactly one
//! network call, dispatching `Pending` to its owning slice first and
//! settling with `Fulfilled` or a `Rejected` carrying a fixed
//! human-readable message; transport and auth failures never escape a
//! thunk as errors.
//!
//! Mutation success is reported as an explicit [`ListsInvalidated`]
//! message rather than a flag observed from the view layer; a single
//! [`ReloadCoordinator`] consumes those messages and issues both list
//! refetches, so bursts of mutations can neither miss nor duplicate a
//! refresh.

pub mod claim_resume_review;
pub mod get_available_resume_reviews;
pub mod get_reviewing_resume_reviews;
pub mod initiate_resume_review;
pub mod unclaim_resume_review;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::auth::TokenAcquirer;
use crate::store::Store;

pub use claim_resume_review::{claim_resume_review, ClaimResumeReviewParams};
pub use get_available_resume_reviews::get_available_resume_reviews;
pub use get_reviewing_resume_reviews::{
    get_reviewing_resume_reviews, GetReviewingResumeReviewsParams,
};
pub use initiate_resume_review::{initiate_resume_review, InitiateResumeReviewParams};
pub use unclaim_resume_review::{unclaim_resume_review, UnclaimResumeReviewParams};

/// Emitted on every successful mutation: both cached lists are stale and
/// must be refetched before next display.
#[derive(Debug)]
pub struct ListsInvalidated;

/// Everything a thunk needs: the injected store, the API client, the
/// token acquirer, and the invalidation channel.
#[derive(Clone)]
pub struct ThunkContext {
    pub store: Arc<Store>,
    pub api: ApiClient,
    pub tokens: Arc<dyn TokenAcquirer>,
    invalidations: mpsc::UnboundedSender<ListsInvalidated>,
}

impl ThunkContext {
    /// Builds a context and the coordinator that will consume its
    /// invalidation messages.
    pub fn new(
        store: Arc<Store>,
        api: ApiClient,
        tokens: Arc<dyn TokenAcquirer>,
    ) -> (Self, ReloadCoordinator) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                store,
                api,
                tokens,
                invalidations: tx,
            },
            ReloadCoordinator { invalidations: rx },
        )
    }

    pub(crate) fn emit_lists_invalidated(&self) {
        // The coordinator may already be gone during teardown.
        let _ = self.invalidations.send(ListsInvalidated);
    }
}

/// Sole consumer of [`ListsInvalidated`]. Runs until every sender is
/// dropped.
pub struct ReloadCoordinator {
    pub(crate) invalidations: mpsc::UnboundedReceiver<ListsInvalidated>,
}

impl ReloadCoordinator {
    pub async fn run(mut self, ctx: ThunkContext, user_id: String) {
        while self.invalidations.recv().await.is_some() {
            // Coalesce a burst of mutations into one refresh.
            while self.invalidations.try_recv().is_ok() {}

            tokio::join!(
                get_available_resume_reviews(&ctx),
                get_reviewing_resume_reviews(
                    &ctx,
                    GetReviewingResumeReviewsParams {
                        user_id: user_id.clone(),
                    },
                ),
            );
        }
    }
}

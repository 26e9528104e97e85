use serde_json::json;
use tracing::warn;

use crate::api::endpoints;
use crate::auth::Scope;
use crate::store::{Action, ResumeReviewAction, ThunkEvent};
use crate::thunks::ThunkContext;

#[derive(Debug, Clone)]
pub struct ClaimResumeReviewParams {
    pub user_id: String,
    pub resume_review_id: String,
}

/// Assigns the review to `user_id`. On success both cached lists are
/// invalidated for the coordinator to refetch.
pub async fn claim_resume_review(ctx: &ThunkContext, params: ClaimResumeReviewParams) {
    ctx.store.dispatch(Action::ResumeReview(ResumeReviewAction::Claim(
        ThunkEvent::Pending,
    )));

    let result = ctx
        .api
        .send_with_token(
            endpoints::claim_resume_review(&params.resume_review_id),
            ctx.tokens.as_ref(),
            &[Scope::UpdateAllResumeReviews],
            Some(json!({ "reviewer": params.user_id })),
        )
        .await;

    match result {
        Ok(()) => {
            ctx.store.dispatch(Action::ResumeReview(ResumeReviewAction::Claim(
                ThunkEvent::Fulfilled(()),
            )));
            ctx.emit_lists_invalidated();
        }
        Err(e) => {
            warn!("claim_resume_review failed: {e}");
            ctx.store.dispatch(Action::ResumeReview(ResumeReviewAction::Claim(
                ThunkEvent::Rejected("Unable to claim resume review".to_string()),
            )));
        }
    }
}

use tracing::warn;

use crate::api::endpoints;
use crate::auth::Scope;
use crate::store::{Action, ResumeReviewAction, ThunkEvent};
use crate::thunks::ThunkContext;

#[derive(Debug, Clone)]
pub struct UnclaimResumeReviewParams {
    pub resume_review_id: String,
}

/// Returns the review to the available pool. On success both cached
/// lists are invalidated for the coordinator to refetch.
pub async fn unclaim_resume_review(ctx: &ThunkContext, params: UnclaimResumeReviewParams) {
    ctx.store.dispatch(Action::ResumeReview(ResumeReviewAction::Unclaim(
        ThunkEvent::Pending,
    )));

    let result = ctx
        .api
        .send_with_token(
            endpoints::unclaim_resume_review(&params.resume_review_id),
            ctx.tokens.as_ref(),
            &[Scope::UpdateAllResumeReviews],
            None,
        )
        .await;

    match result {
        Ok(()) => {
            ctx.store.dispatch(Action::ResumeReview(ResumeReviewAction::Unclaim(
                ThunkEvent::Fulfilled(()),
            )));
            ctx.emit_lists_invalidated();
        }
        Err(e) => {
            warn!("unclaim_resume_review failed: {e}");
            ctx.store.dispatch(Action::ResumeReview(ResumeReviewAction::Unclaim(
                ThunkEvent::Rejected("Unable to unclaim resume review".to_string()),
            )));
        }
    }
}

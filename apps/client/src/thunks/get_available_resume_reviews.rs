use tracing::warn;

use crate::api::{endpoints, FetchError};
use crate::auth::Scope;
use crate::models::WrappedResumeReviews;
use crate::store::{Action, ResumeReviewAction, ThunkEvent};
use crate::thunks::ThunkContext;

/// Fetches the reviews still seeking a reviewer and settles the resume
/// review slice.
pub async fn get_available_resume_reviews(ctx: &ThunkContext) {
    ctx.store.dispatch(Action::ResumeReview(
        ResumeReviewAction::GetAvailable(ThunkEvent::Pending),
    ));

    let event = match fetch(ctx).await {
        Ok(payload) => ThunkEvent::Fulfilled(payload),
        Err(e) => {
            warn!("get_available_resume_reviews failed: {e}");
            ThunkEvent::Rejected("Unable to fetch available resume reviews".to_string())
        }
    };

    ctx.store
        .dispatch(Action::ResumeReview(ResumeReviewAction::GetAvailable(event)));
}

async fn fetch(ctx: &ThunkContext) -> Result<WrappedResumeReviews, FetchError> {
    ctx.api
        .fetch_with_token(
            endpoints::get_resume_reviews(),
            ctx.tokens.as_ref(),
            &[Scope::ReadAllResumeReviews],
            &[("state", "seeking_reviewer".to_string())],
        )
        .await
}

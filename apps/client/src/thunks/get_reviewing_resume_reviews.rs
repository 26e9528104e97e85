use tracing::warn;

use crate::api::{endpoints, FetchError};
use crate::auth::Scope;
use crate::models::WrappedResumeReviews;
use crate::store::{Action, ResumeReviewAction, ThunkEvent};
use crate::thunks::ThunkContext;

#[derive(Debug, Clone)]
pub struct GetReviewingResumeReviewsParams {
    pub user_id: String,
}

/// Fetches the reviews currently assigned to `user_id` and settles the
/// resume review slice.
pub async fn get_reviewing_resume_reviews(
    ctx: &ThunkContext,
    params: GetReviewingResumeReviewsParams,
) {
    ctx.store.dispatch(Action::ResumeReview(
        ResumeReviewAction::GetReviewing(ThunkEvent::Pending),
    ));

    let event = match fetch(ctx, &params).await {
        Ok(payload) => ThunkEvent::Fulfilled(payload),
        Err(e) => {
            warn!("get_reviewing_resume_reviews failed: {e}");
            ThunkEvent::Rejected("Unable to fetch reviewing resume reviews".to_string())
        }
    };

    ctx.store
        .dispatch(Action::ResumeReview(ResumeReviewAction::GetReviewing(event)));
}

async fn fetch(
    ctx: &ThunkContext,
    params: &GetReviewingResumeReviewsParams,
) -> Result<WrappedResumeReviews, FetchError> {
    // The reviewer filter is percent-encoded before it enters the query
    // string, matching what the server expects for provider-prefixed
    // user ids like `auth0|...`.
    let reviewer = urlencoding::encode(&params.user_id).into_owned();

    ctx.api
        .fetch_with_token(
            endpoints::get_resume_reviews(),
            ctx.tokens.as_ref(),
            &[Scope::ReadAllResumeReviews],
            &[
                ("state", "reviewing".to_string()),
                ("reviewer", reviewer),
            ],
        )
        .await
}

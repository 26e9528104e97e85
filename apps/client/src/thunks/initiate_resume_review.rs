use serde_json::json;
use tracing::warn;

use crate::api::endpoints;
use crate::auth::Scope;
use crate::store::{Action, ThunkEvent, UploadAction};
use crate::thunks::ThunkContext;

#[derive(Debug, Clone)]
pub struct InitiateResumeReviewParams {
    pub user_id: String,
    pub base64_contents: String,
}

/// Submits the selected resume and creates a review seeking a reviewer.
/// Drives the upload-flow slice; on success both cached lists are
/// invalidated.
pub async fn initiate_resume_review(ctx: &ThunkContext, params: InitiateResumeReviewParams) {
    ctx.store
        .dispatch(Action::Upload(UploadAction::Submit(ThunkEvent::Pending)));

    let result = ctx
        .api
        .send_with_token(
            endpoints::initiate_resume_review(),
            ctx.tokens.as_ref(),
            &[Scope::CreateResumeReviews],
            Some(json!({
                "userId": params.user_id,
                "base64Contents": params.base64_contents,
            })),
        )
        .await;

    match result {
        Ok(()) => {
            ctx.store.dispatch(Action::Upload(UploadAction::Submit(
                ThunkEvent::Fulfilled(()),
            )));
            ctx.emit_lists_invalidated();
        }
        Err(e) => {
            warn!("initiate_resume_review failed: {e}");
            ctx.store.dispatch(Action::Upload(UploadAction::Submit(
                ThunkEvent::Rejected("Unable to upload resume".to_string()),
            )));
        }
    }
}

//! The volunteer's resume review page: render models for both lists and
//! the claim/unclaim/refresh user actions.

use crate::models::ResumeReviewWithName;
use crate::store::{Action, ResumeReviewAction, ResumeReviewState};
use crate::thunks::{
    claim_resume_review, unclaim_resume_review, ClaimResumeReviewParams, ThunkContext,
    UnclaimResumeReviewParams,
};
use crate::views::Notifier;

/// A volunteer may not review more than this many resumes concurrently.
/// Client-side only; the server remains authoritative.
pub const MAX_CONCURRENT_REVIEWS: usize = 3;

const QUOTA_ALERT: &str =
    "You can't claim more than 3 resumes at once. Start reviewing some of them.";
const EMPTY_REVIEWING_TEXT: &str =
    "You haven't claimed any resumes to review yet. Claim one of the available resumes below to get started.";
const EMPTY_AVAILABLE_TEXT: &str =
    "There are no available resumes to review. Check back later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty(&'static str),
    Rows(Vec<ResumeReviewWithName>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeReviewPage {
    pub reviewing: ListView,
    pub available: ListView,
    pub refresh_enabled: bool,
}

/// Pure function of slice state.
pub fn render(state: &ResumeReviewState) -> ResumeReviewPage {
    ResumeReviewPage {
        reviewing: render_list(
            state.reviewing_is_loading,
            &state.reviewing_resumes,
            EMPTY_REVIEWING_TEXT,
        ),
        available: render_list(
            state.available_is_loading,
            &state.available_resumes,
            EMPTY_AVAILABLE_TEXT,
        ),
        refresh_enabled: !state.available_is_loading && !state.reviewing_is_loading,
    }
}

fn render_list(
    is_loading: bool,
    rows: &[ResumeReviewWithName],
    empty_text: &'static str,
) -> ListView {
    if is_loading {
        ListView::Loading
    } else if rows.is_empty() {
        ListView::Empty(empty_text)
    } else {
        ListView::Rows(rows.to_vec())
    }
}

/// Claim a review, unless that would push the volunteer past the
/// concurrent-review quota; the violation alerts and dispatches nothing.
pub async fn claim(
    ctx: &ThunkContext,
    notifier: &dyn Notifier,
    user_id: &str,
    resume_review_id: &str,
) {
    let reviewing_count = ctx.store.resume_review().reviewing_resumes.len();
    if reviewing_count + 1 > MAX_CONCURRENT_REVIEWS {
        notifier.alert(QUOTA_ALERT);
        return;
    }

    claim_resume_review(
        ctx,
        ClaimResumeReviewParams {
            user_id: user_id.to_string(),
            resume_review_id: resume_review_id.to_string(),
        },
    )
    .await;
}

pub async fn unclaim(ctx: &ThunkContext, resume_review_id: &str) {
    unclaim_resume_review(
        ctx,
        UnclaimResumeReviewParams {
            resume_review_id: resume_review_id.to_string(),
        },
    )
    .await;
}

/// Manual refresh: mark the lists stale and ask the coordinator for a
/// refetch of both.
pub fn refresh(ctx: &ThunkContext) {
    ctx.store
        .dispatch(Action::ResumeReview(ResumeReviewAction::Refresh));
    ctx.emit_lists_invalidated();
}

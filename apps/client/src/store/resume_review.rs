//! The resume review slice: both volunteer-facing lists plus their
//! loading and staleness flags.

use crate::models::{ResumeReviewWithName, WrappedResumeReviews};
use crate::store::ThunkEvent;

/// Actions owned by this slice. One variant per thunk, plus the manual
/// refresh requested from the volunteer page.
#[derive(Debug, Clone)]
pub enum ResumeReviewAction {
    GetAvailable(ThunkEvent<WrappedResumeReviews>),
    GetReviewing(ThunkEvent<WrappedResumeReviews>),
    Claim(ThunkEvent<()>),
    Unclaim(ThunkEvent<()>),
    Refresh,
}

#[derive(Debug, Clone, Default)]
pub struct ResumeReviewState {
    pub available_resumes: Vec<ResumeReviewWithName>,
    pub reviewing_resumes: Vec<ResumeReviewWithName>,
    pub available_is_loading: bool,
    pub reviewing_is_loading: bool,
    /// Set by any successful mutation (and by a manual refresh); cleared
    /// as each list is refetched.
    pub should_reload: bool,
    pub last_error: Option<String>,
}

/// Pure state transition, matched exhaustively per lifecycle event.
///
/// A fulfilled fetch replaces the list wholesale; stale entries are
/// discarded, never merged. A loading flag is true strictly between a
/// fetch thunk's dispatch and its settlement, so rejection clears it too.
pub fn reduce(state: &mut ResumeReviewState, action: ResumeReviewAction) {
    match action {
        ResumeReviewAction::GetAvailable(event) => match event {
            ThunkEvent::Pending => state.available_is_loading = true,
            ThunkEvent::Fulfilled(payload) => {
                state.available_is_loading = false;
                state.should_reload = false;
                state.available_resumes = payload.resume_reviews;
            }
            ThunkEvent::Rejected(message) => {
                state.available_is_loading = false;
                state.last_error = Some(message);
            }
        },
        ResumeReviewAction::GetReviewing(event) => match event {
            ThunkEvent::Pending => state.reviewing_is_loading = true,
            ThunkEvent::Fulfilled(payload) => {
                state.reviewing_is_loading = false;
                state.should_reload = false;
                state.reviewing_resumes = payload.resume_reviews;
            }
            ThunkEvent::Rejected(message) => {
                state.reviewing_is_loading = false;
                state.last_error = Some(message);
            }
        },
        ResumeReviewAction::Claim(event) => match event {
            ThunkEvent::Pending => {}
            ThunkEvent::Fulfilled(()) => state.should_reload = true,
            ThunkEvent::Rejected(message) => state.last_error = Some(message),
        },
        ResumeReviewAction::Unclaim(event) => match event {
            ThunkEvent::Pending => {}
            ThunkEvent::Fulfilled(()) => state.should_reload = true,
            ThunkEvent::Rejected(message) => state.last_error = Some(message),
        },
        ResumeReviewAction::Refresh => state.should_reload = true,
    }
}

//! The client-side state container.
//!
//! The store is explicitly constructed and injected wherever it is
//! needed; there is no global instance. Each slice owns a disjoint
//! partition of state and a pure reducer keyed by a closed action enum,
//! so every lifecycle event is matched exhaustively. Slice writes are
//! serialized through an internal mutex: each reducer runs to completion
//! before the next dispatched action is processed.

pub mod resume_review;
pub mod upload;

use std::sync::Mutex;

pub use resume_review::{ResumeReviewAction, ResumeReviewState};
pub use upload::{UploadAction, UploadState};

/// Lifecycle of one asynchronous thunk invocation, consumed exclusively
/// by the owning slice's reducer.
#[derive(Debug, Clone)]
pub enum ThunkEvent<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

/// Top-level action routed to exactly one slice reducer.
#[derive(Debug, Clone)]
pub enum Action {
    ResumeReview(ResumeReviewAction),
    Upload(UploadAction),
}

#[derive(Debug, Clone, Default)]
struct Slices {
    resume_review: ResumeReviewState,
    upload: UploadState,
}

#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<Slices>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes `action` to its owning slice reducer.
    pub fn dispatch(&self, action: Action) {
        let mut slices = self.lock();
        match action {
            Action::ResumeReview(action) => {
                resume_review::reduce(&mut slices.resume_review, action)
            }
            Action::Upload(action) => upload::reduce(&mut slices.upload, action),
        }
    }

    /// Snapshot of the resume review slice.
    pub fn resume_review(&self) -> ResumeReviewState {
        self.lock().resume_review.clone()
    }

    /// Snapshot of the upload-flow slice.
    pub fn upload(&self) -> UploadState {
        self.lock().upload.clone()
    }

    /// Returns every slice to its initial state. Intended for tests and
    /// for tearing down a signed-out session.
    pub fn reset(&self) {
        *self.lock() = Slices::default();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slices> {
        self.inner.lock().expect("store lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResumeDocument;

    #[test]
    fn test_reset_returns_all_slices_to_initial_state() {
        let store = Store::new();
        store.dispatch(Action::ResumeReview(ResumeReviewAction::Refresh));
        store.dispatch(Action::Upload(UploadAction::DocumentSelected(
            ResumeDocument {
                name: "resume.pdf".to_string(),
                base64_contents: "aGk=".to_string(),
            },
        )));
        assert!(store.resume_review().should_reload);
        assert!(store.upload().document.is_some());

        store.reset();
        assert!(!store.resume_review().should_reload);
        assert!(store.upload().document.is_none());
    }

    #[test]
    fn test_dispatch_routes_to_the_owning_slice_only() {
        let store = Store::new();
        store.dispatch(Action::Upload(UploadAction::Submit(ThunkEvent::Pending)));
        assert!(store.upload().is_uploading);
        // The resume review slice is untouched.
        assert!(!store.resume_review().available_is_loading);
        assert!(!store.resume_review().reviewing_is_loading);
    }
}

//! The upload-flow slice: the selected document between file selection
//! and successful submission, plus the submit lifecycle flags.

use crate::models::ResumeDocument;
use crate::store::ThunkEvent;

#[derive(Debug, Clone)]
pub enum UploadAction {
    /// A file passed client-side validation and was encoded.
    DocumentSelected(ResumeDocument),
    /// Lifecycle of the initiate-review thunk.
    Submit(ThunkEvent<()>),
    /// Dispatched when the owning view unmounts, or on cancel.
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct UploadState {
    pub document: Option<ResumeDocument>,
    pub is_uploading: bool,
    pub is_complete: bool,
    pub last_error: Option<String>,
}

pub fn reduce(state: &mut UploadState, action: UploadAction) {
    match action {
        UploadAction::DocumentSelected(document) => state.document = Some(document),
        UploadAction::Submit(event) => match event {
            ThunkEvent::Pending => state.is_uploading = true,
            ThunkEvent::Fulfilled(()) => {
                state.is_uploading = false;
                state.is_complete = true;
            }
            ThunkEvent::Rejected(message) => {
                state.is_uploading = false;
                state.last_error = Some(message);
            }
        },
        UploadAction::Reset => *state = UploadState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ResumeDocument {
        ResumeDocument {
            name: "resume.pdf".to_string(),
            base64_contents: "JVBERi0=".to_string(),
        }
    }

    #[test]
    fn test_selecting_a_document_enters_preview() {
        let mut state = UploadState::default();
        reduce(&mut state, UploadAction::DocumentSelected(document()));
        assert_eq!(state.document.as_ref().unwrap().name, "resume.pdf");
        assert!(!state.is_uploading);
        assert!(!state.is_complete);
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut state = UploadState {
            document: Some(document()),
            ..Default::default()
        };

        reduce(&mut state, UploadAction::Submit(ThunkEvent::Pending));
        assert!(state.is_uploading);

        reduce(&mut state, UploadAction::Submit(ThunkEvent::Fulfilled(())));
        assert!(!state.is_uploading);
        assert!(state.is_complete);
    }

    #[test]
    fn test_rejected_submit_keeps_the_document_for_retry() {
        let mut state = UploadState {
            document: Some(document()),
            is_uploading: true,
            ..Default::default()
        };

        reduce(
            &mut state,
            UploadAction::Submit(ThunkEvent::Rejected("Unable to upload resume".to_string())),
        );

        assert!(!state.is_uploading);
        assert!(!state.is_complete);
        assert!(state.document.is_some());
        assert_eq!(state.last_error.as_deref(), Some("Unable to upload resume"));
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut state = UploadState {
            document: Some(document()),
            is_complete: true,
            last_error: Some("old".to_string()),
            ..Default::default()
        };

        reduce(&mut state, UploadAction::Reset);

        assert!(state.document.is_none());
        assert!(!state.is_complete);
        assert!(state.last_error.is_none());
    }
}

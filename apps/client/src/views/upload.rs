//! The student's upload flow: client-side file validation, the preview
//! step, and submission. Invalid input is rejected before any state
//! mutation or network call.

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::ResumeDocument;
use crate::store::{Action, Store, UploadAction, UploadState};
use crate::thunks::{initiate_resume_review, InitiateResumeReviewParams, ThunkContext};
use crate::views::Notifier;

/// A file handed over by the embedding shell's file picker.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Client-side input rejection. Display strings double as the alert
/// texts shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("You can only select 1 file")]
    MultipleFilesSelected,

    #[error("File selected must be pdf")]
    NotAPdf,

    #[error("File is too large")]
    FileTooLarge,
}

/// The step the upload view is on, as a pure function of slice state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadView {
    Picker,
    Preview { file_name: String },
    Uploading,
    Complete,
}

pub fn render(state: &UploadState) -> UploadView {
    if state.is_uploading {
        UploadView::Uploading
    } else if state.is_complete {
        UploadView::Complete
    } else if let Some(document) = &state.document {
        UploadView::Preview {
            file_name: document.name.clone(),
        }
    } else {
        UploadView::Picker
    }
}

/// Validates a file selection and, if it passes, encodes it and enters
/// the preview step. Violations alert and leave the store untouched.
pub fn handle_files_selected(
    store: &Store,
    config: &ClientConfig,
    notifier: &dyn Notifier,
    files: &[SelectedFile],
) {
    match validate(files, config.max_resume_size_bytes) {
        Ok(file) => {
            let document = ResumeDocument {
                name: file.name.clone(),
                base64_contents: general_purpose::STANDARD.encode(&file.bytes),
            };
            store.dispatch(Action::Upload(UploadAction::DocumentSelected(document)));
        }
        Err(e) => notifier.alert(&e.to_string()),
    }
}

fn validate(files: &[SelectedFile], max_size_bytes: u64) -> Result<&SelectedFile, ValidationError> {
    let file = match files {
        [] => return Err(ValidationError::NoFileSelected),
        [file] => file,
        _ => return Err(ValidationError::MultipleFilesSelected),
    };

    if file.mime_type != "application/pdf" {
        return Err(ValidationError::NotAPdf);
    }
    if file.bytes.len() as u64 >= max_size_bytes {
        return Err(ValidationError::FileTooLarge);
    }

    Ok(file)
}

/// Submits the previewed document. No-op if nothing is selected.
pub async fn confirm(ctx: &ThunkContext, user_id: &str) {
    let Some(document) = ctx.store.upload().document else {
        return;
    };

    initiate_resume_review(
        ctx,
        InitiateResumeReviewParams {
            user_id: user_id.to_string(),
            base64_contents: document.base64_contents,
        },
    )
    .await;
}

/// Unmount hook: the upload flow is discarded whenever the owning view
/// goes away, including cancel.
pub fn reset(store: &Store) {
    store.dispatch(Action::Upload(UploadAction::Reset));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::RecordingNotifier;

    const MAX_SIZE: u64 = 1024;

    fn config() -> ClientConfig {
        ClientConfig::new("http://localhost:8080/api/v1", MAX_SIZE)
    }

    fn pdf(name: &str, len: usize) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            mime_type: "application/pdf".to_string(),
            bytes: vec![b'x'; len],
        }
    }

    #[test]
    fn test_two_files_alert_and_do_not_enter_preview() {
        let store = Store::new();
        let notifier = RecordingNotifier::default();

        handle_files_selected(
            &store,
            &config(),
            &notifier,
            &[pdf("a.pdf", 10), pdf("b.pdf", 10)],
        );

        assert_eq!(notifier.alerts(), vec!["You can only select 1 file".to_string()]);
        assert!(store.upload().document.is_none());
    }

    #[test]
    fn test_empty_selection_alerts() {
        let store = Store::new();
        let notifier = RecordingNotifier::default();

        handle_files_selected(&store, &config(), &notifier, &[]);

        assert_eq!(notifier.alerts(), vec!["No file selected".to_string()]);
        assert!(store.upload().document.is_none());
    }

    #[test]
    fn test_non_pdf_alerts() {
        let store = Store::new();
        let notifier = RecordingNotifier::default();
        let file = SelectedFile {
            name: "resume.docx".to_string(),
            mime_type: "application/msword".to_string(),
            bytes: vec![0; 10],
        };

        handle_files_selected(&store, &config(), &notifier, &[file]);

        assert_eq!(notifier.alerts(), vec!["File selected must be pdf".to_string()]);
        assert!(store.upload().document.is_none());
    }

    #[test]
    fn test_oversized_pdf_alerts() {
        let store = Store::new();
        let notifier = RecordingNotifier::default();

        // Size at the limit is already too large.
        handle_files_selected(&store, &config(), &notifier, &[pdf("big.pdf", MAX_SIZE as usize)]);

        assert_eq!(notifier.alerts(), vec!["File is too large".to_string()]);
        assert!(store.upload().document.is_none());
    }

    #[test]
    fn test_single_valid_pdf_enters_preview_with_name_and_contents() {
        let store = Store::new();
        let notifier = RecordingNotifier::default();
        let file = SelectedFile {
            name: "resume.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            bytes: b"%PDF-1.4".to_vec(),
        };

        handle_files_selected(&store, &config(), &notifier, &[file]);

        assert!(notifier.alerts().is_empty());
        let document = store.upload().document.unwrap();
        assert_eq!(document.name, "resume.pdf");
        assert_eq!(document.base64_contents, "JVBERi0xLjQ=");
        assert_eq!(
            render(&store.upload()),
            UploadView::Preview {
                file_name: "resume.pdf".to_string()
            }
        );
    }

    #[test]
    fn test_render_follows_the_submit_lifecycle() {
        let mut state = UploadState::default();
        assert_eq!(render(&state), UploadView::Picker);

        state.document = Some(ResumeDocument {
            name: "resume.pdf".to_string(),
            base64_contents: "JVBERi0=".to_string(),
        });
        assert!(matches!(render(&state), UploadView::Preview { .. }));

        state.is_uploading = true;
        assert_eq!(render(&state), UploadView::Uploading);

        state.is_uploading = false;
        state.is_complete = true;
        assert_eq!(render(&state), UploadView::Complete);
    }
}

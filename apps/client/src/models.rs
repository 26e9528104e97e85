//! Wire models for the remote resume review API. Field names follow the
//! server's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Server-driven lifecycle of a resume review. The client never mutates
/// this directly; it reflects server-reported state and issues transition
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    SeekingReviewer,
    Reviewing,
    Finished,
    Cancelled,
}

/// A resume review joined with the reviewee's display name, as returned
/// by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReviewWithName {
    pub id: String,
    pub reviewee_id: String,
    pub reviewee_name: String,
    pub state: ReviewState,
    #[serde(default)]
    pub reviewer_id: Option<String>,
    pub document_id: String,
}

/// Envelope for the list endpoints. The server may omit the field
/// entirely; that decodes as the empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedResumeReviews {
    #[serde(default)]
    pub resume_reviews: Vec<ResumeReviewWithName>,
}

/// A selected resume held transiently between file selection and
/// successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub name: String,
    pub base64_contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_state_uses_snake_case_wire_values() {
        let state: ReviewState = serde_json::from_str("\"seeking_reviewer\"").unwrap();
        assert_eq!(state, ReviewState::SeekingReviewer);
        assert_eq!(
            serde_json::to_string(&ReviewState::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn test_wrapped_reviews_defaults_to_empty_list() {
        let wrapped: WrappedResumeReviews = serde_json::from_str("{}").unwrap();
        assert!(wrapped.resume_reviews.is_empty());
    }

    #[test]
    fn test_resume_review_decodes_camel_case() {
        let json = serde_json::json!({
            "id": "rr-1",
            "revieweeId": "auth0|student",
            "revieweeName": "Ada Lovelace",
            "state": "reviewing",
            "reviewerId": "auth0|volunteer",
            "documentId": "doc-1"
        });
        let review: ResumeReviewWithName = serde_json::from_value(json).unwrap();
        assert_eq!(review.state, ReviewState::Reviewing);
        assert_eq!(review.reviewer_id.as_deref(), Some("auth0|volunteer"));
    }

    #[test]
    fn test_reviewer_id_may_be_absent() {
        let json = serde_json::json!({
            "id": "rr-1",
            "revieweeId": "auth0|student",
            "revieweeName": "Ada Lovelace",
            "state": "seeking_reviewer",
            "documentId": "doc-1"
        });
        let review: ResumeReviewWithName = serde_json::from_value(json).unwrap();
        assert!(review.reviewer_id.is_none());
    }
}

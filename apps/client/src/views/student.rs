//! The student's resume review card: per-state gating of its actions.

use crate::models::ReviewState;

pub const VIEW_ACTION: &str = "View";
pub const CANCEL_ACTION: &str = "Cancel review";

/// Which affordances the card renders for a review in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardActions {
    /// View/continue the review. Hidden once the review is finished.
    pub show_view: bool,
    /// Cancel the review. Shown only while still seeking a reviewer.
    pub show_cancel: bool,
    /// Expand the finished review's feedback.
    pub show_expand: bool,
}

pub fn card_actions(state: ReviewState) -> CardActions {
    CardActions {
        show_view: state != ReviewState::Finished,
        show_cancel: state == ReviewState::SeekingReviewer,
        show_expand: state == ReviewState::Finished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [ReviewState; 4] = [
        ReviewState::SeekingReviewer,
        ReviewState::Reviewing,
        ReviewState::Finished,
        ReviewState::Cancelled,
    ];

    #[test]
    fn test_view_action_hidden_only_when_finished() {
        for state in ALL_STATES {
            let actions = card_actions(state);
            assert_eq!(
                actions.show_view,
                state != ReviewState::Finished,
                "view gating wrong for {state:?}"
            );
        }
    }

    #[test]
    fn test_cancel_action_shown_only_while_seeking_reviewer() {
        for state in ALL_STATES {
            let actions = card_actions(state);
            assert_eq!(
                actions.show_cancel,
                state == ReviewState::SeekingReviewer,
                "cancel gating wrong for {state:?}"
            );
        }
    }

    #[test]
    fn test_expand_shown_only_when_finished() {
        for state in ALL_STATES {
            let actions = card_actions(state);
            assert_eq!(
                actions.show_expand,
                state == ReviewState::Finished,
                "expand gating wrong for {state:?}"
            );
        }
    }
}

//! Headless view layer: pure render models computed from slice state,
//! plus the user-action entry points that dispatch thunks. The business
//! rules enforced client-side (claim quota, state-gated actions, upload
//! validation) live here and only here; none of them are authoritative.

pub mod student;
pub mod upload;
pub mod volunteer;

/// Blocking user notification capability. The embedding shell injects
/// whatever it renders alerts with.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Notifier that only logs. Useful for non-interactive embeddings.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!("user alert: {message}");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Notifier;
    use std::sync::Mutex;

    /// Records every alert for assertion.
    #[derive(Default)]
    pub struct RecordingNotifier {
        alerts: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn alerts(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }
}

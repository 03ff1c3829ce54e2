// Testing utilities and mock implementations for the domain layer
// This module is only available in tests or with the "mock" feature

use std::sync::{Arc, Mutex};

// Re-export useful test mocks from the data layer
pub use vital_guard_data::repository::tests::MockPatientRepository;

use crate::services::alert::SendAlertServiceTrait;

/// Alert service double that records every delivered message.
/// Clones share the same underlying buffer, so a clone handed to a
/// service can be inspected afterwards through the original.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlertService {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingAlertService {
    /// Create a new recording alert service
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Messages delivered so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl SendAlertServiceTrait for RecordingAlertService {
    fn send(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

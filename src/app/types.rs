use std::time::{Duration, Instant};

/// Events raised by field callbacks, drained once per frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    IconAction { placeholder: String },
    TextChanged { index: usize, length: usize },
}

/// Short-lived message shown in the footer
#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}

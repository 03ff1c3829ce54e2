use tracing::warn;

/// Trait for alert delivery
pub trait SendAlertServiceTrait {
    /// Deliver an alert message. Fire-and-forget: delivery success or
    /// failure is the implementation's concern.
    fn send(&self, message: &str);
}

/// Alert service that emits messages through the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAlertService;

impl LoggingAlertService {
    /// Create a new logging alert service
    pub fn new() -> Self {
        Self
    }
}

impl SendAlertServiceTrait for LoggingAlertService {
    fn send(&self, message: &str) {
        warn!("{}", message);
    }
}

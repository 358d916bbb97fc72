use std::sync::{Arc, Mutex};

use habitpet::port::outbound::alert::Alerter;

/// Thread-safe alert collector for page assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingAlerter {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingAlerter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("lock alerts").clone()
    }

    pub fn last(&self) -> Option<String> {
        self.alerts.lock().expect("lock alerts").last().cloned()
    }
}

impl Alerter for RecordingAlerter {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("lock alerts")
            .push(message.to_string());
    }
}

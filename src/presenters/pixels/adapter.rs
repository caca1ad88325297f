use std::sync::Mutex;

use crate::controllers::interactive::ports::status_display::StatusDisplayPort;
use crate::controllers::interactive::status::StatusText;

/// Holds the most recent status pushed by the controller until the UI frame
/// picks it up.
pub struct StatusAdapter {
    latest: Mutex<Option<StatusText>>,
}

impl StatusDisplayPort for StatusAdapter {
    fn show(&self, status: &StatusText) {
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some(status.clone());
        }
    }
}

impl StatusAdapter {
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(None),
        }
    }

    pub fn take(&self) -> Option<StatusText> {
        self.latest.lock().ok().and_then(|mut latest| latest.take())
    }
}

impl Default for StatusAdapter {
    fn default() -> Self {
        Self::new()
    }
}

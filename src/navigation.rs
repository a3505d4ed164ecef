use std::sync::{Arc, Mutex};

/// Where a successful redirect sends the user. Fire-and-forget: a failure to
/// open the URL never rolls back the click that was already counted.
pub trait Navigator: Send {
    fn open_external(&self, url: &str);
}

/// Logs the hand-off and does nothing else. Suits headless embedders.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn open_external(&self, url: &str) {
        tracing::info!("Opening {}", url);
    }
}

/// Remembers every URL it was asked to open.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_owned());
    }
}

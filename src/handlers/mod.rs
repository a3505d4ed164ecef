//! Form-level entry points for the UI: each takes the app, runs one
//! operation, and returns what to show.

pub mod dashboard;
pub mod shorten;
pub mod visit;

use crate::{error::LinkError, models::LinkRecord, telemetry::Level, App};
use chrono::{DateTime, Utc};

pub use dashboard::dashboard;
pub use shorten::{shorten, ShortenForm};
pub use visit::visit;

/// One-shot message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn is_success(&self) -> bool {
        matches!(self, Flash::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Flash::Success(msg) | Flash::Error(msg) => msg,
        }
    }
}

/// Result of a handler: the flash to show and, on success, the link it
/// produced or touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub flash: Flash,
    pub link: Option<LinkRow>,
}

impl Outcome {
    fn failed(err: LinkError) -> Self {
        Self {
            flash: Flash::Error(err.to_string()),
            link: None,
        }
    }
}

/// A link as the list view shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
    pub owner: String,
    /// Expired rows get a disabled "Visit" button.
    pub expired: bool,
}

impl LinkRow {
    fn from_record(app: &App, link: &LinkRecord, now: DateTime<Utc>) -> Self {
        Self {
            code: link.code.clone(),
            short_url: app.short_url(&link.code),
            original_url: link.original_url.clone(),
            expiry: link.expiry,
            clicks: link.clicks,
            owner: link.owner.clone(),
            expired: link.is_expired(now),
        }
    }
}

fn level_for(err: LinkError) -> Level {
    match err {
        LinkError::Unauthenticated => Level::Error,
        _ => Level::Warn,
    }
}

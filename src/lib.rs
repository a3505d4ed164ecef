//! Local URL shortener core: validate and shorten links, keep them in a
//! persistence slot, count visits, and forward log events to a collector.

pub mod auth;
pub mod clock;
pub mod codegen;
pub mod config;
pub mod error;
pub mod handlers;
pub mod manager;
pub mod models;
pub mod navigation;
pub mod slot;
pub mod store;
pub mod telemetry;
pub mod validate;

use auth::IdentityProvider;
use config::AppConfig;
use manager::LinkManager;
use navigation::Navigator;
use slot::FileSlot;
use store::LinkStore;
use telemetry::{Level, TelemetryReporter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{LinkError, StoreError};
pub use models::{CreateLinkInput, LinkRecord};

// ── Shared application state ───────────────────────────────────────────────

/// Everything the presentation layer talks to.
pub struct App {
    pub config: AppConfig,
    pub links: LinkManager,
    /// `None` disables remote logging entirely.
    pub telemetry: Option<TelemetryReporter>,
}

impl App {
    pub fn new(config: AppConfig, links: LinkManager, telemetry: Option<TelemetryReporter>) -> Self {
        Self {
            config,
            links,
            telemetry,
        }
    }

    /// Wire up a file-backed store and the configured collector.
    pub fn from_config(
        config: AppConfig,
        identity: impl IdentityProvider + 'static,
        navigator: impl Navigator + 'static,
    ) -> anyhow::Result<Self> {
        tracing::info!("Link data directory: {}", config.data_dir.display());
        let store = LinkStore::open(FileSlot::new(&config.data_dir));
        let links = LinkManager::new(store, identity, navigator);

        let telemetry =
            TelemetryReporter::new(&config.telemetry_url, &config.client_id, &config.page_url)?;
        tracing::info!("Telemetry collector: {}", telemetry.endpoint());

        Ok(Self::new(config, links, Some(telemetry)))
    }

    /// Public short URL for `code`, e.g. "https://go.example.com/s/abc123".
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/s/{}", self.config.base_url, code)
    }

    /// Send a telemetry event on the side. Skipped when telemetry is off;
    /// the reporter itself copes with a missing Tokio runtime.
    pub fn report(&self, level: Level, package: &str, message: &str) {
        if let Some(reporter) = &self.telemetry {
            // Dropping the handle detaches the task.
            drop(reporter.report("frontend", level, package, message));
        }
    }
}

// ── Logging ────────────────────────────────────────────────────────────────

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Calling it twice is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linklet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

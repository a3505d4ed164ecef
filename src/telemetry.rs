use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::{runtime::Handle, task::JoinHandle};

/// Collector used when `TELEMETRY_URL` is not set.
pub const DEFAULT_COLLECTOR_URL: &str = "http://20.244.56.144/evaluation-service/logs";

// ── Types ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

/// Body of one POST to the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub timestamp: String,
    pub stack: String,
    pub level: Level,
    pub package: String,
    pub message: String,
    pub user_agent: String,
    pub url: String,
}

/// What happened to a report. Only ever logged; callers may ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Delivered { status: u16 },
    Rejected { status: u16 },
    Failed { reason: String },
}

impl ReportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ReportOutcome::Delivered { .. })
    }
}

// ── Reporter ───────────────────────────────────────────────────────────────

/// Ships log events to a remote collector without ever blocking or failing
/// the user action that produced them.
#[derive(Clone, Debug)]
pub struct TelemetryReporter {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
    page_url: String,
}

impl TelemetryReporter {
    /// `user_agent` and `page_url` are attached to every event as ambient
    /// client context. No request timeout is configured.
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: impl Into<String>,
        page_url: impl Into<String>,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            page_url: page_url.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Stamp an event with the current time and the ambient context.
    pub fn event(&self, stack: &str, level: Level, package: &str, message: &str) -> LogEvent {
        LogEvent {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            stack: stack.to_owned(),
            level,
            package: package.to_owned(),
            message: message.to_owned(),
            user_agent: self.user_agent.clone(),
            url: self.page_url.clone(),
        }
    }

    /// Fire-and-forget. Spawns the POST on the current Tokio runtime and
    /// returns at once; the handle can be dropped. Outside a runtime the
    /// event is logged locally and `None` comes back.
    pub fn report(
        &self,
        stack: &str,
        level: Level,
        package: &str,
        message: &str,
    ) -> Option<JoinHandle<ReportOutcome>> {
        let event = self.event(stack, level, package, message);
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("Failed to send log: no async runtime: {:?}", event);
            return None;
        };
        let reporter = self.clone();
        Some(runtime.spawn(async move { reporter.send(event).await }))
    }

    /// POST `event` as JSON and classify the result. Never retries.
    pub async fn send(&self, event: LogEvent) -> ReportOutcome {
        let outcome = match self.client.post(&self.endpoint).json(&event).send().await {
            Ok(resp) if resp.status().is_success() => ReportOutcome::Delivered {
                status: resp.status().as_u16(),
            },
            Ok(resp) => ReportOutcome::Rejected {
                status: resp.status().as_u16(),
            },
            Err(e) => ReportOutcome::Failed {
                reason: e.to_string(),
            },
        };

        match &outcome {
            ReportOutcome::Delivered { .. } => {
                tracing::debug!("telemetry delivered: [{}] {}", event.level, event.message);
            }
            ReportOutcome::Rejected { status } => {
                tracing::warn!("Failed to send log: collector answered {}: {:?}", status, event);
            }
            ReportOutcome::Failed { reason } => {
                tracing::warn!("Failed to send log: {}: {:?}", reason, event);
            }
        }

        outcome
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owner recorded when the identity provider has no username to offer.
pub const ANONYMOUS_OWNER: &str = "anonymous";

/// One shortened link as held by the store and written to the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub id: Uuid,
    pub original_url: String,
    pub code: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
    #[serde(rename = "user")]
    pub owner: String,
}

impl LinkRecord {
    /// A link stays redirectable up to and including its expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry
    }
}

/// Input to `LinkManager::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLinkInput {
    pub original_url: String,
    pub custom_code: Option<String>,
    pub validity_days: i64,
}

impl CreateLinkInput {
    pub fn new(original_url: impl Into<String>, validity_days: i64) -> Self {
        Self {
            original_url: original_url.into(),
            custom_code: None,
            validity_days,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }
}

/// Timestamps go to the slot as `2024-05-01T12:00:00.000Z`, the format
/// browsers produce for `toISOString`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

use crate::{error::StoreError, models::LinkRecord, slot::KeyValueSlot};

/// Slot key the whole collection lives under.
pub const LINKS_KEY: &str = "shortLinks";

/// Ordered, in-memory set of links mirrored to a persistence slot.
///
/// The in-memory vector is the source of truth. It is hydrated from the slot
/// once in `open` and the full collection is written back after every
/// mutation, so each write replaces the previous one completely.
pub struct LinkStore {
    slot: Box<dyn KeyValueSlot>,
    links: Vec<LinkRecord>,
}

impl LinkStore {
    /// Hydrate from `slot`. Missing or unreadable content starts empty.
    pub fn open(slot: impl KeyValueSlot + 'static) -> Self {
        let mut store = Self {
            slot: Box::new(slot),
            links: Vec::new(),
        };
        store.links = store.load();
        tracing::info!("Link store loaded with {} link(s)", store.links.len());
        store
    }

    /// Read and decode the persisted collection.
    pub fn load(&self) -> Vec<LinkRecord> {
        let raw = match self.slot.get(LINKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read '{}' slot, starting empty: {}", LINKS_KEY, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!("Ignoring malformed '{}' slot content: {}", LINKS_KEY, e);
                Vec::new()
            }
        }
    }

    /// Serialize `records` and replace the slot content with them.
    pub fn save(&self, records: &[LinkRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.slot.set(LINKS_KEY, &json)
    }

    /// Current snapshot, newest first.
    pub fn all(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn find(&self, code: &str) -> Option<&LinkRecord> {
        self.links.iter().find(|l| l.code == code)
    }

    /// Expired links count too: a code is never handed out twice.
    pub fn contains_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Insert a new link at the front and persist.
    pub fn prepend(&mut self, record: LinkRecord) {
        self.links.insert(0, record);
        self.persist();
    }

    /// Bump the click counter of `code` and persist. Returns the updated
    /// record, or `None` if the code is unknown.
    pub fn record_click(&mut self, code: &str) -> Option<LinkRecord> {
        let link = self.links.iter_mut().find(|l| l.code == code)?;
        link.clicks = link.clicks.saturating_add(1);
        let updated = link.clone();
        self.persist();
        Some(updated)
    }

    fn persist(&self) {
        if let Err(e) = self.save(&self.links) {
            tracing::error!("Failed to persist {} link(s): {}", self.links.len(), e);
        }
    }
}

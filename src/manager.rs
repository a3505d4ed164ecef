use crate::{
    auth::{Identity, IdentityProvider},
    clock::{Clock, SystemClock},
    codegen::{CodeGenerator, RandomCodes},
    error::LinkError,
    models::{CreateLinkInput, LinkRecord, ANONYMOUS_OWNER},
    navigation::Navigator,
    store::LinkStore,
    validate,
};
use chrono::{Days, SubsecRound};
use uuid::Uuid;

/// Owns the link store and enforces the create/redirect rules.
///
/// Each operation validates everything first and only then touches the
/// store, so a rejected call leaves no trace.
pub struct LinkManager {
    store: LinkStore,
    identity: Box<dyn IdentityProvider>,
    navigator: Box<dyn Navigator>,
    clock: Box<dyn Clock>,
    codes: Box<dyn CodeGenerator>,
}

impl LinkManager {
    pub fn new(
        store: LinkStore,
        identity: impl IdentityProvider + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self::with_clock(store, identity, navigator, SystemClock)
    }

    pub fn with_clock(
        store: LinkStore,
        identity: impl IdentityProvider + 'static,
        navigator: impl Navigator + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            store,
            identity: Box::new(identity),
            navigator: Box::new(navigator),
            clock: Box::new(clock),
            codes: Box::new(RandomCodes),
        }
    }

    /// Swap the source of generated codes.
    pub fn with_code_generator(mut self, codes: impl CodeGenerator + 'static) -> Self {
        self.codes = Box::new(codes);
        self
    }

    /// Shorten a URL.
    ///
    /// Expiry is computed in UTC: each validity day adds exactly 24 hours.
    ///
    /// A generated code that happens to collide is reported as
    /// `CodeConflict`, same as a taken custom code; there is no retry.
    pub fn create(&mut self, input: CreateLinkInput) -> Result<LinkRecord, LinkError> {
        let identity = self.identity.current();
        if !identity.is_authenticated {
            return Err(LinkError::Unauthenticated);
        }
        if !validate::is_valid_url(&input.original_url) {
            return Err(LinkError::InvalidUrl);
        }
        if !validate::is_valid_window(input.validity_days) {
            return Err(LinkError::InvalidWindow);
        }

        let code = match validate::normalize_custom_code(input.custom_code.as_deref()) {
            Some(custom) => custom.to_owned(),
            None => self.codes.generate(),
        };

        if self.store.contains_code(&code) {
            tracing::debug!("Rejecting duplicate short code '{}'", code);
            return Err(LinkError::CodeConflict);
        }

        // Millisecond precision is all the slot keeps.
        let created_at = self.clock.now().trunc_subsecs(3);
        // The window check above bounds the cast and keeps this addition in range.
        let expiry = created_at
            .checked_add_days(Days::new(input.validity_days as u64))
            .ok_or(LinkError::InvalidWindow)?;

        let link = LinkRecord {
            id: Uuid::new_v4(),
            original_url: input.original_url,
            code,
            created_at,
            expiry,
            clicks: 0,
            owner: identity
                .username()
                .unwrap_or(ANONYMOUS_OWNER)
                .to_owned(),
        };

        self.store.prepend(link.clone());
        tracing::info!(
            "Created short code '{}' for {} (owner {}, expires {})",
            link.code,
            link.original_url,
            link.owner,
            link.expiry
        );
        Ok(link)
    }

    /// Count a click on `code` and hand its URL to the navigator.
    pub fn redirect(&mut self, code: &str) -> Result<LinkRecord, LinkError> {
        let link = self.store.find(code).ok_or(LinkError::NotFound)?;
        if link.is_expired(self.clock.now()) {
            return Err(LinkError::Expired);
        }

        let updated = self.store.record_click(code).ok_or(LinkError::NotFound)?;
        self.navigator.open_external(&updated.original_url);
        Ok(updated)
    }

    /// Every link, newest first.
    pub fn records(&self) -> &[LinkRecord] {
        self.store.all()
    }

    pub fn find(&self, code: &str) -> Option<&LinkRecord> {
        self.store.find(code)
    }

    pub fn identity(&self) -> Identity {
        self.identity.current()
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }
}

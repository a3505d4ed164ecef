use std::sync::{Arc, Mutex};

// ── Identity ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
}

/// Snapshot of who is using the shortener right now. The auth layer that
/// produces it lives outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(User {
                username: username.into(),
            }),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Read-only view of the external auth state. Never mutated by the manager.
pub trait IdentityProvider: Send {
    fn current(&self) -> Identity;
}

// ── SharedIdentity ─────────────────────────────────────────────────────────

/// Identity provider backed by a shared cell. Clones observe each other's
/// `login`/`logout`, so the embedding UI can keep one handle and give the
/// manager another.
#[derive(Clone, Debug, Default)]
pub struct SharedIdentity {
    inner: Arc<Mutex<Identity>>,
}

impl SharedIdentity {
    pub fn new(identity: Identity) -> Self {
        Self {
            inner: Arc::new(Mutex::new(identity)),
        }
    }

    pub fn login(&self, username: impl Into<String>) {
        let username = username.into();
        tracing::info!("User '{}' signed in", username);
        *self.lock() = Identity::user(username);
    }

    pub fn logout(&self) {
        *self.lock() = Identity::anonymous();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Identity> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IdentityProvider for SharedIdentity {
    fn current(&self) -> Identity {
        self.lock().clone()
    }
}

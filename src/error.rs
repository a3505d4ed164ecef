use thiserror::Error;

/// Everything `create` and `redirect` can reject. The `Display` text is what
/// the UI shows the user, so keep it short and readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("You must be logged in to shorten URLs.")]
    Unauthenticated,

    #[error("Please enter a valid URL.")]
    InvalidUrl,

    #[error("Validity must be between 1 and 365 days.")]
    InvalidWindow,

    #[error("Shortcode already exists. Please choose another.")]
    CodeConflict,

    #[error("Shortlink not found.")]
    NotFound,

    #[error("This shortlink has expired.")]
    Expired,
}

/// Failures writing the persistence slot. These are logged, never surfaced.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize links: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("slot write rejected: {0}")]
    Rejected(String),
}

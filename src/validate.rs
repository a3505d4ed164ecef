//! Form-level checks. Everything here is pure and never panics.

use url::Url;

pub const MIN_VALIDITY_DAYS: i64 = 1;
pub const MAX_VALIDITY_DAYS: i64 = 365;

/// Longest custom short code the form field lets the user type.
pub const MAX_CUSTOM_CODE_LEN: usize = 12;

/// `true` iff `candidate` is an absolute URL with a scheme and a host.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// `true` iff `days` is within `[MIN_VALIDITY_DAYS, MAX_VALIDITY_DAYS]`.
pub fn is_valid_window(days: i64) -> bool {
    (MIN_VALIDITY_DAYS..=MAX_VALIDITY_DAYS).contains(&days)
}

/// Trim a user-supplied code; blank input means "generate one for me".
pub fn normalize_custom_code(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

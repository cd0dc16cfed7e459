//! Input validation helpers for booking requests.

use std::sync::LazyLock;

use regex::Regex;

/// Basic `local@domain.tld` shape. Deliberately loose: the address is only
/// used for confirmation mail, not identity.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Check that an email address has a plausible `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

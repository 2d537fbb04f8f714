//! Newsletter subscription — the one marketing-site concern the backend keeps.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
}

impl Subscription {
    /// Validate and wrap an email address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] when the address is not
    /// plausibly `local@domain.tld`.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self { email })
    }
}

/// Check that an address looks like `local@domain.tld`. Not a full RFC 5322
/// parse; the same pragmatic shape the signup form enforces.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] when the check fails.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (name, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if name.is_empty() || tld.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

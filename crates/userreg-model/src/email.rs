//! Email address syntax checks.
//!
//! Accepts the common `local@domain` form: the local part is a run of RFC 5322
//! `atext` characters separated by single dots; the domain is a list of
//! hostname labels ending in an alphabetic top-level label. Quoted local
//! parts and address literals are rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::constraint::compile;

/// Maximum length of the part before the `@`.
pub const MAX_LOCAL_LENGTH: usize = 64;

/// Maximum length of the whole address.
pub const MAX_ADDRESS_LENGTH: usize = 254;

static LOCAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
});

static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$")
});

/// Reason an address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("an email address must have an @-sign")]
    MissingAt,

    #[error("there must be something before the @-sign")]
    EmptyLocalPart,

    #[error("there must be something after the @-sign")]
    EmptyDomain,

    #[error("the email address is too long ({0} characters, max {MAX_ADDRESS_LENGTH})")]
    TooLong(usize),

    #[error("the part before the @-sign is too long ({0} characters, max {MAX_LOCAL_LENGTH})")]
    LocalPartTooLong(usize),

    #[error("the part before the @-sign contains invalid characters or dots")]
    InvalidLocalPart,

    #[error("the part after the @-sign is not a valid domain name")]
    InvalidDomain,
}

/// Check `value` against email address syntax.
pub fn check_email(value: &str) -> Result<(), EmailError> {
    let length = value.chars().count();
    if length > MAX_ADDRESS_LENGTH {
        return Err(EmailError::TooLong(length));
    }

    let (local, domain) = value.rsplit_once('@').ok_or(EmailError::MissingAt)?;
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }
    if domain.is_empty() {
        return Err(EmailError::EmptyDomain);
    }

    let local_length = local.chars().count();
    if local_length > MAX_LOCAL_LENGTH {
        return Err(EmailError::LocalPartTooLong(local_length));
    }
    if !LOCAL_REGEX.is_match(local) {
        return Err(EmailError::InvalidLocalPart);
    }
    if !DOMAIN_REGEX.is_match(domain) {
        return Err(EmailError::InvalidDomain);
    }

    Ok(())
}

/// Lowercase the domain part, leaving the local part untouched.
///
/// Values without an `@` are returned unchanged.
pub fn normalize_email(value: &str) -> String {
    match value.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => value.to_string(),
    }
}

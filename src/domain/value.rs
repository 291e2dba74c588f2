use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ValidationError;

fn non_empty_trimmed(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn path_segment(field: &'static str, value: String) -> Result<String, ValidationError> {
    let segment = non_empty_trimmed(field, value)?;
    // URL parsing collapses `.`/`..` (also percent-encoded) and treats `\` as `/`.
    let decoded = segment.replace("%2e", ".").replace("%2E", ".");
    if segment.contains(['/', '\\', '?', '#']) || matches!(decoded.as_str(), "." | "..") {
        return Err(ValidationError::InvalidPathSegment {
            field,
            input: segment,
        });
    }
    Ok(segment)
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SecureFax company identifier.
///
/// Invariant: non-empty after trimming and usable as a single URL path segment.
pub struct CompanyId(String);

impl CompanyId {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "company_id";

    /// Create a validated [`CompanyId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(path_segment(Self::FIELD, value.into())?))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SecureFax DID identifier (not the phone number itself).
///
/// Invariant: non-empty after trimming and usable as a single URL path segment.
pub struct DidId(String);

impl DidId {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "did_id";

    /// Create a validated [`DidId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(path_segment(Self::FIELD, value.into())?))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Company display name (`name`).
///
/// Invariant: non-empty after trimming.
pub struct CompanyName(String);

impl CompanyName {
    /// JSON field name used by SecureFax (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated [`CompanyName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_empty_trimmed(Self::FIELD, value.into())?))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// DID phone number as sent to SecureFax (`number`).
///
/// Invariant: non-empty after trimming. No normalization is applied.
pub struct DidNumber(String);

impl DidNumber {
    /// JSON field name used by SecureFax (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated [`DidNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_empty_trimmed(Self::FIELD, value.into())?))
    }

    /// Borrow the number as it will be sent.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Email address of a SecureFax user (`email`).
///
/// Invariant: trimmed, with a non-empty local part and domain around a single `@`.
pub struct Email(String);

impl Email {
    /// JSON field name used by SecureFax (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = non_empty_trimmed(Self::FIELD, value.into())?;
        match value.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(value))
            }
            _ => Err(ValidationError::InvalidEmail { input: value }),
        }
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account username used for HTTP Basic authentication.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_empty_trimmed(Self::FIELD, value.into())?))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// A password: either the account password used for HTTP Basic authentication or
/// the password of an administrator being created.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The value is
/// redacted from `Debug` output.
pub struct Password(SecretString);

impl Password {
    /// JSON field name used by SecureFax (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::new(value)))
    }

    /// Borrow the password as provided.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone)]
/// API key sent in the `Security-key` header.
///
/// Invariant: non-empty after trimming. The value is redacted from `Debug` output.
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(SecretString::new(non_empty_trimmed(
            Self::FIELD,
            value.into(),
        )?)))
    }

    /// Borrow the validated key.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

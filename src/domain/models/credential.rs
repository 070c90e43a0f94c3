//! Bearer credentials and their resolution order.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// An opaque bearer secret. Never empty, never printed.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Wrap a raw value. Returns `None` for empty input so that an empty
    /// string is always treated as "not supplied".
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(SecretString::from(value)))
        }
    }

    /// Borrow the raw secret for the single place it is needed: the header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// `Authorization` header value for this credential.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Outcome of resolving a credential for one call.
#[derive(Debug, Clone)]
pub enum CredentialResolution {
    Present(Credential),
    Missing,
}

impl CredentialResolution {
    /// Resolve from an explicit argument first, then each fallback in order.
    ///
    /// Empty strings are skipped at every level.
    pub fn resolve<I>(explicit: Option<&str>, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = Option<Credential>>,
    {
        if let Some(credential) = explicit.and_then(Credential::new) {
            return Self::Present(credential);
        }
        fallbacks
            .into_iter()
            .flatten()
            .next()
            .map_or(Self::Missing, Self::Present)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Convert into a `Result`, building the error lazily when missing.
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Result<Credential, E> {
        match self {
            Self::Present(credential) => Ok(credential),
            Self::Missing => Err(err()),
        }
    }
}

//! Locale identifiers
//!
//! Locales are opaque string identifiers (`"en"`, `"en-US"`, `"es"`); the set
//! of locales in play is configuration data, not a hardcoded list. No
//! structure is inferred from the identifier — `"en-US"` and `"en"` are
//! unrelated unless the fallback configuration says otherwise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque locale identifier used as a catalog key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from an identifier string
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

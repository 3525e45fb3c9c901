//! Prefix - a single published address range

use serde::{Deserialize, Serialize};
use std::fmt;

/// A textual CIDR prefix as published by a provider (e.g. "10.0.0.0/8").
///
/// Prefixes are compared by exact string equality. No octet or mask
/// parsing happens anywhere in the pipeline; whatever string the provider
/// publishes is what gets stored, diffed and reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefix(String);

impl Prefix {
    /// Create a prefix from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw prefix string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prefix {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Prefix {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

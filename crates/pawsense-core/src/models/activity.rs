use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a discrete activity ("Sleep", "Walk", ...).
///
/// Ordering is plain string ordering. Tie-breaks and edge order rely on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLabel(String);

impl ActivityLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ActivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ActivityLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActivityLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActivityLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ActivityLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for ActivityLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActivityLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

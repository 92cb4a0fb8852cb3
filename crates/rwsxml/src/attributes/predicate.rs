//! The `(name, value)` predicate type.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An attribute `(name, value)` pair used to test nodes.
///
/// Both fields may be empty. Predicates are plain values: they never change
/// after construction. The protocol tables in [`crate::constants`] are built
/// from `const` instances via [`XmlAttribute::from_static`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XmlAttribute {
    name: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl XmlAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            value: Cow::Owned(value.into()),
        }
    }

    pub const fn from_static(name: &'static str, value: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: Cow::Borrowed(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when both name and value are empty.
    pub fn is_wildcard(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }
}

impl std::fmt::Display for XmlAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

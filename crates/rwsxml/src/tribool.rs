//! Three-valued booleans for protocol fields that may be unobtainable.

use crate::error::RwsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A boolean that can also be unknown, e.g. after a communication failure.
///
/// Constructing from a `bool` never yields [`TriBool::Unknown`]; use
/// [`TriBool::as_bool`] to get back an `Option<bool>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriBool {
    #[default]
    Unknown,
    True,
    False,
}

impl TriBool {
    pub fn is_unknown(self) -> bool {
        self == TriBool::Unknown
    }

    pub fn is_true(self) -> bool {
        self == TriBool::True
    }

    pub fn is_false(self) -> bool {
        self == TriBool::False
    }

    /// The known value, if any.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            TriBool::Unknown => None,
            TriBool::True => Some(true),
            TriBool::False => Some(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriBool::Unknown => "unknown",
            TriBool::True => "true",
            TriBool::False => "false",
        }
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        if value {
            TriBool::True
        } else {
            TriBool::False
        }
    }
}

impl std::fmt::Display for TriBool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriBool {
    type Err = RwsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(TriBool::Unknown),
            "true" => Ok(TriBool::True),
            "false" => Ok(TriBool::False),
            other => Err(RwsError::InvalidTriBool(other.to_string())),
        }
    }
}

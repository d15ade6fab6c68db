//! Confidence tiers

use serde::Serialize;
use std::fmt;

/// How well-corroborated a fact is
///
/// Ordered: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    /// No direct check and little corroboration
    Low,

    /// A direct check, or enough independent corroboration
    Medium,

    /// A direct check plus independent corroboration
    High,
}

impl Confidence {
    /// Get the tier name as shown in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "LOW",
            Confidence::Medium => "MEDIUM",
            Confidence::High => "HIGH",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Provenance tracking

use serde::Serialize;
use std::fmt;

/// Kind of evidence backing a fact
///
/// A closed set: anything else found in legacy data is not a source reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Checked directly in the product (the most authoritative kind)
    InGameVerified,

    /// Community wiki page
    Wiki,

    /// Video evidence
    Video,

    /// Third-party map data
    MapData,

    /// Derived internally from other data
    Derived,

    /// Agreed on by the community
    CommunityConsensus,

    /// Cited from a discussion thread
    ForumPost,

    /// Computed from another fact
    Calculated,
}

impl SourceKind {
    /// Every kind, in declaration order
    pub const ALL: [SourceKind; 8] = [
        SourceKind::InGameVerified,
        SourceKind::Wiki,
        SourceKind::Video,
        SourceKind::MapData,
        SourceKind::Derived,
        SourceKind::CommunityConsensus,
        SourceKind::ForumPost,
        SourceKind::Calculated,
    ];

    /// Get the wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::InGameVerified => "in_game_verified",
            SourceKind::Wiki => "wiki",
            SourceKind::Video => "video",
            SourceKind::MapData => "map_data",
            SourceKind::Derived => "derived",
            SourceKind::CommunityConsensus => "community_consensus",
            SourceKind::ForumPost => "forum_post",
            SourceKind::Calculated => "calculated",
        }
    }

    /// Parse a kind from its wire name
    ///
    /// Matching is exact: legacy data with other spellings is rejected rather
    /// than guessed at.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Whether this kind is a direct observation
    pub fn is_direct_observation(&self) -> bool {
        matches!(self, SourceKind::InGameVerified)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single citation recording where a fact came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReference {
    /// Kind of evidence
    pub kind: SourceKind,

    /// Date of the citation (`YYYY-MM-DD`)
    pub date: String,

    /// Where the evidence can be found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Who verified it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SourceReference {
    /// Create a new source reference
    pub fn new(kind: SourceKind, date: impl Into<String>) -> Self {
        Self {
            kind,
            date: date.into(),
            url: None,
            verified_by: None,
            notes: None,
        }
    }
}

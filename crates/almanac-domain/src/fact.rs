//! Attributed values
//!
//! An [`Attribution`] is the only way to obtain a [`Confidence`] for a fact:
//! it is built from sanitized sources and runs the inferencer once. Entities
//! embed one, and every [`VersionedFact`] is stamped from one, so confidence
//! always matches the sources it travels with.

use crate::{infer_confidence, Confidence, SourceReference};
use serde::Serialize;

/// Sanitized provenance plus the confidence inferred from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    confidence: Confidence,
    sources: Vec<SourceReference>,
    last_verified: String,
}

impl Attribution {
    /// Build an attribution, inferring confidence from `sources`
    pub fn new(sources: Vec<SourceReference>, last_verified: impl Into<String>) -> Self {
        Self {
            confidence: infer_confidence(&sources),
            sources,
            last_verified: last_verified.into(),
        }
    }

    /// Inferred confidence tier
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Sanitized sources
    pub fn sources(&self) -> &[SourceReference] {
        &self.sources
    }

    /// Date the record was last verified (`YYYY-MM-DD`)
    pub fn last_verified(&self) -> &str {
        &self.last_verified
    }

    /// Wrap a value as a fact carrying this attribution
    pub fn fact<T>(&self, value: T) -> VersionedFact<T> {
        VersionedFact {
            value,
            confidence: self.confidence,
            sources: self.sources.clone(),
            last_verified: self.last_verified.clone(),
            patch_version: None,
            deprecation_warning: None,
        }
    }
}

/// A value bundled with its confidence tier and supporting provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionedFact<T> {
    value: T,
    confidence: Confidence,
    sources: Vec<SourceReference>,
    last_verified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    patch_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deprecation_warning: Option<String>,
}

impl<T> VersionedFact<T> {
    /// Build a fact directly from sources
    pub fn new(value: T, sources: Vec<SourceReference>, last_verified: impl Into<String>) -> Self {
        Attribution::new(sources, last_verified).fact(value)
    }

    /// Tag the patch version the value was observed in
    pub fn with_patch_version(mut self, patch_version: impl Into<String>) -> Self {
        self.patch_version = Some(patch_version.into());
        self
    }

    /// Attach a deprecation warning
    pub fn with_deprecation_warning(mut self, warning: impl Into<String>) -> Self {
        self.deprecation_warning = Some(warning.into());
        self
    }

    /// The value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Inferred confidence tier
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Supporting sources
    pub fn sources(&self) -> &[SourceReference] {
        &self.sources
    }

    /// Date the value was last verified
    pub fn last_verified(&self) -> &str {
        &self.last_verified
    }

    /// Patch version tag, if any
    pub fn patch_version(&self) -> Option<&str> {
        self.patch_version.as_deref()
    }

    /// Deprecation warning, if any
    pub fn deprecation_warning(&self) -> Option<&str> {
        self.deprecation_warning.as_deref()
    }
}

//! Confidence inference
//!
//! Derives a confidence tier from the sanitized provenance of a fact. The
//! rule is deterministic and total over the closed set of source kinds:
//!
//! 1. No sources: LOW
//! 2. A direct observation plus at least two other sources: HIGH
//! 3. A direct observation, or at least three sources of any kind: MEDIUM
//! 4. Otherwise: LOW
//!
//! Adding a source can never lower the tier.

use crate::{Confidence, SourceReference};

/// Sources other than the direct observation needed to reach HIGH
pub const HIGH_CORROBORATION_THRESHOLD: usize = 2;

/// Sources needed to reach MEDIUM without a direct observation
pub const MEDIUM_SOURCE_THRESHOLD: usize = 3;

/// Infer the confidence tier for a set of sanitized sources
///
/// # Examples
///
/// ```
/// use almanac_domain::{infer_confidence, Confidence, SourceKind, SourceReference};
///
/// let sources = vec![SourceReference::new(SourceKind::InGameVerified, "2024-05-01")];
/// assert_eq!(infer_confidence(&sources), Confidence::Medium);
/// assert_eq!(infer_confidence(&[]), Confidence::Low);
/// ```
pub fn infer_confidence(sources: &[SourceReference]) -> Confidence {
    if sources.is_empty() {
        return Confidence::Low;
    }

    let has_direct_observation = sources.iter().any(|s| s.kind.is_direct_observation());
    let independent_others = sources
        .iter()
        .filter(|s| !s.kind.is_direct_observation())
        .count();

    if has_direct_observation && independent_others >= HIGH_CORROBORATION_THRESHOLD {
        Confidence::High
    } else if has_direct_observation || sources.len() >= MEDIUM_SOURCE_THRESHOLD {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::SourceKind;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = SourceKind> {
        prop::sample::select(SourceKind::ALL.to_vec())
    }

    fn sources_strategy() -> impl Strategy<Value = Vec<SourceReference>> {
        prop::collection::vec(
            kind_strategy().prop_map(|kind| SourceReference::new(kind, "2024-01-15")),
            0..8,
        )
    }

    proptest! {
        /// Property: Appending a valid source never lowers the tier
        #[test]
        fn test_appending_never_lowers(
            sources in sources_strategy(),
            extra in kind_strategy(),
        ) {
            let before = infer_confidence(&sources);
            let mut extended = sources.clone();
            extended.push(SourceReference::new(extra, "2024-02-01"));
            let after = infer_confidence(&extended);

            prop_assert!(after >= before, "{:?} dropped to {:?}", before, after);
        }

        /// Property: HIGH stays HIGH when another direct observation is added
        #[test]
        fn test_high_absorbs_direct_observation(sources in sources_strategy()) {
            prop_assume!(infer_confidence(&sources) == Confidence::High);
            let mut extended = sources.clone();
            extended.push(SourceReference::new(SourceKind::InGameVerified, "2024-02-01"));

            prop_assert_eq!(infer_confidence(&extended), Confidence::High);
        }

        /// Property: Removing the only direct observation never raises the tier
        #[test]
        fn test_removing_direct_never_raises(sources in sources_strategy()) {
            let before = infer_confidence(&sources);
            let without: Vec<_> = sources
                .iter()
                .filter(|s| !s.kind.is_direct_observation())
                .cloned()
                .collect();

            prop_assert!(infer_confidence(&without) <= before);
        }

        /// Property: Source order does not matter
        #[test]
        fn test_order_insensitive(sources in sources_strategy()) {
            let mut reversed = sources.clone();
            reversed.reverse();

            prop_assert_eq!(infer_confidence(&sources), infer_confidence(&reversed));
        }
    }
}

//! Paint ID allocation.
//!
//! Every processed source image gets a short unique identifier of the form
//! `{prefix}{4 digits}` (e.g. `skin0042`). Uniqueness is scoped to a single
//! run: the caller owns the set of already-issued IDs and threads it through
//! each call; nothing is persisted across runs.

use rand::Rng;
use rand::distributions::Alphanumeric;
use std::collections::HashSet;

/// Digit-draw attempts before giving up on the 0000-9999 space.
const MAX_ATTEMPTS: u32 = 100_000;

/// Length of the random alphanumeric fragment used by the fallback path.
const FALLBACK_SUFFIX_LEN: usize = 4;

/// Allocate a paint ID that does not collide with any ID in `existing`.
///
/// Draws a random 4-digit suffix until a free value is found. Once the
/// attempt bound is exhausted (only plausible when the prefix's 10000-value
/// space is nearly full) a random alphanumeric fragment is appended instead,
/// which guarantees termination. The chosen ID is inserted into `existing`
/// before returning, making the set the single source of truth for the run.
pub fn allocate_paint_id(prefix: &str, existing: &mut HashSet<String>) -> String {
    let mut rng = rand::thread_rng();

    for _ in 0..MAX_ATTEMPTS {
        let candidate = format!("{prefix}{:04}", rng.gen_range(0..10_000));
        if !existing.contains(&candidate) {
            existing.insert(candidate.clone());
            return candidate;
        }
    }

    // Fallback: widen the suffix space far beyond 10^4 so a free value is
    // found in a handful of draws even with a saturated digit space.
    let id = loop {
        let suffix: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(FALLBACK_SUFFIX_LEN)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect();
        let candidate = format!("{prefix}{suffix}");
        if !existing.contains(&candidate) {
            break candidate;
        }
    };
    existing.insert(id.clone());
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_four_digit_id(id: &str, prefix: &str) -> bool {
        id.strip_prefix(prefix)
            .is_some_and(|s| s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()))
    }

    #[test]
    fn test_allocated_id_shape() {
        let mut existing = HashSet::new();
        let id = allocate_paint_id("skin", &mut existing);
        assert!(is_four_digit_id(&id, "skin"), "unexpected ID: {id}");
        assert!(existing.contains(&id));
    }

    #[test]
    fn test_ids_are_distinct_across_many_allocations() {
        let mut existing = HashSet::new();
        for _ in 0..500 {
            allocate_paint_id("skin", &mut existing);
        }
        assert_eq!(existing.len(), 500);
    }

    #[test]
    fn test_fallback_when_digit_space_is_full() {
        // Pre-fill all 10000 possible digit suffixes.
        let mut existing: HashSet<String> =
            (0..10_000).map(|n| format!("skin{n:04}")).collect();
        let id = allocate_paint_id("skin", &mut existing);
        assert!(id.starts_with("skin"));
        assert!(!is_four_digit_id(&id, "skin"));
        assert_eq!(existing.len(), 10_001);
    }

    #[test]
    fn test_respects_preexisting_ids() {
        let mut existing: HashSet<String> = HashSet::from(["skin0001".to_string()]);
        for _ in 0..50 {
            allocate_paint_id("skin", &mut existing);
        }
        // 50 new entries on top of the seeded one
        assert_eq!(existing.len(), 51);
    }

    proptest! {
        #[test]
        fn prop_allocations_are_pairwise_distinct_and_well_formed(
            prefix in "[a-z]{1,8}",
            count in 1usize..200,
        ) {
            let mut existing = HashSet::new();
            let mut issued = Vec::with_capacity(count);
            for _ in 0..count {
                issued.push(allocate_paint_id(&prefix, &mut existing));
            }
            prop_assert_eq!(existing.len(), count);
            for id in &issued {
                prop_assert!(is_four_digit_id(id, &prefix));
            }
        }
    }
}

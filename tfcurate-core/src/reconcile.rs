//! Reconciliation of curated gene lists with motif-derived sets.
//!
//! A curated symbol only enters the final list when the motif collection
//! also annotates it, so the output is the exact intersection of the two
//! inputs. Matching is case-sensitive with no symbol normalization; a
//! curated symbol spelled differently from its motif-table counterpart is
//! dropped.

use crate::types::GeneSet;

/// Intersects a curated symbol sequence with a motif-derived gene set.
///
/// The result contains each symbol present in both inputs exactly once, in
/// the curated list's first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use tfcurate_core::reconcile::intersect_with_motif_set;
/// use tfcurate_core::types::GeneSet;
///
/// let motif_derived: GeneSet = ["A", "B"].iter().map(|s| s.to_string()).collect();
/// let curated = vec!["A".to_string(), "C".to_string(), "D".to_string()];
///
/// let confirmed = intersect_with_motif_set(&curated, &motif_derived);
/// assert_eq!(confirmed.iter().collect::<Vec<_>>(), vec!["A"]);
/// ```
#[must_use]
pub fn intersect_with_motif_set(curated: &[String], motif_derived: &GeneSet) -> GeneSet {
    curated
        .iter()
        .filter(|symbol| motif_derived.contains(symbol))
        .cloned()
        .collect()
}

//! Hierarchical sum rules used to synthesise an aggregate MT from its children
//!
//! Policy (spec §4.1): synthesis only happens when the requested MT is
//! absent from the tabulated data. Requesting a child MT must never
//! transparently populate its parent — these functions only ever describe
//! "what would `mt`'s children be", the decision of whether to apply that
//! rule belongs to the caller (the nuclide/material layers), which check
//! presence first.

use crate::reaction::Mt;

/// MT 1 (total) = elastic (2) + nonelastic (3)
///
/// Never synthesised if MT 1 itself is absent; it is a primary datum, not an
/// aggregate, and is listed here only so callers computing the total can
/// find the correct summand set in one place.
pub const TOTAL_CHILDREN: &[Mt] = &[2, 3];

/// MT 4 (inelastic-sum) = Σ {51..=91}
pub const INELASTIC_SUM_CHILDREN_START: Mt = 51;
/// See [`INELASTIC_SUM_CHILDREN_START`]
pub const INELASTIC_SUM_CHILDREN_END: Mt = 91;

/// MT 101 (disappearance) = Σ {102..=117}
pub const DISAPPEARANCE_CHILDREN_START: Mt = 102;
/// See [`DISAPPEARANCE_CHILDREN_START`]
pub const DISAPPEARANCE_CHILDREN_END: Mt = 117;

/// Fission-like MTs, any of which with non-zero data makes a nuclide fissionable
pub const FISSION_LIKE: &[Mt] = &[18, 19, 20, 21, 38];

/// Return the children to sum for `mt`'s sum rule, or `None` if `mt` has no
/// sum rule defined (it is either a primary datum or an unrelated MT).
///
/// `fissionable` selects whether MT 27 (absorption)'s rule includes fission
/// (MT 18) in its summand set, per spec §4.1: "Σ {102–117 and fission if
/// fissionable}".
///
/// ```rust
/// # use nucdata_taxonomy::sum_rule_children;
/// assert_eq!(sum_rule_children(1, false), Some(vec![2, 3]));
/// assert!(sum_rule_children(4, false).unwrap().contains(&51));
/// assert!(sum_rule_children(27, true).unwrap().contains(&18));
/// assert!(!sum_rule_children(27, false).unwrap().contains(&18));
/// assert_eq!(sum_rule_children(102, false), None);
/// ```
pub fn sum_rule_children(mt: Mt, fissionable: bool) -> Option<Vec<Mt>> {
    match mt {
        1 => Some(TOTAL_CHILDREN.to_vec()),
        3 => Some(nonelastic_children()),
        4 => Some((INELASTIC_SUM_CHILDREN_START..=INELASTIC_SUM_CHILDREN_END).collect()),
        27 => Some(absorption_children(fissionable)),
        101 => Some((DISAPPEARANCE_CHILDREN_START..=DISAPPEARANCE_CHILDREN_END).collect()),
        _ => None,
    }
}

/// MT 3 (nonelastic) = Σ {4, 16, 17, 22-26, 28-37, 41, 42, 44, 45, 102-109,
/// 111, 112, 113, 114, 115, 116, 117} present in the data
///
/// Note: MT 24 ((n,2na)) is deliberately part of this set — resolved Open
/// Question in spec §9/§12.
fn nonelastic_children() -> Vec<Mt> {
    let mut children = vec![4, 16, 17];
    children.extend(22..=26);
    children.extend(28..=37);
    children.extend([41, 42, 44, 45]);
    children.extend(102..=109);
    children.extend([111, 112, 113, 114, 115, 116, 117]);
    children
}

/// MT 27 (absorption) = Σ {102-117} plus fission (18) if fissionable
fn absorption_children(fissionable: bool) -> Vec<Mt> {
    let mut children: Vec<Mt> = (102..=117).collect();
    if fissionable {
        children.push(18);
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mt3_includes_mt24() {
        assert!(nonelastic_children().contains(&24));
    }

    #[test]
    fn mt1_is_elastic_plus_nonelastic() {
        assert_eq!(sum_rule_children(1, true), Some(vec![2, 3]));
    }

    #[test]
    fn unrelated_mt_has_no_rule() {
        assert!(sum_rule_children(16, true).is_none());
    }
}

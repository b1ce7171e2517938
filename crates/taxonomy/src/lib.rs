//! MT reaction identifier taxonomy and sum-rule tables
//!
//! Provides the bidirectional map between ENDF-6 MT integers and canonical
//! reaction names ([`mt_of`]/[`name_of`]), the [`ReactionId`] tagged variant
//! used at public API boundaries that accept either form, and the
//! hierarchical [`sum_rule_children`] tables used to synthesise an aggregate
//! reaction from its children when it is not directly tabulated.

mod reaction;
mod sum_rules;

#[doc(inline)]
pub use reaction::{mt_of, name_of, Mt, ReactionId};

#[doc(inline)]
pub use sum_rules::{sum_rule_children, FISSION_LIKE};

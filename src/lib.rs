//! # splice
//!
//! A compile-time source-transformation toolkit: freestanding expression
//! macros, declaration synthesis, and a callback-to-async rewrite, together
//! with the runtime support the generated code expands against.
//!
//! The macros live in `splice-macros` (entry points) and `splice-expand`
//! (the expansion engines); this crate re-exports the macros next to
//! [`OptionSet`] and [`suspend`] so that a single dependency covers both
//! sides of every expansion.

pub mod continuation;
pub mod option_set;

pub use continuation::{suspend, Continuation};
pub use option_set::OptionSet;

pub use splice_macros::{
    add_async, four_character_code, member_deprecated, option_set, peer_value, stringify,
};

//! Expansion engines for the `splice` macros.
//!
//! Every engine in this crate is a pure function over `syn` trees: one
//! invocation site in, one replacement tree (or a diagnostic) out. Engines
//! never mutate the trees they are handed; rewrites happen on clones and the
//! results are returned as fresh nodes for the caller to splice.
//!
//! The proc-macro boundary lives in `splice-macros`. Keeping the engines in a
//! plain library crate makes them unit-testable without a compiler host.

pub mod add_async;
pub mod deprecate;
pub mod error;
pub mod four_cc;
pub mod option_set;
pub mod peer;
pub mod query;
pub mod stringify;

pub use error::{ExpandError, Result};

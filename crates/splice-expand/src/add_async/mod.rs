//! Callback-to-suspension rewrite: a synchronous function whose last
//! parameter is a completion callback gains an `async` peer that bridges
//! through the suspension runtime.

mod emit;
mod scan;


use syn::{Item, ItemFn, Path};

use crate::error::Result;

pub use scan::{AsyncSignature, CallbackKind};

/// Rewrites a callback-style function declaration into a suspension-style
/// peer declaration.
///
/// The input is never modified: the rewrite clones it, performs the
/// parameter-list surgery and body synthesis on the clone, and returns the
/// clone for the caller to splice in alongside the original.
pub struct AsyncRewrite {
    /// Name of the triggering attribute, stripped from the clone's attribute
    /// list. Comparison is textual, an approximation of self-removal (the
    /// host gives us no structural identity to compare against).
    attribute_name: String,
    /// Crate path the synthesized body suspends through, e.g. `::splice`.
    support_path: Path,
}

impl AsyncRewrite {
    pub fn new(attribute_name: impl Into<String>, support_path: Path) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            support_path,
        }
    }

    /// Validate the declaration and produce its suspension-style peer.
    pub fn expand(&self, item: &Item) -> Result<ItemFn> {
        let (func, signature) = scan::scan(item)?;
        Ok(emit::emit(self, func, &signature))
    }

    pub(crate) fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub(crate) fn support_path(&self) -> &Path {
        &self.support_path
    }
}

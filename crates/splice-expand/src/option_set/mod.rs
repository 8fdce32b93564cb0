//! Option-set synthesis: a struct-like declaration carrying a nested case
//! enum expands into flag storage, initializers, one constant per case, and
//! a conformance impl for the option-set trait.

mod emit;
mod scan;

#[cfg(test)]
mod tests;

use syn::{Item, Path, Type};

pub use scan::{CaseFlag, OptionSetDecl};

/// Policy for the raw-storage annotation on an `option_set!` declaration.
///
/// Whether the annotation may be omitted is a configuration choice for the
/// entry point, not something the grammar or the engine decides on its own.
#[derive(Clone, Debug)]
pub enum RawStorage {
    /// The declaration must carry `: RawType`. Without it the synthesis is
    /// skipped entirely and the declaration expands as written.
    Required,
    /// Fall back to this type when the annotation is absent.
    Default(Type),
}

/// Member synthesis and extension synthesis for one declaration.
///
/// The two capabilities are logically separate (`members` builds storage
/// and flags, `conformance` the trait impl) and run in tandem by
/// [`expand`](Self::expand) for the same invocation.
pub struct OptionSetExpansion {
    storage: RawStorage,
    support_path: Path,
}

impl OptionSetExpansion {
    /// `support_path` is the crate path the conformance impl names the
    /// option-set trait through, e.g. `::splice`.
    pub fn new(storage: RawStorage, support_path: Path) -> Self {
        Self {
            storage,
            support_path,
        }
    }

    /// Expand one declaration into its ordered item list.
    ///
    /// With no resolvable storage type, or no nested case enum, nothing is
    /// synthesized and the declaration is emitted as written.
    pub fn expand(&self, decl: &OptionSetDecl) -> Vec<Item> {
        let Some(raw) = self.storage_type(decl) else {
            return emit::passthrough(decl);
        };
        if decl.case_enum().is_none() {
            return emit::passthrough(decl);
        }
        let mut items = emit::members(decl, &raw);
        items.push(emit::conformance(decl, &raw, &self.support_path));
        items
    }

    fn storage_type(&self, decl: &OptionSetDecl) -> Option<Type> {
        decl.raw.clone().or_else(|| match &self.storage {
            RawStorage::Required => None,
            RawStorage::Default(ty) => Some(ty.clone()),
        })
    }
}

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Index, Item, Path, Type};

use super::scan::OptionSetDecl;

/// Member synthesis: the storage struct, the case enum re-emitted untouched,
/// the zero initializer with one flag constant per case, and a `Default`
/// forwarding impl, in that order.
pub(super) fn members(decl: &OptionSetDecl, raw: &Type) -> Vec<Item> {
    let attrs = &decl.attrs;
    let vis = &decl.vis;
    let ident = &decl.ident;

    let mut items: Vec<Item> = Vec::new();
    items.push(parse_quote! {
        #(#attrs)*
        #vis struct #ident {
            raw_value: #raw,
        }
    });
    items.extend(decl.body.iter().cloned());

    let flags: Vec<TokenStream> = decl
        .case_flags()
        .iter()
        .map(|case| {
            let name = case.ident;
            let shift = Index::from(case.ordinal);
            quote! {
                #vis const #name: Self = Self { raw_value: 1 << #shift };
            }
        })
        .collect();
    items.push(parse_quote! {
        #[allow(non_upper_case_globals)]
        impl #ident {
            #vis const fn new() -> Self {
                Self { raw_value: 0 }
            }

            #(#flags)*
        }
    });
    items.push(parse_quote! {
        impl ::core::default::Default for #ident {
            fn default() -> Self {
                Self::new()
            }
        }
    });
    items
}

/// Extension synthesis: the trait-conformance declaration for the same
/// attachment, kept separate from member synthesis. The raw-storage alias
/// and the raw-value initializer live here as the impl's required items.
pub(super) fn conformance(decl: &OptionSetDecl, raw: &Type, support_path: &Path) -> Item {
    let ident = &decl.ident;
    parse_quote! {
        impl #support_path::OptionSet for #ident {
            type RawValue = #raw;

            fn raw_value(&self) -> Self::RawValue {
                self.raw_value
            }

            fn from_raw_value(raw_value: Self::RawValue) -> Self {
                Self { raw_value }
            }
        }
    }
}

/// The no-op expansion: the declaration as written, nothing synthesized.
pub(super) fn passthrough(decl: &OptionSetDecl) -> Vec<Item> {
    let attrs = &decl.attrs;
    let vis = &decl.vis;
    let ident = &decl.ident;
    let mut items: Vec<Item> = vec![parse_quote! {
        #(#attrs)*
        #vis struct #ident;
    }];
    items.extend(decl.body.iter().cloned());
    items
}

//! Peer synthesis: a named declaration gains a `_peer`-suffixed value
//! declaration next to it.

use quote::format_ident;
use syn::{parse_quote, Ident, Item, ItemFn};

/// The peer declaration for a named item, `None` for declarations without a
/// name (which expand to themselves unchanged).
pub fn expand(item: &Item) -> Option<ItemFn> {
    let ident = declared_name(item)?;
    let name = format_ident!("{}_peer", ident);
    Some(parse_quote! {
        #[allow(non_snake_case)]
        fn #name() -> i64 {
            1
        }
    })
}

fn declared_name(item: &Item) -> Option<&Ident> {
    match item {
        Item::Const(item) => Some(&item.ident),
        Item::Enum(item) => Some(&item.ident),
        Item::Fn(item) => Some(&item.sig.ident),
        Item::Mod(item) => Some(&item.ident),
        Item::Static(item) => Some(&item.ident),
        Item::Struct(item) => Some(&item.ident),
        Item::Trait(item) => Some(&item.ident),
        Item::Type(item) => Some(&item.ident),
        Item::Union(item) => Some(&item.ident),
        _ => None,
    }
}

//! Member-attribute injection: every direct member of a marked declaration
//! group gains a fixed deprecation attribute.

use syn::{parse_quote, Attribute, ImplItem, Item, TraitItem};

/// The attribute attached to each member. Every member gets the same one;
/// there is no per-member logic.
pub fn member_attribute() -> Attribute {
    parse_quote!(#[deprecated])
}

/// Attach the deprecation attribute to each direct member of a declaration
/// group. Declarations that do not group members come back unchanged.
pub fn expand(item: Item) -> Item {
    match item {
        Item::Mod(mut module) => {
            if let Some((_, items)) = &mut module.content {
                for member in items.iter_mut() {
                    annotate_item(member);
                }
            }
            Item::Mod(module)
        }
        Item::Impl(mut item_impl) => {
            for member in item_impl.items.iter_mut() {
                match member {
                    ImplItem::Const(member) => member.attrs.push(member_attribute()),
                    ImplItem::Fn(member) => member.attrs.push(member_attribute()),
                    ImplItem::Type(member) => member.attrs.push(member_attribute()),
                    _ => {}
                }
            }
            Item::Impl(item_impl)
        }
        Item::Trait(mut item_trait) => {
            for member in item_trait.items.iter_mut() {
                match member {
                    TraitItem::Const(member) => member.attrs.push(member_attribute()),
                    TraitItem::Fn(member) => member.attrs.push(member_attribute()),
                    TraitItem::Type(member) => member.attrs.push(member_attribute()),
                    _ => {}
                }
            }
            Item::Trait(item_trait)
        }
        Item::Struct(mut item_struct) => {
            for field in item_struct.fields.iter_mut() {
                field.attrs.push(member_attribute());
            }
            Item::Struct(item_struct)
        }
        Item::Enum(mut item_enum) => {
            for variant in item_enum.variants.iter_mut() {
                variant.attrs.push(member_attribute());
            }
            Item::Enum(item_enum)
        }
        other => other,
    }
}

fn annotate_item(member: &mut Item) {
    let attrs = match member {
        Item::Const(member) => &mut member.attrs,
        Item::Enum(member) => &mut member.attrs,
        Item::Fn(member) => &mut member.attrs,
        Item::Mod(member) => &mut member.attrs,
        Item::Static(member) => &mut member.attrs,
        Item::Struct(member) => &mut member.attrs,
        Item::Trait(member) => &mut member.attrs,
        Item::Type(member) => &mut member.attrs,
        Item::Union(member) => &mut member.attrs,
        Item::Use(member) => &mut member.attrs,
        _ => return,
    };
    attrs.push(member_attribute());
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::parse_quote;

    fn count_deprecated(tokens: &str) -> usize {
        tokens.matches("# [deprecated]").count()
    }

    #[test]
    fn module_members_are_annotated() {
        let expanded = expand(parse_quote! {
            mod legacy {
                pub fn old_api() {}
                pub const LIMIT: usize = 8;
                pub struct Carried;
            }
        });
        assert_eq!(count_deprecated(&expanded.to_token_stream().to_string()), 3);
    }

    #[test]
    fn struct_fields_and_enum_variants_are_annotated() {
        let expanded = expand(parse_quote! {
            struct Config {
                retries: u32,
                timeout: u32,
            }
        });
        assert_eq!(count_deprecated(&expanded.to_token_stream().to_string()), 2);

        let expanded = expand(parse_quote! {
            enum Mode { Fast, Slow }
        });
        assert_eq!(count_deprecated(&expanded.to_token_stream().to_string()), 2);
    }

    #[test]
    fn impl_members_are_annotated() {
        let expanded = expand(parse_quote! {
            impl Config {
                pub fn load() {}
                const LIMIT: usize = 8;
            }
        });
        assert_eq!(count_deprecated(&expanded.to_token_stream().to_string()), 2);
    }

    #[test]
    fn non_group_declarations_pass_through() {
        let item: Item = parse_quote!(fn solo() {});
        let expanded = expand(item.clone());
        assert_eq!(
            expanded.to_token_stream().to_string(),
            item.to_token_stream().to_string()
        );
    }
}

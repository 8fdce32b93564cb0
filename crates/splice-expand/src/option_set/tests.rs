use quote::quote;
use syn::parse_quote;

use super::{OptionSetDecl, OptionSetExpansion, RawStorage};

fn expand(storage: RawStorage, tokens: proc_macro2::TokenStream) -> String {
    let decl: OptionSetDecl = syn::parse2(tokens).unwrap();
    let items = OptionSetExpansion::new(storage, parse_quote!(::splice)).expand(&decl);
    quote!(#(#items)*).to_string()
}

macro_rules! case {
    ($($tt:tt)*) => {
        expand(RawStorage::Required, quote! { $($tt)* })
    };
}

#[test]
fn full_expansion() {
    let generated = case! {
        pub struct ShippingOptions: u32 {
            enum Options {
                NextDay,
                SecondDay,
            }
        }
    };
    let expected = quote! {
        pub struct ShippingOptions {
            raw_value: u32,
        }
        enum Options {
            NextDay,
            SecondDay,
        }
        #[allow(non_upper_case_globals)]
        impl ShippingOptions {
            pub const fn new() -> Self {
                Self { raw_value: 0 }
            }

            pub const NextDay: Self = Self { raw_value: 1 << 0 };
            pub const SecondDay: Self = Self { raw_value: 1 << 1 };
        }
        impl ::core::default::Default for ShippingOptions {
            fn default() -> Self {
                Self::new()
            }
        }
        impl ::splice::OptionSet for ShippingOptions {
            type RawValue = u32;

            fn raw_value(&self) -> Self::RawValue {
                self.raw_value
            }

            fn from_raw_value(raw_value: Self::RawValue) -> Self {
                Self { raw_value }
            }
        }
    };
    assert_eq!(generated, expected.to_string());
}

#[test]
fn flag_ordinals_follow_declaration_order() {
    let generated = case! {
        struct Permissions: u8 {
            enum Kind { Read, Write, Execute }
        }
    };
    for (ordinal, name) in ["Read", "Write", "Execute"].iter().enumerate() {
        let name = syn::Ident::new(name, proc_macro2::Span::call_site());
        let index = syn::Index::from(ordinal);
        let flag = quote!(const #name: Self = Self { raw_value: 1 << #index };);
        assert!(
            generated.contains(&flag.to_string()),
            "missing flag for case '{}':\n{}",
            name,
            generated
        );
    }
}

#[test]
fn no_nested_enum_is_a_silent_no_op() {
    let generated = case! {
        pub struct Empty: u32 {}
    };
    assert_eq!(generated, quote!(pub struct Empty;).to_string());
}

#[test]
fn missing_raw_type_fails_closed_under_required_policy() {
    let generated = case! {
        struct Unstored {
            enum Kind { A, B }
        }
    };
    let expected = quote! {
        struct Unstored;
        enum Kind { A, B }
    };
    assert_eq!(generated, expected.to_string());
}

#[test]
fn default_policy_fills_in_the_storage_type() {
    let generated = expand(
        RawStorage::Default(parse_quote!(u8)),
        quote! {
            struct Unstored {
                enum Kind { A, B }
            }
        },
    );
    assert!(
        generated.contains(&quote!(type RawValue = u8;).to_string()),
        "default storage type not applied:\n{}",
        generated
    );
}

#[test]
fn explicit_raw_type_wins_over_default_policy() {
    let generated = expand(
        RawStorage::Default(parse_quote!(u8)),
        quote! {
            struct Stored: u64 {
                enum Kind { A }
            }
        },
    );
    assert!(generated.contains(&quote!(type RawValue = u64;).to_string()));
}

#[test]
fn first_nested_enum_wins() {
    let generated = case! {
        struct Flags: u32 {
            enum First { A }
            enum Second { B }
        }
    };
    assert!(generated.contains(&quote!(const A: Self).to_string()));
    assert!(!generated.contains(&quote!(const B: Self).to_string()));
}

#[test]
fn declaration_attributes_are_preserved() {
    let generated = case! {
        #[derive(Clone, Copy)]
        pub struct Marked: u16 {
            enum Kind { A }
        }
    };
    assert!(generated.contains(&quote!(#[derive(Clone, Copy)]).to_string()));
}

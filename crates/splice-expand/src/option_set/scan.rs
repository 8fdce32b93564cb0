use syn::braced;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Ident, Item, ItemEnum, Token, Type, Visibility};

/// A struct-like declaration whose body is an ordered list of nested items.
///
/// ```text
/// pub struct ShippingOptions: u32 {
///     enum Options { NextDay, SecondDay, Priority, Standard }
/// }
/// ```
///
/// The `: RawType` annotation is optional at parse time; whether an absent
/// annotation is an error is the expansion's policy, not the grammar's.
pub struct OptionSetDecl {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub raw: Option<Type>,
    pub body: Vec<Item>,
}

impl Parse for OptionSetDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;
        let raw = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        let content;
        braced!(content in input);
        let mut body = Vec::new();
        while !content.is_empty() {
            body.push(content.parse()?);
        }
        Ok(Self {
            attrs,
            vis,
            ident,
            raw,
            body,
        })
    }
}

/// One case of the nested enum. The ordinal is the case's declaration order
/// and doubles as its bit-shift amount; names never enter into it.
pub struct CaseFlag<'a> {
    pub ident: &'a Ident,
    pub ordinal: usize,
}

impl OptionSetDecl {
    /// First nested enum declaration in the body, if any.
    pub fn case_enum(&self) -> Option<&ItemEnum> {
        self.body.iter().find_map(|item| match item {
            Item::Enum(item) => Some(item),
            _ => None,
        })
    }

    /// Cases of the nested enum, in declaration order.
    pub fn case_flags(&self) -> Vec<CaseFlag<'_>> {
        self.case_enum()
            .map(|case_enum| {
                case_enum
                    .variants
                    .iter()
                    .enumerate()
                    .map(|(ordinal, variant)| CaseFlag {
                        ident: &variant.ident,
                        ordinal,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

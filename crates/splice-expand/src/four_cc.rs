//! `four_character_code!("ABCD")` → `1094861636u32`.

use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{parse_quote, Expr, LitInt, Token};

use crate::error::{ExpandError, Result};
use crate::query;

/// Expand a four-character-code invocation into a suffixed `u32` literal.
///
/// The argument must be a plain string literal of exactly four characters,
/// each with a single-byte code point; the bytes are packed big-endian,
/// left to right.
pub fn expand(args: &Punctuated<Expr, Token![,]>) -> Result<Expr> {
    let argument = query::first_argument(args)
        .ok_or(ExpandError::MalformedInvocation(proc_macro2::Span::call_site()))?;
    let literal = query::string_literal(argument)
        .ok_or_else(|| ExpandError::NeedsStaticString(argument.span()))?;
    let code =
        pack(&literal.value()).ok_or_else(|| ExpandError::InvalidCode(literal.span()))?;
    let literal = LitInt::new(&format!("{code}u32"), literal.span());
    Ok(parse_quote!(#literal))
}

/// Big-endian packing of four single-byte characters.
fn pack(text: &str) -> Option<u32> {
    if text.chars().count() != 4 {
        return None;
    }
    let mut result: u32 = 0;
    for character in text.chars() {
        let byte = u8::try_from(u32::from(character)).ok()?;
        result = (result << 8) | u32::from(byte);
    }
    Some(result)
}

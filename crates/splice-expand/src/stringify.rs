//! `stringify!(expr)` → `(expr, "expr")`.

use proc_macro2::Span;
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{parse_quote, Expr, LitStr, Token};

use crate::error::{ExpandError, Result};
use crate::query;

/// Expand a stringify invocation into a tuple of the argument's value and
/// its source text.
///
/// The second tuple element is the token-level reconstruction of the
/// argument; the expression itself is spliced through untouched and never
/// inspected semantically. Arguments past the first are ignored.
pub fn expand(args: &Punctuated<Expr, Token![,]>) -> Result<Expr> {
    let argument = query::first_argument(args)
        .ok_or(ExpandError::MalformedInvocation(Span::call_site()))?;
    let source = LitStr::new(
        &argument.to_token_stream().to_string(),
        argument.span(),
    );
    Ok(parse_quote!((#argument, #source)))
}

//! # splice-macros
//!
//! Procedural-macro entry points for the `splice` toolkit. Each macro here is
//! bound to exactly one expansion engine in `splice-expand`: the entry parses
//! the invocation, runs the engine, and splices the result, or a diagnostic
//! pinned to the invocation site, back into the program. The set of entries
//! in this file is the toolkit's whole registration surface; rustc fixes it
//! at plugin load and nothing mutates it afterwards.
//!
//! Use these through the `splice` crate, which re-exports every macro next to
//! the runtime support the expansions reference (`splice::OptionSet`,
//! `splice::suspend`).

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::parse::Nothing;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, parse_quote, Expr, Token};

use splice_expand::add_async::AsyncRewrite;
use splice_expand::option_set::{OptionSetDecl, OptionSetExpansion, RawStorage};

/// Expands to a tuple of the argument's value and the source text that
/// produced it.
///
/// ```ignore
/// let (value, source) = stringify!(a + b);
/// // value == a + b, source == "a + b"
/// ```
#[proc_macro]
pub fn stringify(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input with Punctuated::<Expr, Token![,]>::parse_terminated);
    match splice_expand::stringify::expand(&args) {
        Ok(expr) => expr.into_token_stream().into(),
        Err(err) => syn::Error::from(err).into_compile_error().into(),
    }
}

/// Expands a four-character string literal to the big-endian packing of its
/// byte values, as a `u32` literal.
///
/// ```ignore
/// const FORMAT: u32 = four_character_code!("avc1");
/// ```
///
/// The argument must be a plain string literal of exactly four single-byte
/// characters; anything else is a compile error.
#[proc_macro]
pub fn four_character_code(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input with Punctuated::<Expr, Token![,]>::parse_terminated);
    match splice_expand::four_cc::expand(&args) {
        Ok(expr) => expr.into_token_stream().into(),
        Err(err) => syn::Error::from(err).into_compile_error().into(),
    }
}

/// Declares an option-set type: a struct-like declaration carrying a nested
/// case enum expands into flag storage, a zero initializer, one flag
/// constant per case (`1 << ordinal`, in declaration order), and an
/// [`OptionSet`](../splice/trait.OptionSet.html) conformance.
///
/// ```ignore
/// option_set! {
///     pub struct ShippingOptions: u32 {
///         enum Options { NextDay, SecondDay, Priority, Standard }
///     }
/// }
/// ```
///
/// The `: RawType` annotation names the flag storage and is required; without
/// it (or without a nested enum) the declaration expands as written, with
/// nothing synthesized.
#[proc_macro]
pub fn option_set(input: TokenStream) -> TokenStream {
    let decl = parse_macro_input!(input as OptionSetDecl);
    let expansion = OptionSetExpansion::new(RawStorage::Required, parse_quote!(::splice));
    let items = expansion.expand(&decl);
    quote!(#(#items)*).into()
}

/// Gives a callback-style function an `async` peer.
///
/// The function must be synchronous, return `()`, and take a completion
/// callback (`impl Fn*` returning `()`) as its last parameter. A peer named
/// with the `_async` suffix is emitted alongside it: the callback parameter
/// is dropped, the callback's payload type becomes the return type
/// (`Result<V, E>` payloads make the peer failable), and the body bridges
/// through [`suspend`](../splice/fn.suspend.html).
///
/// ```ignore
/// #[add_async]
/// fn fetch(url: &str, completion: impl FnOnce(Result<Data, FetchError>) + Send + 'static) {
///     // ...
/// }
///
/// // generated:
/// // async fn fetch_async(url: &str) -> Result<Data, FetchError> { ... }
/// ```
#[proc_macro_attribute]
pub fn add_async(args: TokenStream, item: TokenStream) -> TokenStream {
    let _ = parse_macro_input!(args as Nothing);
    let item = parse_macro_input!(item as syn::Item);
    let rewrite = AsyncRewrite::new("add_async", parse_quote!(::splice));
    match rewrite.expand(&item) {
        Ok(peer) => quote!(#item #peer).into(),
        Err(err) => {
            // Keep the original declaration alive next to the diagnostic so
            // the rest of the program still resolves against it.
            let error = syn::Error::from(err).into_compile_error();
            quote!(#item #error).into()
        }
    }
}

/// Emits a `_peer`-suffixed value declaration next to any named declaration.
#[proc_macro_attribute]
pub fn peer_value(args: TokenStream, item: TokenStream) -> TokenStream {
    let _ = parse_macro_input!(args as Nothing);
    let item = parse_macro_input!(item as syn::Item);
    match splice_expand::peer::expand(&item) {
        Some(peer) => quote!(#item #peer).into(),
        None => item.into_token_stream().into(),
    }
}

/// Marks every direct member of a declaration group `#[deprecated]`.
#[proc_macro_attribute]
pub fn member_deprecated(args: TokenStream, item: TokenStream) -> TokenStream {
    let _ = parse_macro_input!(args as Nothing);
    let item = parse_macro_input!(item as syn::Item);
    splice_expand::deprecate::expand(item)
        .into_token_stream()
        .into()
}

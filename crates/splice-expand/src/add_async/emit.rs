use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{parse_quote, Block, ItemFn, ReturnType, Token};

use super::scan::{AsyncSignature, CallbackKind};
use super::AsyncRewrite;

/// Build the suspension-style peer from a validated declaration.
///
/// Works on a clone; the rewrite steps are ordered (drop the callback, strip
/// the triggering attribute, then graft the new identity, return type and
/// body) because each depends on the previous one's output.
pub(super) fn emit(rewrite: &AsyncRewrite, func: &ItemFn, signature: &AsyncSignature) -> ItemFn {
    let mut peer = func.clone();

    // Rebuilding the parameter list from the retained parameters also drops
    // the separator that used to precede the callback.
    peer.sig.inputs = signature
        .retained
        .iter()
        .cloned()
        .collect::<Punctuated<_, Token![,]>>();

    peer.attrs
        .retain(|attr| !attr.path().is_ident(rewrite.attribute_name()));

    peer.sig.asyncness = Some(Default::default());
    peer.sig.ident = format_ident!("{}_async", func.sig.ident);
    peer.sig.output = match &signature.callback {
        CallbackKind::Unit => ReturnType::Default,
        CallbackKind::Value(ty) => parse_quote!(-> #ty),
        CallbackKind::Fallible { ok, err } => parse_quote!(-> Result<#ok, #err>),
    };
    peer.block = Box::new(body(rewrite, func, signature));
    peer
}

/// The synthesized body: call the original function with the forwarded
/// arguments and an inline callback that resumes the suspended caller.
fn body(rewrite: &AsyncRewrite, func: &ItemFn, signature: &AsyncSignature) -> Block {
    let support = rewrite.support_path();
    let target = &func.sig.ident;
    let forwarded = &signature.forwarded;
    let bridge = bridge(&signature.callback);

    parse_quote!({
        #support::suspend(move |continuation| {
            #target(#(#forwarded,)* #bridge)
        })
        .await
    })
}

fn bridge(callback: &CallbackKind) -> TokenStream {
    match callback {
        CallbackKind::Unit => quote! {
            move || continuation.resume(())
        },
        CallbackKind::Value(_) => quote! {
            move |value| continuation.resume(value)
        },
        CallbackKind::Fallible { .. } => quote! {
            move |outcome| match outcome {
                Ok(value) => continuation.resume(Ok(value)),
                Err(error) => continuation.resume(Err(error)),
            }
        },
    }
}

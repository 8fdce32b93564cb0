use syn::spanned::Spanned;
use syn::{FnArg, Ident, Item, ItemFn, Pat, Type};

use crate::error::{ExpandError, Result};
use crate::query;

/// Shape of the completion callback's parameter, which decides the rewritten
/// function's return type and the synthesized body.
#[derive(Clone, Debug)]
pub enum CallbackKind {
    /// The callback takes no value; the peer returns nothing.
    Unit,
    /// The callback delivers a plain value of this type.
    Value(Type),
    /// The callback delivers `Result<ok, err>`; the peer is failable and the
    /// synthesized body dispatches on the two variants.
    Fallible { ok: Type, err: Type },
}

/// Everything the emitter needs from a validated declaration.
pub struct AsyncSignature {
    /// Parameters retained after dropping the completion callback.
    pub retained: Vec<FnArg>,
    /// Internal names of the retained parameters, forwarded positionally to
    /// the original function.
    pub forwarded: Vec<Ident>,
    pub callback: CallbackKind,
}

/// Run the validation chain and distill the declaration's signature.
///
/// Each precondition failure raises its own diagnostic and aborts; nothing
/// is emitted for a declaration that fails any step.
pub(super) fn scan(item: &Item) -> Result<(&ItemFn, AsyncSignature)> {
    let Item::Fn(func) = item else {
        return Err(ExpandError::NotAFunction(item.span()));
    };
    if let Some(token) = &func.sig.asyncness {
        return Err(ExpandError::AlreadyAsync(token.span()));
    }
    if !query::returns_unit(&func.sig.output) {
        return Err(ExpandError::MustReturnVoid(func.sig.output.span()));
    }
    if let Some(receiver) = func.sig.receiver() {
        return Err(ExpandError::HasReceiver(receiver.span()));
    }

    let mut inputs: Vec<FnArg> = func.sig.inputs.iter().cloned().collect();
    let Some(FnArg::Typed(completion)) = inputs.pop() else {
        return Err(ExpandError::MissingCompletionHandler(func.sig.span()));
    };
    let Some(shape) = query::callback_shape(&completion.ty) else {
        return Err(ExpandError::MissingCompletionHandler(completion.ty.span()));
    };
    if !query::returns_unit(shape.output) {
        return Err(ExpandError::CompletionMustReturnVoid(shape.output.span()));
    }
    let callback = match shape.inputs.as_slice() {
        [] => CallbackKind::Unit,
        [ty] => match query::result_arguments(ty) {
            Some((ok, err)) => CallbackKind::Fallible {
                ok: ok.clone(),
                err: err.clone(),
            },
            None => CallbackKind::Value((*ty).clone()),
        },
        [_, extra, ..] => return Err(ExpandError::CompletionArity(extra.span())),
    };

    let mut forwarded = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let FnArg::Typed(param) = input else {
            return Err(ExpandError::HasReceiver(input.span()));
        };
        let Pat::Ident(name) = param.pat.as_ref() else {
            return Err(ExpandError::UnsupportedParameter(param.pat.span()));
        };
        forwarded.push(name.ident.clone());
    }

    Ok((
        func,
        AsyncSignature {
            retained: inputs,
            forwarded,
            callback,
        },
    ))
}

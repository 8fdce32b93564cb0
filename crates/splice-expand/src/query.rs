//! Typed down-casts and child extraction over `syn` trees.
//!
//! Engines match on node kinds exhaustively; these helpers cover the handful
//! of multi-step extractions several engines share.

use syn::punctuated::Punctuated;
use syn::{
    Expr, ExprLit, GenericArgument, Lit, LitStr, PathArguments, ReturnType, Token, Type,
    TypeParamBound,
};

/// First argument expression of a freestanding invocation, if any.
pub fn first_argument(args: &Punctuated<Expr, Token![,]>) -> Option<&Expr> {
    args.first()
}

/// Down-cast an expression to a plain string literal.
///
/// Anything that is not a literal string token (method calls, `concat!`,
/// byte strings) yields `None`.
pub fn string_literal(expr: &Expr) -> Option<&LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Some(lit),
        Expr::Group(group) => string_literal(&group.expr),
        _ => None,
    }
}

/// Argument and return shape of a callback-typed parameter.
pub struct CallbackShape<'a> {
    /// Parameter types the callback is invoked with, in order.
    pub inputs: Vec<&'a Type>,
    pub output: &'a ReturnType,
}

/// Extract the callback signature from a parameter type.
///
/// Recognizes `impl Fn(..)` / `FnMut` / `FnOnce`, whatever extra bounds ride
/// along. Bare `fn(..)` pointers are not callbacks here: they cannot accept
/// the capturing closure the rewrite synthesizes.
pub fn callback_shape(ty: &Type) -> Option<CallbackShape<'_>> {
    match ty {
        Type::Paren(inner) => callback_shape(&inner.elem),
        Type::ImplTrait(impl_trait) => impl_trait.bounds.iter().find_map(|bound| {
            let TypeParamBound::Trait(bound) = bound else {
                return None;
            };
            let segment = bound.path.segments.last()?;
            if !matches!(segment.ident.to_string().as_str(), "Fn" | "FnMut" | "FnOnce") {
                return None;
            }
            let PathArguments::Parenthesized(args) = &segment.arguments else {
                return None;
            };
            Some(CallbackShape {
                inputs: args.inputs.iter().collect(),
                output: &args.output,
            })
        }),
        _ => None,
    }
}

/// Split a `Result<V, E>` type path into its payload and error types.
///
/// The outer segment is matched by name, so any two-argument type spelled
/// `Result` qualifies.
pub fn result_arguments(ty: &Type) -> Option<(&Type, &Type)> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    match (types.next(), types.next(), types.next()) {
        (Some(ok), Some(err), None) => Some((ok, err)),
        _ => None,
    }
}

/// Whether a return type is void: absent, or the empty tuple.
pub fn returns_unit(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => true,
        ReturnType::Type(_, ty) => matches!(ty.as_ref(), Type::Tuple(tuple) if tuple.elems.is_empty()),
    }
}

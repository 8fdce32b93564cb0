use proc_macro2::Span;

pub type Result<T, E = ExpandError> = std::result::Result<T, E>;

/// Diagnostic raised when an expansion rejects its invocation site.
///
/// Each variant carries the span the diagnostic is pinned to; the `Display`
/// text is the stable message surfaced to the user. An expansion either fully
/// succeeds or raises exactly one of these; there is no partial output.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// The entry point's parse guarantees argument shape, so reaching this
    /// means the binding between entry and engine is broken, not user code.
    #[error("internal error: expansion invoked without its required argument")]
    MalformedInvocation(Span),
    #[error("four_character_code! needs a static string literal")]
    NeedsStaticString(Span),
    #[error("invalid four-character code")]
    InvalidCode(Span),
    #[error("#[add_async] only works on functions")]
    NotAFunction(Span),
    #[error("#[add_async] requires a non-async function")]
    AlreadyAsync(Span),
    #[error("#[add_async] requires a function that returns ()")]
    MustReturnVoid(Span),
    #[error("#[add_async] requires a function with a completion handler as its last parameter")]
    MissingCompletionHandler(Span),
    #[error("#[add_async] requires a completion handler that returns ()")]
    CompletionMustReturnVoid(Span),
    #[error("#[add_async] does not support methods that take self")]
    HasReceiver(Span),
    #[error("#[add_async] parameters must bind simple identifiers")]
    UnsupportedParameter(Span),
    #[error("#[add_async] completion handlers take at most one argument")]
    CompletionArity(Span),
}

impl ExpandError {
    pub fn span(&self) -> Span {
        match self {
            Self::MalformedInvocation(span)
            | Self::NeedsStaticString(span)
            | Self::InvalidCode(span)
            | Self::NotAFunction(span)
            | Self::AlreadyAsync(span)
            | Self::MustReturnVoid(span)
            | Self::MissingCompletionHandler(span)
            | Self::CompletionMustReturnVoid(span)
            | Self::HasReceiver(span)
            | Self::UnsupportedParameter(span)
            | Self::CompletionArity(span) => *span,
        }
    }
}

impl From<ExpandError> for syn::Error {
    fn from(err: ExpandError) -> Self {
        syn::Error::new(err.span(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        let err = ExpandError::NeedsStaticString(Span::call_site());
        assert_eq!(
            err.to_string(),
            "four_character_code! needs a static string literal"
        );
        let err = ExpandError::AlreadyAsync(Span::call_site());
        assert_eq!(err.to_string(), "#[add_async] requires a non-async function");
    }

    #[test]
    fn converts_into_syn_error() {
        let err = syn::Error::from(ExpandError::InvalidCode(Span::call_site()));
        assert_eq!(err.to_string(), "invalid four-character code");
    }
}

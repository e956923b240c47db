use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum FormulaError {
    #[diagnostic(help("a formula needs at least one element, like H2O or NaCl"))]
    #[error("cannot parse an empty formula")]
    Empty,

    #[diagnostic(help("element symbols are case-sensitive, so double-check for typos, like CL instead of Cl"))]
    #[error("the element in {token:?} could not be found in the element table (while parsing {input:?})")]
    UnknownElement {
        token: String,
        #[source_code]
        input: String,
        #[label("element not found")]
        span: SourceSpan,
    },

    #[diagnostic(help(
        "a formula is a run of element symbols (one uppercase letter, optionally followed by a lowercase one), each \
         with an optional count, like C6H12O6"
    ))]
    #[error("expected an element symbol, but found {token:?} (while parsing {input:?})")]
    MalformedToken {
        token: String,
        #[source_code]
        input: String,
        #[label("couldn't parse this")]
        span: SourceSpan,
    },

    #[diagnostic(help("leave the element out of the formula instead of giving it a count of zero"))]
    #[error("the count in {token:?} must be at least one (while parsing {input:?})")]
    ZeroCount {
        token: String,
        #[source_code]
        input: String,
        #[label("zero count")]
        span: SourceSpan,
    },

    #[diagnostic(help("modifications start with + (to add atoms) or - (to remove them), like +H or -H2O"))]
    #[error("expected a modification starting with + or -, but found {input:?}")]
    MissingOffsetKind {
        #[source_code]
        input: String,
        #[label("expected + or - here")]
        span: SourceSpan,
    },
}

impl FormulaError {
    pub(crate) fn unknown_element(input: &str, token: &str, offset: usize) -> Self {
        let (token, span) = Self::token_and_span(token, offset);
        Self::UnknownElement {
            token,
            input: input.to_owned(),
            span,
        }
    }

    pub(crate) fn malformed_token(input: &str, token: &str, offset: usize) -> Self {
        let (token, span) = Self::token_and_span(token, offset);
        Self::MalformedToken {
            token,
            input: input.to_owned(),
            span,
        }
    }

    pub(crate) fn zero_count(input: &str, token: &str, offset: usize) -> Self {
        let (token, span) = Self::token_and_span(token, offset);
        Self::ZeroCount {
            token,
            input: input.to_owned(),
            span,
        }
    }

    pub(crate) fn missing_offset_kind(input: &str) -> Self {
        // NOTE: Points at the first character, or just past the end of an empty input
        let span = (0, input.chars().next().map_or(0, char::len_utf8)).into();
        Self::MissingOffsetKind {
            input: input.to_owned(),
            span,
        }
    }

    fn token_and_span(token: &str, offset: usize) -> (String, SourceSpan) {
        (token.to_owned(), (offset, token.len()).into())
    }
}

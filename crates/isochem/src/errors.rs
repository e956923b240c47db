use miette::Diagnostic;
use thiserror::Error;

use crate::{
    adducts::errors::ModificationError,
    atoms::errors::{AtomicLookupError, CompositionError},
    envelope::errors::EnvelopeError,
    parsers::errors::FormulaError,
};

pub type Result<T, E = IsochemError> = std::result::Result<T, E>;

// NOTE: Every fallible public function returns its own, narrower error type. This enum just lets callers that touch
// several layers (like the `molmass` REPL) use `?` across all of them
#[derive(Debug, Diagnostic, Clone, PartialEq, Error)]
pub enum IsochemError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    AtomicLookup(#[from] AtomicLookupError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Composition(#[from] CompositionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Modification(#[from] ModificationError),
}

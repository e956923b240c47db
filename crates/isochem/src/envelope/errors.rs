use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum EnvelopeError {
    #[diagnostic(help("an envelope needs at least one atom to describe"))]
    #[error("cannot compute the isotopic envelope of an empty composition")]
    EmptyComposition,

    #[diagnostic(help("request at least one peak, like the monoisotopic peak alone"))]
    #[error("cannot compute an isotopic envelope with zero peaks")]
    NoPeaks,
}

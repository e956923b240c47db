use miette::Diagnostic;
use thiserror::Error;

use crate::{ChemicalModification, Compound, atoms::errors::CompositionError};

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
#[error("the modification {symbol} cannot be applied to {compound}")]
#[diagnostic(help(
    "subtractions only work when every atom they remove is present, including atoms added by earlier modifications"
))]
pub struct ModificationError {
    symbol: String,
    compound: String,
    #[source]
    #[diagnostic_source]
    cause: CompositionError,
}

impl ModificationError {
    pub(crate) fn new(
        modification: &ChemicalModification,
        compound: &Compound,
        cause: CompositionError,
    ) -> Self {
        Self {
            symbol: modification.symbol(),
            compound: compound.name().to_owned(),
            cause,
        }
    }

    /// The symbol of the modification that couldn't be applied, like `-H2O`
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The name of the compound the failed adduct was built from
    #[must_use]
    pub fn compound(&self) -> &str {
        &self.compound
    }

    #[must_use]
    pub const fn cause(&self) -> &CompositionError {
        &self.cause
    }
}

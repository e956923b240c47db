use miette::Diagnostic;
use thiserror::Error;

use crate::{Count, Element};

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum AtomicLookupError {
    #[diagnostic(help("element symbols are case-sensitive, so double-check for typos, like CL instead of Cl"))]
    #[error("the element {0:?} could not be found in the element table")]
    Element(String),
}

impl AtomicLookupError {
    pub(crate) fn element(symbol: &str) -> Self {
        Self::Element(symbol.to_owned())
    }
}

// NOTE: Public so that the modification layer can report *why* a subtraction wasn't possible
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum CompositionError {
    #[diagnostic(help("a formula can only lose atoms that it already contains"))]
    #[error("cannot remove {requested} {symbol} from a formula that contains none")]
    Missing { symbol: String, requested: u32 },

    #[diagnostic(help("a formula can only lose atoms that it already contains"))]
    #[error("cannot remove {requested} {symbol} from a formula that only contains {available}")]
    Insufficient {
        symbol: String,
        available: u32,
        requested: u32,
    },
}

impl CompositionError {
    pub(crate) fn missing(element: &Element, requested: Count) -> Self {
        let symbol = element.symbol().to_owned();
        let requested = requested.get();

        Self::Missing { symbol, requested }
    }

    pub(crate) fn insufficient(element: &Element, available: Count, requested: Count) -> Self {
        let symbol = element.symbol().to_owned();
        let available = available.get();
        let requested = requested.get();

        Self::Insufficient {
            symbol,
            available,
            requested,
        }
    }
}

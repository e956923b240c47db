pub(crate) mod chemical_formula;
pub mod errors;
pub(crate) mod modification;
pub mod primitives;

use crate::{ElementCounts, OffsetKind};

use errors::FormulaError;

/// Parses formula text, like `C6H12O6` or `NaCl`, into an element-count map
///
/// # Errors
///
/// Returns a [`FormulaError`] for empty input, unknown element symbols, zero counts, or anything that isn't an
/// element symbol followed by an optional count.
pub fn parse_formula(text: &str) -> Result<ElementCounts, FormulaError> {
    chemical_formula::chemical_formula(text, text)
}

/// Parses a signed formula, like `+H2O` or `-NH3`, into the direction and composition of a formula offset
///
/// # Errors
///
/// Returns a [`FormulaError`] if `text` doesn't start with `+` or `-`, or if the rest isn't a valid formula.
pub fn parse_modification(text: &str) -> Result<(OffsetKind, ElementCounts), FormulaError> {
    modification::modification(text).map(|(kind, _, counts)| (kind, counts))
}

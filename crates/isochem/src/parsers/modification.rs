use super::{chemical_formula::chemical_formula, errors::FormulaError, primitives::offset_kind};
use crate::{ElementCounts, OffsetKind};

/// Modification = Offset Kind , Formula ;
///
/// Returns the formula text (without its sign) alongside the parsed offset, so that callers can reuse it for display
pub fn modification(input: &str) -> Result<(OffsetKind, &str, ElementCounts), FormulaError> {
    let (formula, kind) = offset_kind(input).map_err(|_| FormulaError::missing_offset_kind(input))?;
    let counts = chemical_formula(input, formula)?;
    Ok((kind, formula, counts))
}

use std::fmt::{self, Display, Formatter};

use crate::{ChemicalFormula, Compound, Massive, parsers::errors::FormulaError};

impl Compound {
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if `formula` isn't a valid formula.
    pub fn new(name: impl Into<String>, formula: impl AsRef<str>) -> Result<Self, FormulaError> {
        let name = name.into();
        let formula = ChemicalFormula::new(formula)?;
        Ok(Self { name, formula })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn formula(&self) -> &ChemicalFormula {
        &self.formula
    }
}

impl Display for Compound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formula)
    }
}

impl Massive for Compound {
    fn monoisotopic_mass(&self) -> f64 {
        self.formula.monoisotopic_mass()
    }

    fn average_mass(&self) -> f64 {
        self.formula.average_mass()
    }
}

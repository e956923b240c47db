use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

// External Crate Imports
use tracing::trace;

// Local Crate Imports
use super::errors::ModificationError;
use crate::{
    Adduct, ChemicalFormula, ChemicalModification, OffsetKind, atoms::errors::CompositionError,
    parsers::{errors::FormulaError, modification::modification},
};

// Public API ==========================================================================================================

impl ChemicalModification {
    /// A modification that adds the atoms of `formula`, and can always be performed
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if `formula` isn't a valid formula.
    pub fn addition(formula: impl AsRef<str>) -> Result<Self, FormulaError> {
        let formula = ChemicalFormula::new(formula)?;
        Ok(Self::new(OffsetKind::Add, formula))
    }

    /// A modification that removes the atoms of `formula`, and can only be performed on formulae containing them
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if `formula` isn't a valid formula.
    pub fn subtraction(formula: impl AsRef<str>) -> Result<Self, FormulaError> {
        let formula = ChemicalFormula::new(formula)?;
        Ok(Self::new(OffsetKind::Remove, formula))
    }

    #[must_use]
    pub const fn new(kind: OffsetKind, formula: ChemicalFormula) -> Self {
        Self { kind, formula }
    }

    #[must_use]
    pub const fn kind(&self) -> OffsetKind {
        self.kind
    }

    #[must_use]
    pub const fn formula(&self) -> &ChemicalFormula {
        &self.formula
    }

    /// The sign of this modification followed by its formula, like `+H2O`
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}{}", self.kind, self.formula_text())
    }

    /// A readable description, like `Addition of H2O`
    #[must_use]
    pub fn name(&self) -> String {
        let verb = match self.kind {
            OffsetKind::Add => "Addition",
            OffsetKind::Remove => "Subtraction",
        };
        format!("{verb} of {}", self.formula_text())
    }

    /// Whether this modification could be applied to `adduct`, without changing it
    #[must_use]
    pub fn can_perform(&self, adduct: &Adduct) -> bool {
        self.check(adduct).is_ok()
    }

    /// Replaces the formula of `adduct` with a modified one, and records this modification in its history
    ///
    /// # Errors
    ///
    /// Fails, leaving `adduct` untouched, if this is a subtraction of atoms that `adduct` doesn't have.
    pub fn perform(&self, adduct: &mut Adduct) -> Result<(), ModificationError> {
        let counts = self.formula.counts();
        let formula = match self.kind {
            OffsetKind::Add => adduct.formula.with_addition(counts),
            OffsetKind::Remove => adduct
                .formula
                .with_subtraction(counts)
                .map_err(|cause| ModificationError::new(self, adduct.compound, cause))?,
        };

        trace!(
            modification = %self,
            compound = adduct.compound.name(),
            formula = %formula.counts(),
            "performed modification"
        );
        adduct.formula = formula;
        adduct.modifications.push(self.clone());
        Ok(())
    }
}

impl FromStr for ChemicalModification {
    type Err = FormulaError;

    /// Parses a signed formula, like `+Na` or `-H2O`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, text, counts) = modification(s)?;
        Ok(Self::new(kind, ChemicalFormula::with_text(text, counts)))
    }
}

impl Display for ChemicalModification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Private Helper Methods ==============================================================================================

impl ChemicalModification {
    pub(crate) fn check(&self, adduct: &Adduct) -> Result<(), CompositionError> {
        match self.kind {
            OffsetKind::Add => Ok(()),
            OffsetKind::Remove => adduct
                .formula
                .counts()
                .subtracted(self.formula.counts())
                .map(drop),
        }
    }

    fn formula_text(&self) -> String {
        self.formula
            .text()
            .map_or_else(|| self.formula.counts().to_string(), ToOwned::to_owned)
    }
}

// Module Tests ========================================================================================================

use std::fmt::{self, Display, Formatter};

// External Crate Imports
use tracing::debug;

// Local Crate Imports
use super::errors::ModificationError;
use crate::{Adduct, ChemicalFormula, ChemicalModification, Compound, Massive};

// Public API ==========================================================================================================

impl<'c> Adduct<'c> {
    /// Applies `modifications` to `compound`, in order
    ///
    /// Every modification is checked against the formula left by the ones before it, so a subtraction can remove
    /// atoms added by an earlier addition.
    ///
    /// # Errors
    ///
    /// Fails as soon as any modification can't be performed. No partially modified adduct is ever returned.
    pub fn new(
        compound: &'c Compound,
        modifications: impl IntoIterator<Item = ChemicalModification>,
    ) -> Result<Self, ModificationError> {
        let mut adduct = Self {
            compound,
            formula: compound.formula().clone(),
            modifications: Vec::new(),
        };

        for modification in modifications {
            modification
                .check(&adduct)
                .map_err(|cause| ModificationError::new(&modification, compound, cause))?;
            modification.perform(&mut adduct)?;
        }

        debug!(adduct = %adduct, formula = %adduct.formula.counts(), "built adduct");
        Ok(adduct)
    }

    #[must_use]
    pub const fn compound(&self) -> &'c Compound {
        self.compound
    }

    /// The formula of the compound after every modification has been applied
    #[must_use]
    pub const fn formula(&self) -> &ChemicalFormula {
        &self.formula
    }

    /// Every applied modification, in the order they were applied
    #[must_use]
    pub fn modifications(&self) -> &[ChemicalModification] {
        &self.modifications
    }

    /// The symbols of every modification, like `[M +H -H2O]`
    #[must_use]
    pub fn ion_type_string(&self) -> String {
        let symbols: String = self
            .modifications
            .iter()
            .map(|m| format!(" {}", m.symbol()))
            .collect();
        format!("[M{symbols}]")
    }

    /// The compound name and ion type, like `Glucose:[M +H -H2O]`
    #[must_use]
    pub fn compound_and_ion_type_string(&self) -> String {
        format!("{}:{}", self.compound.name(), self.ion_type_string())
    }
}

impl Display for Adduct<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compound_and_ion_type_string())
    }
}

impl Massive for Adduct<'_> {
    fn monoisotopic_mass(&self) -> f64 {
        self.formula.monoisotopic_mass()
    }

    fn average_mass(&self) -> f64 {
        self.formula.average_mass()
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use rayon::prelude::*;

    use crate::{
        DEFAULT_PEAK_COUNT, ElementCounts,
        catalog::{PROTONATION, SODIATION, WATER_LOSS},
        testing_tools::assert_close,
    };

    use super::*;

    fn standard(symbol: &str) -> ChemicalModification {
        ChemicalModification::standard(symbol).unwrap()
    }

    #[test]
    fn unmodified_adduct() {
        let glucose = Compound::new("Glucose", "C6H12O6").unwrap();
        let adduct = Adduct::new(&glucose, []).unwrap();
        assert_eq!(adduct.ion_type_string(), "[M]");
        assert_eq!(adduct.compound_and_ion_type_string(), "Glucose:[M]");
        assert_eq!(adduct.formula(), glucose.formula());
        assert!(std::ptr::eq(adduct.compound(), &glucose));
    }

    #[test]
    fn protonated_water_loss() {
        let glucose = Compound::new("Glucose", "C6H12O6").unwrap();
        let adduct = Adduct::new(&glucose, [standard(PROTONATION), standard(WATER_LOSS)]).unwrap();
        assert_eq!(adduct.ion_type_string(), "[M +H -H2O]");
        assert_eq!(adduct.compound_and_ion_type_string(), "Glucose:[M +H -H2O]");
        assert_snapshot!(adduct, @"Glucose:[M +H -H2O]");
        assert_eq!(adduct.formula().counts(), &"C6H11O5".parse::<ElementCounts>().unwrap());
        let symbols: Vec<_> = adduct.modifications().iter().map(ChemicalModification::symbol).collect();
        assert_eq!(symbols, ["+H", "-H2O"]);
        // The base compound is never touched
        assert_eq!(glucose.formula().counts(), &"C6H12O6".parse::<ElementCounts>().unwrap());
        // Masses follow the modified formula
        let proton_mass = 1.00782503207;
        let water_mass = 18.0105646837;
        assert_close!(
            adduct.monoisotopic_mass(),
            glucose.monoisotopic_mass() + proton_mass - water_mass,
            1e-8
        );
        assert_eq!(adduct.formula().envelope(DEFAULT_PEAK_COUNT).unwrap().len(), 3);
    }

    #[test]
    fn later_modifications_see_earlier_ones() {
        // Sodium can only be removed after it's been added
        let salt = Compound::new("Salt", "NaCl").unwrap();
        let sodium_loss = ChemicalModification::subtraction("Na2").unwrap();
        let adduct = Adduct::new(&salt, [standard(SODIATION), sodium_loss.clone()]).unwrap();
        assert_eq!(adduct.formula().counts().to_string(), "Cl");
        assert_eq!(adduct.ion_type_string(), "[M +Na -Na2]");
        assert!(Adduct::new(&salt, [sodium_loss, standard(SODIATION)]).is_err());
    }

    #[test]
    fn construction_is_all_or_nothing() {
        let methanol = Compound::new("Methanol", "CH4O").unwrap();
        let error = Adduct::new(
            &methanol,
            [
                standard(PROTONATION),
                standard(WATER_LOSS),
                ChemicalModification::subtraction("O").unwrap(),
            ],
        )
        .unwrap_err();
        assert_snapshot!(error, @"the modification -O cannot be applied to Methanol");
        assert_snapshot!(error.cause(), @"cannot remove 1 O from a formula that contains none");
        assert_eq!(methanol.formula().counts().to_string(), "CH4O");

        let water = Compound::new("Water", "H2O").unwrap();
        let error = Adduct::new(&water, [ChemicalModification::subtraction("H3").unwrap()]).unwrap_err();
        assert_snapshot!(error.cause(), @"cannot remove 3 H from a formula that only contains 2");
    }

    #[test]
    fn adducts_in_parallel() {
        let compounds: Vec<_> = [("Glucose", "C6H12O6"), ("Water", "H2O"), ("Salt", "NaCl"), ("Methane", "CH4")]
            .into_iter()
            .map(|(name, formula)| Compound::new(name, formula).unwrap())
            .collect();
        let expected: Vec<_> = compounds
            .iter()
            .map(|compound| {
                let adduct = Adduct::new(compound, [standard(PROTONATION), standard(WATER_LOSS)]);
                adduct.map(|a| a.monoisotopic_mass())
            })
            .collect();

        // Each task owns its compound, so adducts are built and dropped on the same thread
        let masses: Vec<_> = compounds
            .into_par_iter()
            .map(|compound| {
                let adduct = Adduct::new(&compound, [standard(PROTONATION), standard(WATER_LOSS)]);
                adduct.map(|a| a.monoisotopic_mass())
            })
            .collect();
        assert_eq!(masses, expected);
        assert!(masses[0].is_ok());
        assert!(masses[3].is_err());
    }
}

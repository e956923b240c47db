//! Common ion-forming modifications, by symbol
//!
//! ```
//! use isochem::{Adduct, ChemicalModification, Compound, catalog::PROTONATION};
//!
//! let glucose = Compound::new("Glucose", "C6H12O6").unwrap();
//! let protonation = ChemicalModification::standard(PROTONATION).unwrap();
//! let adduct = Adduct::new(&glucose, [protonation]).unwrap();
//! assert_eq!(adduct.to_string(), "Glucose:[M +H]");
//! ```

use crate::ChemicalModification;

pub const PROTONATION: &str = "+H";
pub const DEPROTONATION: &str = "-H";
pub const SODIATION: &str = "+Na";
pub const POTASSIATION: &str = "+K";
pub const AMMONIATION: &str = "+NH4";
pub const WATER_LOSS: &str = "-H2O";
pub const AMMONIA_LOSS: &str = "-NH3";

/// Every modification in the catalog, alongside a short description
pub const STANDARD_MODIFICATIONS: [(&str, &str); 7] = [
    (PROTONATION, "protonation"),
    (DEPROTONATION, "deprotonation"),
    (SODIATION, "sodium adduct"),
    (POTASSIATION, "potassium adduct"),
    (AMMONIATION, "ammonium adduct"),
    (WATER_LOSS, "loss of water"),
    (AMMONIA_LOSS, "loss of ammonia"),
];

impl ChemicalModification {
    /// Looks up one of the [`STANDARD_MODIFICATIONS`] by its symbol, like `+Na` or `-H2O`
    #[must_use]
    pub fn standard(symbol: &str) -> Option<Self> {
        STANDARD_MODIFICATIONS
            .iter()
            .find(|&&(standard, _)| standard == symbol)
            .and_then(|(standard, _)| standard.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use crate::OffsetKind;

    use super::*;

    #[test]
    fn every_standard_modification_parses() {
        for (symbol, _) in STANDARD_MODIFICATIONS {
            let modification = ChemicalModification::standard(symbol).unwrap();
            assert_eq!(modification.symbol(), symbol);
        }
    }

    #[test]
    fn lookup_standard_modifications() {
        let sodiation = ChemicalModification::standard(SODIATION).unwrap();
        assert_eq!(sodiation.kind(), OffsetKind::Add);
        assert_eq!(sodiation.name(), "Addition of Na");
        let ammonia_loss = ChemicalModification::standard("-NH3").unwrap();
        assert_eq!(ammonia_loss.kind(), OffsetKind::Remove);
        assert_eq!(ammonia_loss.name(), "Subtraction of NH3");
        // Anything else isn't in the catalog, even if it's a valid modification
        assert_eq!(ChemicalModification::standard("+Li"), None);
        assert_eq!(ChemicalModification::standard("Na"), None);
    }
}

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use crate::{ATOMIC_DB, Element, Envelope, Isotope, Massive};

use super::errors::AtomicLookupError;

impl Isotope {
    #[must_use]
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub const fn abundance(&self) -> f64 {
        self.abundance
    }

    /// Padding slots stand in for mass numbers without a naturally occurring isotope
    // NOTE: Padding is written as a literal `0.0` in the element table, so exact comparison is correct here
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.abundance == 0.0
    }
}

impl Element {
    /// Looks up an element by its (case-sensitive) symbol in the process-wide element table
    ///
    /// # Errors
    ///
    /// Returns [`AtomicLookupError::Element`] if no element has that symbol.
    pub fn new(symbol: impl AsRef<str>) -> Result<&'static Self, AtomicLookupError> {
        ATOMIC_DB.element(symbol)
    }

    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    #[must_use]
    pub const fn isotopes(&self) -> &'static [Isotope] {
        self.isotopes
    }

    /// The isotope `offset` nucleons heavier than the monoisotopic one, or a zeroed padding slot past the end of the
    /// element's known isotopes
    #[must_use]
    pub fn isotope(&self, offset: usize) -> Isotope {
        self.isotopes.get(offset).copied().unwrap_or_default()
    }

    /// This element's own isotope distribution, truncated or zero-padded to `peaks` slots
    #[must_use]
    pub fn distribution(&self, peaks: usize) -> Envelope {
        Envelope::for_element(self, peaks)
    }

    #[cfg(test)]
    #[allow(clippy::float_cmp)]
    pub(crate) fn is_well_formed(&self) -> bool {
        let Some(monoisotope) = self.isotopes.first() else {
            return false;
        };
        let total_abundance: f64 = self.isotopes.iter().map(Isotope::abundance).sum();
        let mut symbol = self.symbol.chars();
        let well_formed_symbol = symbol.next().is_some_and(|c| c.is_ascii_uppercase())
            && symbol.next().is_none_or(|c| c.is_ascii_lowercase())
            && symbol.next().is_none();

        well_formed_symbol
            && !monoisotope.is_padding()
            && monoisotope.mass > 0.0
            && self.average_mass > 0.0
            && total_abundance <= 1.0 + 1e-9
            && self.isotopes.iter().all(|i| {
                (0.0..=1.0).contains(&i.abundance) && (i.is_padding() == (i.mass == 0.0))
            })
            && self
                .isotopes
                .iter()
                .filter(|i| !i.is_padding())
                .map(Isotope::mass)
                .is_sorted()
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl Massive for Element {
    fn monoisotopic_mass(&self) -> f64 {
        self.isotope(0).mass
    }

    fn average_mass(&self) -> f64 {
        self.average_mass
    }
}

// NOTE: Symbols are unique within the element table, so they're all that's needed to identify an element

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol.cmp(other.symbol)
    }
}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use insta::{assert_debug_snapshot, assert_snapshot};
    use miette::Diagnostic;

    use crate::testing_tools::assert_close;

    use super::*;

    #[test]
    fn new_element() {
        // Sucessfully lookup elements that exist
        let carbon = Element::new("C").unwrap();
        assert_eq!(carbon.symbol(), "C");
        assert_eq!(carbon.name(), "Carbon");
        assert_eq!(carbon.atomic_number(), 6);
        assert_debug_snapshot!(carbon.isotopes(), @r"
        [
            Isotope {
                mass: 12.0,
                abundance: 0.9893,
            },
            Isotope {
                mass: 13.0033548378,
                abundance: 0.0107,
            },
        ]
        ");
        // Fail to lookup elements that don't exist
        let error = Element::new("R").unwrap_err();
        assert_eq!(error, AtomicLookupError::Element("R".to_owned()));
        assert_snapshot!(error, @r#"the element "R" could not be found in the element table"#);
        assert_snapshot!(
            error.help().unwrap(),
            @"element symbols are case-sensitive, so double-check for typos, like CL instead of Cl"
        );
    }

    #[test]
    fn padded_isotopes() {
        let chlorine = Element::new("Cl").unwrap();
        assert_close!(chlorine.isotope(0).mass(), 34.96885268);
        assert!(chlorine.isotope(1).is_padding());
        assert_eq!(chlorine.isotope(1), Isotope::default());
        assert_close!(chlorine.isotope(2).abundance(), 0.2422);
        // Past the end of the table, everything is padding
        assert!(chlorine.isotope(3).is_padding());
        assert!(chlorine.isotope(100).is_padding());
        let sodium = Element::new("Na").unwrap();
        assert!(sodium.isotope(1).is_padding());
        assert_close!(sodium.isotope(0).abundance(), 1.0);
    }

    #[test]
    fn element_display() {
        let c = Element::new("C").unwrap();
        assert_eq!(c.to_string(), "C");
        let th = Element::new("Th").unwrap();
        assert_eq!(th.to_string(), "Th");
    }

    #[test]
    fn element_identity() {
        let c = Element::new("C").unwrap();
        let cl = Element::new("Cl").unwrap();
        let h = Element::new("H").unwrap();
        assert_eq!(c, Element::new("C").unwrap());
        assert_ne!(c, cl);
        // Ordered alphabetically by symbol, not by atomic number
        let mut elements = vec![h, cl, c];
        elements.sort();
        assert_eq!(elements, vec![c, cl, h]);
    }

    #[test]
    fn element_masses() {
        let c = Element::new("C").unwrap();
        assert_close!(c.monoisotopic_mass(), 12.0);
        assert_close!(c.average_mass(), 12.0107);
        let mg = Element::new("Mg").unwrap();
        assert_close!(mg.monoisotopic_mass(), 23.9850417);
        assert_close!(mg.average_mass(), 24.305);
        // Elements without stable isotopes use their longest-lived one
        let tc = Element::new("Tc").unwrap();
        assert_close!(tc.monoisotopic_mass(), 97.907216);
        assert_close!(tc.average_mass(), 98.0);
        assert_close!(tc.isotope(0).abundance(), 1.0);
    }
}

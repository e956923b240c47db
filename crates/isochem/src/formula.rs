use std::{
    cell::RefCell,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

// Local Crate Imports
use crate::{
    ChemicalFormula, ElementCounts, Envelope, Massive, atoms::errors::CompositionError, compute_envelope,
    envelope::errors::EnvelopeError, parse_formula, parsers::errors::FormulaError,
};

// Public API ==========================================================================================================

impl ChemicalFormula {
    /// Parses `text` into a formula, keeping the original text around for display
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if `text` isn't a valid formula.
    pub fn new(text: impl AsRef<str>) -> Result<Self, FormulaError> {
        let text = text.as_ref();
        let counts = parse_formula(text)?;
        Ok(Self::with_text(text, counts))
    }

    /// A formula without any original text, which displays as its Hill formula
    #[must_use]
    pub fn from_counts(counts: ElementCounts) -> Self {
        Self::build(None, counts)
    }

    /// A formula with already-parsed `counts`, displayed as `text`
    pub(crate) fn with_text(text: &str, counts: ElementCounts) -> Self {
        Self::build(Some(text.to_owned()), counts)
    }

    #[must_use]
    pub const fn counts(&self) -> &ElementCounts {
        &self.counts
    }

    /// The text this formula was parsed from, if it was parsed at all
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The first `peaks` peaks of this formula's isotopic envelope
    ///
    /// The envelope is computed on first use and cached: later requests for the same number of peaks (or fewer) reuse
    /// it, while a request for more peaks computes a new envelope from scratch and replaces the cached one.
    ///
    /// # Errors
    ///
    /// Fails if `peaks` is zero, or if this formula has no atoms.
    pub fn envelope(&self, peaks: usize) -> Result<Envelope, EnvelopeError> {
        if peaks == 0 {
            return Err(EnvelopeError::NoPeaks);
        }

        if let Some(cached) = self.envelope.borrow().as_ref().filter(|e| e.len() >= peaks) {
            return Ok(cached.truncated(peaks));
        }

        let envelope = compute_envelope(&self.counts, peaks)?;
        self.envelope.replace(Some(envelope.clone()));
        Ok(envelope)
    }

    /// # Errors
    ///
    /// Fails for the same reasons as [`ChemicalFormula::envelope`].
    pub fn peak_masses(&self, peaks: usize) -> Result<Vec<f64>, EnvelopeError> {
        self.envelope(peaks).map(|e| e.masses().to_vec())
    }

    /// # Errors
    ///
    /// Fails for the same reasons as [`ChemicalFormula::envelope`].
    pub fn peak_probabilities(&self, peaks: usize) -> Result<Vec<f64>, EnvelopeError> {
        self.envelope(peaks).map(|e| e.probabilities().to_vec())
    }

    /// The number of peaks in the cached envelope, or `None` if no envelope has been computed yet
    #[must_use]
    pub fn cached_peaks(&self) -> Option<usize> {
        self.envelope.borrow().as_ref().map(Envelope::len)
    }

    /// A new formula with every atom of `other` added to this one
    ///
    /// Never fails. Any per-element count that would overflow a `u32` is clamped to [`Count::MAX`](crate::Count::MAX)
    /// and logged as a warning (see [`ElementCounts::added`]).
    #[must_use]
    pub fn with_addition(&self, other: &ElementCounts) -> Self {
        Self::from_counts(self.counts.added(other))
    }

    /// A new formula with every atom of `other` removed from this one
    ///
    /// # Errors
    ///
    /// Fails, leaving nothing half-done, if this formula lacks any of the atoms being removed.
    pub fn with_subtraction(&self, other: &ElementCounts) -> Result<Self, CompositionError> {
        self.counts.subtracted(other).map(Self::from_counts)
    }
}

impl FromStr for ChemicalFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Massive, Display, and PartialEq Trait Implementations ===============================================================

impl Massive for ChemicalFormula {
    fn monoisotopic_mass(&self) -> f64 {
        self.monoisotopic_mass
    }

    fn average_mass(&self) -> f64 {
        self.counts.average_mass()
    }
}

impl Display for ChemicalFormula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            write!(f, "{text}")?;
        } else {
            write!(f, "{}", self.counts)?;
        }
        write!(f, " ({:.6})", self.monoisotopic_mass)?;

        if let Some(envelope) = self.envelope.borrow().as_ref() {
            write!(f, ": {envelope}")?;
        }

        Ok(())
    }
}

impl PartialEq for ChemicalFormula {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

// Private Helper Methods ==============================================================================================

impl ChemicalFormula {
    fn build(text: Option<String>, counts: ElementCounts) -> Self {
        let monoisotopic_mass = counts.monoisotopic_mass();
        Self {
            text,
            counts,
            monoisotopic_mass,
            envelope: RefCell::new(None),
        }
    }
}

// Module Tests ========================================================================================================

//! Isotopic envelopes, built by convolving the isotope distribution of every atom in a composition, one atom at a time
//!
//! Each atom is treated as a distribution over how many extra nucleons it contributes. Combining a running
//! distribution `(fm, fp)` with an atom's distribution `(gm, gp)` gives, for every peak `k`:
//!
//! ```text
//! hp(k) = Σ gp(i) · fp(k - i)
//! hm(k) = Σ gp(i) · fp(k - i) · (gm(i) + fm(k - i)) / hp(k)
//! ```
//!
//! Only the first few peaks are ever tracked, so probability that would land on heavier peaks is discarded and the
//! probabilities of an envelope can sum to less than one.

pub mod errors;

use std::fmt::{self, Display, Formatter};

// External Crate Imports
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, trace};

// Local Crate Imports
use crate::{Element, ElementCounts, Envelope};
use errors::EnvelopeError;

// Public API ==========================================================================================================

/// Computes the first `peaks` peaks of the isotopic envelope of `counts`
///
/// Atoms are convolved in alphabetical order of element symbol. A peak that no combination of isotopes can reach has
/// a probability of zero, and its mass is reported as zero too.
///
/// # Errors
///
/// Fails with [`EnvelopeError::EmptyComposition`] if `counts` has no atoms, and [`EnvelopeError::NoPeaks`] if
/// `peaks` is zero.
pub fn compute_envelope(counts: &ElementCounts, peaks: usize) -> Result<Envelope, EnvelopeError> {
    if peaks == 0 {
        return Err(EnvelopeError::NoPeaks);
    }

    let mut atoms = counts
        .iter()
        .flat_map(|(element, count)| std::iter::repeat_n(element, count.get() as usize));
    let first = atoms.next().ok_or(EnvelopeError::EmptyComposition)?;

    debug!(
        composition = %counts,
        atoms = counts.total_atoms(),
        peaks,
        "computing isotopic envelope"
    );
    let envelope = atoms.fold(Envelope::for_element(first, peaks), |envelope, atom| {
        envelope.convolve(atom)
    });
    trace!(composition = %counts, %envelope, "finished isotopic envelope");

    Ok(envelope)
}

/// Computes the envelopes of many compositions in parallel, returning results in the same order as `compositions`
pub fn compute_envelopes(
    compositions: &[ElementCounts],
    peaks: usize,
) -> Vec<Result<Envelope, EnvelopeError>> {
    debug!(
        compositions = compositions.len(),
        peaks, "computing isotopic envelopes in parallel"
    );
    compositions
        .par_iter()
        .map(|counts| compute_envelope(counts, peaks))
        .collect()
}

impl Envelope {
    /// A single atom of `element`: its own isotope distribution, truncated or zero-padded to `peaks` slots
    #[must_use]
    pub fn for_element(element: &Element, peaks: usize) -> Self {
        let (masses, probabilities) = (0..peaks)
            .map(|offset| {
                let isotope = element.isotope(offset);
                (isotope.mass(), isotope.abundance())
            })
            .unzip();

        Self {
            masses,
            probabilities,
        }
    }

    /// Combines this envelope with a single atom of `element`, keeping the same number of peaks
    #[must_use]
    pub fn convolve(&self, element: &Element) -> Self {
        let peaks = self.len();
        let atom = Self::for_element(element, peaks);
        trace!(element = element.symbol(), peaks, "convolving atom");

        let (masses, probabilities) = (0..peaks)
            .map(|k| {
                let (probability, weighted_mass) = (0..=k)
                    .map(|i| {
                        let (gm, gp) = (atom.masses[i], atom.probabilities[i]);
                        let (fm, fp) = (self.masses[k - i], self.probabilities[k - i]);
                        let p = gp * fp;
                        (p, p * (gm + fm))
                    })
                    .fold((0.0, 0.0), |(hp, hm), (p, m)| (hp + p, hm + m));

                // NOTE: Every term is a product of non-negative abundances, so only an exact zero is unreachable
                #[allow(clippy::float_cmp)]
                let unreachable = probability == 0.0;
                if unreachable {
                    trace!(peak = k, "unreachable peak, leaving its mass at zero");
                    (0.0, 0.0)
                } else {
                    (weighted_mass / probability, probability)
                }
            })
            .unzip();

        Self {
            masses,
            probabilities,
        }
    }

    /// The first `peaks` peaks of this envelope (or all of them, if there are fewer)
    #[must_use]
    pub fn truncated(&self, peaks: usize) -> Self {
        let peaks = peaks.min(self.len());
        Self {
            masses: self.masses[..peaks].to_vec(),
            probabilities: self.probabilities[..peaks].to_vec(),
        }
    }

    /// `(mass, probability)` pairs, from the monoisotopic peak upwards
    pub fn peaks(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.masses.iter().copied().zip(self.probabilities.iter().copied())
    }

    #[must_use]
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl Display for Envelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let peaks = self
            .peaks()
            .format_with(", ", |(mass, probability), f| {
                f(&format_args!("{mass:.6} ({probability:.4})"))
            });
        write!(f, "{peaks}")
    }
}

// Module Tests ========================================================================================================

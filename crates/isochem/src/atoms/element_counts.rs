use std::{
    collections::btree_map::{self, Entry},
    fmt::{self, Display, Formatter},
    str::FromStr,
};

// External Crate Imports
use tracing::warn;

// Local Crate Imports
use super::errors::CompositionError;
use crate::{Count, Element, ElementCounts, Massive, parse_formula, parsers::errors::FormulaError};

// Public API ==========================================================================================================

impl ElementCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count of `element`, returning its previous count (if it had one)
    pub fn insert(&mut self, element: &'static Element, count: Count) -> Option<Count> {
        self.0.insert(element, count)
    }

    #[must_use]
    pub fn get(&self, element: &Element) -> Option<Count> {
        self.0.get(element).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static Element, Count)> + '_ {
        self.0.iter().map(|(&element, &count)| (element, count))
    }

    /// The number of atoms in the composition (not the number of distinct elements)
    #[must_use]
    pub fn total_atoms(&self) -> u64 {
        self.0.values().map(|&c| u64::from(c.get())).sum()
    }

    /// The per-element sum of both compositions
    ///
    /// Never fails: a count that would overflow a `u32` is clamped to [`Count::MAX`], and a warning is logged.
    #[must_use]
    pub fn added(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        for (element, count) in other.iter() {
            sum.0
                .entry(element)
                .and_modify(|c| {
                    let current = *c;
                    *c = current.checked_add(count).unwrap_or_else(|| {
                        warn!(
                            element = element.symbol(),
                            left = current.get(),
                            right = count.get(),
                            "atom count overflowed, clamping to the largest possible count"
                        );
                        Count::MAX
                    });
                })
                .or_insert(count);
        }
        sum
    }

    /// Removes every atom of `other` from this composition, dropping elements whose count reaches zero
    ///
    /// # Errors
    ///
    /// Fails without producing a partial result if any element of `other` is absent from this composition
    /// ([`CompositionError::Missing`]), or present with a smaller count ([`CompositionError::Insufficient`]).
    pub fn subtracted(&self, other: &Self) -> Result<Self, CompositionError> {
        let mut difference = self.clone();
        for (element, requested) in other.iter() {
            let Entry::Occupied(mut entry) = difference.0.entry(element) else {
                return Err(CompositionError::missing(element, requested));
            };

            let available = *entry.get();
            match available.checked_sub(requested) {
                Some(Some(remaining)) => {
                    entry.insert(remaining);
                }
                Some(None) => {
                    entry.remove();
                }
                None => return Err(CompositionError::insufficient(element, available, requested)),
            }
        }
        Ok(difference)
    }
}

impl<'a> IntoIterator for &'a ElementCounts {
    type Item = (&'a &'static Element, &'a Count);
    type IntoIter = btree_map::Iter<'a, &'static Element, Count>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(&'static Element, Count)> for ElementCounts {
    // NOTE: Like `BTreeMap`, later entries for the same element replace earlier ones
    fn from_iter<T: IntoIterator<Item = (&'static Element, Count)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for ElementCounts {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

// Massive and Display Trait Implementations ===========================================================================

impl Massive for ElementCounts {
    fn monoisotopic_mass(&self) -> f64 {
        self.mass(Element::monoisotopic_mass)
    }

    fn average_mass(&self) -> f64 {
        self.mass(Element::average_mass)
    }
}

impl Display for ElementCounts {
    // NOTE: Writes the Hill formula: carbon first, then hydrogen, then everything else alphabetically. Without any
    // carbon, everything (hydrogen included) is alphabetical
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let carbon = self.iter().find(|(e, _)| e.symbol() == "C");
        let leading: Vec<_> = if carbon.is_some() {
            let hydrogen = self.iter().find(|(e, _)| e.symbol() == "H");
            carbon.into_iter().chain(hydrogen).collect()
        } else {
            Vec::new()
        };

        let rest = self
            .iter()
            .filter(|(e, _)| !leading.iter().any(|(l, _)| l == e));
        for (element, count) in leading.iter().copied().chain(rest) {
            write!(f, "{element}{count}")?;
        }

        Ok(())
    }
}

// Private Helper Methods ==============================================================================================

impl ElementCounts {
    fn mass(&self, accessor: impl Fn(&Element) -> f64) -> f64 {
        self.iter().map(|(element, count)| count * accessor(element)).sum()
    }
}

// Module Tests ========================================================================================================

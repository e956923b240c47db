//! Chemical formulae, isotope tables, and isotopic envelopes for scoring candidate molecules against mass spectra
//!
//! The core data flows one way: formula text is parsed into [`ElementCounts`], which yield a monoisotopic mass and
//! (optionally) an isotopic [`Envelope`]. [`ChemicalFormula`]s combine into new formulae, and [`ChemicalModification`]s
//! replace the formula held by an [`Adduct`] of some base [`Compound`].

pub mod adducts;
pub mod atoms;
pub mod envelope;
pub mod errors;
pub mod formula;
pub mod parsers;
#[cfg(test)]
mod testing_tools;

use std::{cell::RefCell, collections::BTreeMap, num::NonZeroU32, sync::LazyLock};

// External Crate Imports
use derive_more::IsVariant;

pub use adducts::catalog;
pub use atoms::atomic_database::AtomicDatabase;
pub use envelope::{compute_envelope, compute_envelopes};
pub use errors::{IsochemError, Result};
pub use parsers::{parse_formula, parse_modification};

/// The number of envelope peaks callers reach for without a better idea. Most scoring only ever looks at the
/// monoisotopic peak and its first two heavier neighbours
pub const DEFAULT_PEAK_COUNT: usize = 3;

/// The process-wide element table. It's built on first use and never mutated afterwards.
pub static ATOMIC_DB: LazyLock<AtomicDatabase> = LazyLock::new(AtomicDatabase::default);

// NOTE: For the types in this module, 'c lifetimes indicate references to a base `Compound`. Elements are always
// borrowed from `ATOMIC_DB`, so they're simply 'static

// Atoms ===============================================================================================================

/// One slot of an element's isotope distribution. Slots that don't correspond to a real isotope are padding, with both
/// a mass and abundance of zero.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Isotope {
    mass: f64,
    abundance: f64,
}

/// A single entry of the element table
///
/// `isotopes[0]` is the monoisotopic (most abundant) isotope, and `isotopes[k]` is the isotope `k` nucleons heavier.
/// Elements are compared, ordered, and hashed by their (unique) symbol alone.
#[derive(Debug)]
pub struct Element {
    symbol: &'static str,
    name: &'static str,
    atomic_number: u32,
    average_mass: f64,
    isotopes: &'static [Isotope],
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Count(NonZeroU32);

/// A mapping from elements to strictly positive counts, iterated in alphabetical order of element symbol
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ElementCounts(BTreeMap<&'static Element, Count>);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, IsVariant)]
pub enum OffsetKind {
    Add,
    Remove,
}

// Formulae ============================================================================================================

/// The first few isotopic peaks of a molecule: parallel vectors of peak masses and peak probabilities
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Envelope {
    masses: Vec<f64>,
    probabilities: Vec<f64>,
}

/// A molecule or ion's elemental composition, its monoisotopic mass, and a lazily computed isotopic envelope
// NOTE: The envelope cache is the only interior mutability here. It makes `ChemicalFormula` `Send` but not `Sync`
#[derive(Clone, Debug)]
pub struct ChemicalFormula {
    text: Option<String>,
    counts: ElementCounts,
    monoisotopic_mass: f64,
    envelope: RefCell<Option<Envelope>>,
}

// Adducts =============================================================================================================

/// A formula transformation used to model ion formation. `OffsetKind::Add` is a simple addition (always feasible),
/// and `OffsetKind::Remove` a simple subtraction (feasible only when every removed atom is present).
#[derive(Clone, PartialEq, Debug)]
pub struct ChemicalModification {
    kind: OffsetKind,
    formula: ChemicalFormula,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Compound {
    name: String,
    formula: ChemicalFormula,
}

/// A base compound plus the ordered modifications that turned it into an observed ion
///
/// A [`Compound`] can't be shared between threads (its formula's envelope cache isn't `Sync`), so an `Adduct` can't
/// be sent to another thread either. To build adducts in parallel, hand each task its own `Compound`, like
/// `compounds.into_par_iter()` with rayon, and build the adducts inside the task.
#[derive(Clone, Debug)]
pub struct Adduct<'c> {
    compound: &'c Compound,
    formula: ChemicalFormula,
    modifications: Vec<ChemicalModification>,
}

// =====================================================================================================================

pub trait Massive {
    fn monoisotopic_mass(&self) -> f64;
    fn average_mass(&self) -> f64;
}

// Blanket impls

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive> Massive for $ref_type {
                fn monoisotopic_mass(&self) -> f64 {
                    (**self).monoisotopic_mass()
                }

                fn average_mass(&self) -> f64 {
                    (**self).average_mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, &mut T, Box<T>);

// Thread-safety guarantees

static_assertions::assert_impl_all!(AtomicDatabase: Send, Sync);
static_assertions::assert_impl_all!(Element: Send, Sync);
static_assertions::assert_impl_all!(ElementCounts: Send, Sync);
static_assertions::assert_impl_all!(Envelope: Send, Sync);
static_assertions::assert_impl_all!(ChemicalFormula: Send);
static_assertions::assert_not_impl_any!(ChemicalFormula: Sync);
static_assertions::assert_impl_all!(Compound: Send);
static_assertions::assert_impl_all!(ChemicalModification: Send);

use std::sync::LazyLock;

use divan::{AllocProfiler, Bencher, black_box};
use isochem::{
    Adduct, AtomicDatabase, ChemicalFormula, ChemicalModification, Compound, DEFAULT_PEAK_COUNT,
    ElementCounts, Massive,
    catalog::{PROTONATION, SODIATION, WATER_LOSS},
    compute_envelope, compute_envelopes,
};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

const FORMULAS: [&str; 6] = [
    "C2H5NO2",
    "C5H9NO2",
    "C7H14N2O4",
    "C5H11NO2S",
    "C6H12O6",
    "C37H63N7O21",
];

static COMPOSITIONS: LazyLock<Vec<ElementCounts>> = LazyLock::new(|| {
    FORMULAS
        .into_iter()
        .map(|formula| formula.parse().unwrap())
        .collect()
});

fn main() {
    LazyLock::force(&isochem::ATOMIC_DB);
    LazyLock::force(&COMPOSITIONS);
    divan::main();
}

mod atoms {
    use super::*;

    #[divan::bench]
    fn build_atomic_database() -> AtomicDatabase {
        AtomicDatabase::default()
    }

    #[divan::bench]
    fn parse_chemical_formulae() {
        for formula in FORMULAS {
            black_box(ChemicalFormula::new(formula).unwrap());
        }
    }

    #[divan::bench]
    fn calculate_monoisotopic_masses() {
        for composition in COMPOSITIONS.iter() {
            black_box(composition.monoisotopic_mass());
        }
    }

    #[divan::bench]
    fn calculate_average_masses() {
        for composition in COMPOSITIONS.iter() {
            black_box(composition.average_mass());
        }
    }
}

mod envelopes {
    use super::*;

    #[divan::bench(args = [1, 3, 6, 10])]
    fn compute_sequential(peaks: usize) {
        for composition in COMPOSITIONS.iter() {
            black_box(compute_envelope(composition, peaks).unwrap());
        }
    }

    #[divan::bench(args = [1, 3, 6, 10])]
    fn compute_parallel(peaks: usize) {
        black_box(compute_envelopes(&COMPOSITIONS, peaks));
    }

    #[divan::bench]
    fn cached_envelope(bencher: Bencher) {
        let formula = ChemicalFormula::new("C37H63N7O21").unwrap();
        formula.envelope(DEFAULT_PEAK_COUNT).unwrap();
        bencher.bench_local(|| black_box(formula.envelope(DEFAULT_PEAK_COUNT).unwrap()));
    }
}

mod adducts {
    use super::*;

    #[divan::bench]
    fn build_adducts(bencher: Bencher) {
        let compound = Compound::new("Glucose", "C6H12O6").unwrap();
        let modifications = [PROTONATION, SODIATION, WATER_LOSS]
            .map(|symbol| ChemicalModification::standard(symbol).unwrap());
        bencher.bench_local(|| {
            black_box(Adduct::new(&compound, modifications.iter().cloned()).unwrap().ion_type_string())
        });
    }
}

// External Crate Imports
use ahash::HashMap;
use itertools::Itertools;

// Local Crate Imports
use super::errors::AtomicLookupError;
use crate::{Element, Isotope};

// Public API ==========================================================================================================

#[derive(Clone, Debug)]
pub struct AtomicDatabase {
    elements: HashMap<&'static str, &'static Element>,
}

impl AtomicDatabase {
    /// # Errors
    ///
    /// Returns [`AtomicLookupError::Element`] if no element in the table has the (case-sensitive) `symbol`.
    pub fn element(&self, symbol: impl AsRef<str>) -> Result<&'static Element, AtomicLookupError> {
        let symbol = symbol.as_ref();
        self.elements
            .get(symbol)
            .copied()
            .ok_or_else(|| AtomicLookupError::element(symbol))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Every element in the table, in order of atomic number
    pub fn elements(&self) -> impl Iterator<Item = &'static Element> + '_ {
        self.elements
            .values()
            .copied()
            .sorted_unstable_by_key(|e| e.atomic_number)
    }
}

impl Default for AtomicDatabase {
    fn default() -> Self {
        let elements = ELEMENT_TABLE.iter().map(|e| (e.symbol, e)).collect();
        Self { elements }
    }
}

// Element Table =======================================================================================================

// NOTE: Masses are monoisotopic masses in Da (NIST), abundances are IUPAC representative isotopic compositions, and
// average masses are IUPAC standard atomic weights. Elements without any stable isotope carry their longest-lived
// isotope with an abundance of 1, and the mass number of that isotope as their average mass. Each distribution starts
// at the most abundant isotope and steps up by one nucleon per slot, so lighter isotopes aren't modelled.
macro_rules! element {
    ($symbol:literal, $name:literal, $z:literal, $average_mass:literal, [$(($mass:literal, $abundance:literal)),+ $(,)?]) => {
        Element {
            symbol: $symbol,
            name: $name,
            atomic_number: $z,
            average_mass: $average_mass,
            isotopes: &[$(Isotope { mass: $mass, abundance: $abundance }),+],
        }
    };
}

static ELEMENT_TABLE: [Element; 100] = [
    element!("H", "Hydrogen", 1, 1.00794, [(1.00782503207, 0.999885), (2.0141017778, 0.000115)]),
    element!("He", "Helium", 2, 4.002602, [(4.00260325415, 0.99999866)]),
    element!("Li", "Lithium", 3, 6.941, [(7.0160045, 0.9241)]),
    element!("Be", "Beryllium", 4, 9.012182, [(9.0121822, 1.0)]),
    element!("B", "Boron", 5, 10.811, [(11.0093054, 0.801)]),
    element!("C", "Carbon", 6, 12.0107, [(12.0, 0.9893), (13.0033548378, 0.0107)]),
    element!("N", "Nitrogen", 7, 14.0067, [(14.0030740048, 0.99636), (15.0001088982, 0.00364)]),
    element!("O", "Oxygen", 8, 15.9994, [(15.99491461956, 0.99757), (16.99913170, 0.00038), (17.9991610, 0.00205)]),
    element!("F", "Fluorine", 9, 18.9984032, [(18.99840322, 1.0)]),
    element!("Ne", "Neon", 10, 20.1797, [(19.9924401754, 0.9048), (20.99384668, 0.0027), (21.991385114, 0.0925)]),
    element!("Na", "Sodium", 11, 22.98976928, [(22.9897692809, 1.0)]),
    element!("Mg", "Magnesium", 12, 24.3050, [(23.985041700, 0.7899), (24.98583692, 0.1000), (25.982592929, 0.1101)]),
    element!("Al", "Aluminium", 13, 26.9815386, [(26.98153863, 1.0)]),
    element!("Si", "Silicon", 14, 28.0855, [(27.9769265325, 0.92223), (28.976494700, 0.04685), (29.97377017, 0.03092)]),
    element!("P", "Phosphorus", 15, 30.973762, [(30.97376163, 1.0)]),
    element!("S", "Sulfur", 16, 32.065, [
        (31.97207100, 0.9493), (32.97145876, 0.0076), (33.96786690, 0.0429), (0.0, 0.0), (35.96708076, 0.0002),
    ]),
    element!("Cl", "Chlorine", 17, 35.453, [(34.96885268, 0.7578), (0.0, 0.0), (36.96590259, 0.2422)]),
    element!("Ar", "Argon", 18, 39.948, [(39.9623831225, 0.996003)]),
    element!("K", "Potassium", 19, 39.0983, [(38.96370668, 0.932581), (39.96399848, 0.000117), (40.96182576, 0.067302)]),
    element!("Ca", "Calcium", 20, 40.078, [
        (39.96259098, 0.96941), (0.0, 0.0), (41.95861801, 0.00647), (42.9587666, 0.00135), (43.9554818, 0.02086),
        (0.0, 0.0), (45.9536926, 0.00004), (0.0, 0.0), (47.952534, 0.00187),
    ]),
    element!("Sc", "Scandium", 21, 44.955912, [(44.9559119, 1.0)]),
    element!("Ti", "Titanium", 22, 47.867, [(47.9479463, 0.7372), (48.9478700, 0.0541), (49.9447912, 0.0518)]),
    element!("V", "Vanadium", 23, 50.9415, [(50.9439595, 0.9975)]),
    element!("Cr", "Chromium", 24, 51.9961, [(51.9405075, 0.83789), (52.9406494, 0.09501), (53.9388804, 0.02365)]),
    element!("Mn", "Manganese", 25, 54.938045, [(54.9380451, 1.0)]),
    element!("Fe", "Iron", 26, 55.845, [(55.9349375, 0.91754), (56.9353940, 0.02119), (57.9332756, 0.00282)]),
    element!("Co", "Cobalt", 27, 58.933195, [(58.9331950, 1.0)]),
    element!("Ni", "Nickel", 28, 58.6934, [
        (57.9353429, 0.680769), (0.0, 0.0), (59.9307864, 0.262231), (60.9310560, 0.011399), (61.9283451, 0.036345),
        (0.0, 0.0), (63.9279660, 0.009256),
    ]),
    element!("Cu", "Copper", 29, 63.546, [(62.9295975, 0.6917), (0.0, 0.0), (64.9277895, 0.3083)]),
    element!("Zn", "Zinc", 30, 65.409, [
        (63.9291422, 0.4863), (0.0, 0.0), (65.9260334, 0.2790), (66.9271273, 0.0410), (67.9248442, 0.1875),
        (0.0, 0.0), (69.9253193, 0.0062),
    ]),
    element!("Ga", "Gallium", 31, 69.723, [(68.9255736, 0.60108), (0.0, 0.0), (70.9247013, 0.39892)]),
    element!("Ge", "Germanium", 32, 72.64, [(73.9211778, 0.3628), (0.0, 0.0), (75.9214026, 0.0773)]),
    element!("As", "Arsenic", 33, 74.92160, [(74.9215965, 1.0)]),
    element!("Se", "Selenium", 34, 78.96, [(79.9165213, 0.4961), (0.0, 0.0), (81.9166994, 0.0873)]),
    element!("Br", "Bromine", 35, 79.904, [(78.9183371, 0.5069), (0.0, 0.0), (80.9162906, 0.4931)]),
    element!("Kr", "Krypton", 36, 83.798, [(83.911507, 0.5699), (0.0, 0.0), (85.91061073, 0.1728)]),
    element!("Rb", "Rubidium", 37, 85.4678, [(84.911789738, 0.7217), (0.0, 0.0), (86.909180527, 0.2783)]),
    element!("Sr", "Strontium", 38, 87.62, [(87.9056121, 0.8258)]),
    element!("Y", "Yttrium", 39, 88.90585, [(88.9058483, 1.0)]),
    element!("Zr", "Zirconium", 40, 91.224, [
        (89.9047044, 0.5145), (90.9056458, 0.1122), (91.9050408, 0.1715), (0.0, 0.0), (93.9063152, 0.1738),
        (0.0, 0.0), (95.9082734, 0.0280),
    ]),
    element!("Nb", "Niobium", 41, 92.90638, [(92.9063781, 1.0)]),
    element!("Mo", "Molybdenum", 42, 95.94, [(97.9054082, 0.2413), (0.0, 0.0), (99.907477, 0.0963)]),
    element!("Tc", "Technetium", 43, 98.0, [(97.907216, 1.0)]),
    element!("Ru", "Ruthenium", 44, 101.07, [(101.9043493, 0.3155), (0.0, 0.0), (103.905433, 0.1862)]),
    element!("Rh", "Rhodium", 45, 102.90550, [(102.905504, 1.0)]),
    element!("Pd", "Palladium", 46, 106.42, [
        (105.903486, 0.2733), (0.0, 0.0), (107.903892, 0.2646), (0.0, 0.0), (109.905153, 0.1172),
    ]),
    element!("Ag", "Silver", 47, 107.8682, [(106.905097, 0.51839), (0.0, 0.0), (108.904752, 0.48161)]),
    element!("Cd", "Cadmium", 48, 112.411, [(113.9033585, 0.2873), (0.0, 0.0), (115.904756, 0.0749)]),
    element!("In", "Indium", 49, 114.818, [(114.903878, 0.9571)]),
    element!("Sn", "Tin", 50, 118.710, [
        (119.9021947, 0.3258), (0.0, 0.0), (121.9034390, 0.0463), (0.0, 0.0), (123.9052739, 0.0579),
    ]),
    element!("Sb", "Antimony", 51, 121.760, [(120.9038157, 0.5721), (0.0, 0.0), (122.9042140, 0.4279)]),
    element!("Te", "Tellurium", 52, 127.60, [(129.9062244, 0.3408)]),
    element!("I", "Iodine", 53, 126.90447, [(126.904473, 1.0)]),
    element!("Xe", "Xenon", 54, 131.293, [
        (131.9041535, 0.269086), (0.0, 0.0), (133.9053945, 0.104357), (0.0, 0.0), (135.907219, 0.088573),
    ]),
    element!("Cs", "Caesium", 55, 132.9054519, [(132.905451933, 1.0)]),
    element!("Ba", "Barium", 56, 137.327, [(137.9052472, 0.71698)]),
    element!("La", "Lanthanum", 57, 138.90547, [(138.9063533, 0.99910)]),
    element!("Ce", "Cerium", 58, 140.116, [(139.9054387, 0.88450), (0.0, 0.0), (141.909244, 0.11114)]),
    element!("Pr", "Praseodymium", 59, 140.90765, [(140.9076528, 1.0)]),
    element!("Nd", "Neodymium", 60, 144.242, [
        (141.9077233, 0.272), (142.9098143, 0.122), (143.9100873, 0.238), (144.9125736, 0.083), (145.9131169, 0.172),
        (0.0, 0.0), (147.916893, 0.057), (0.0, 0.0), (149.920891, 0.056),
    ]),
    element!("Pm", "Promethium", 61, 145.0, [(144.912749, 1.0)]),
    element!("Sm", "Samarium", 62, 150.36, [(151.9197324, 0.2675), (0.0, 0.0), (153.9222093, 0.2275)]),
    element!("Eu", "Europium", 63, 151.964, [(152.9212303, 0.5219)]),
    element!("Gd", "Gadolinium", 64, 157.25, [(157.9241039, 0.2484), (0.0, 0.0), (159.9270541, 0.2186)]),
    element!("Tb", "Terbium", 65, 158.92535, [(158.9253468, 1.0)]),
    element!("Dy", "Dysprosium", 66, 162.500, [(163.9291748, 0.2818)]),
    element!("Ho", "Holmium", 67, 164.93032, [(164.9303221, 1.0)]),
    element!("Er", "Erbium", 68, 167.259, [
        (165.9302931, 0.33503), (166.9320482, 0.22869), (167.9323702, 0.26978), (0.0, 0.0), (169.9354643, 0.14910),
    ]),
    element!("Tm", "Thulium", 69, 168.93421, [(168.9342133, 1.0)]),
    element!("Yb", "Ytterbium", 70, 173.04, [(173.9388621, 0.3183), (0.0, 0.0), (175.9425717, 0.1276)]),
    element!("Lu", "Lutetium", 71, 174.967, [(174.9407718, 0.9741), (175.9426863, 0.0259)]),
    element!("Hf", "Hafnium", 72, 178.49, [(179.9465500, 0.3508)]),
    element!("Ta", "Tantalum", 73, 180.94788, [(180.9479958, 0.99988)]),
    element!("W", "Tungsten", 74, 183.84, [(183.9509312, 0.3064), (0.0, 0.0), (185.9543641, 0.2843)]),
    element!("Re", "Rhenium", 75, 186.207, [(186.9557531, 0.6260)]),
    element!("Os", "Osmium", 76, 190.23, [(191.9614807, 0.4078)]),
    element!("Ir", "Iridium", 77, 192.217, [(192.9629264, 0.627)]),
    element!("Pt", "Platinum", 78, 195.084, [
        (194.9647911, 0.33832), (195.9649515, 0.25242), (0.0, 0.0), (197.967893, 0.07163),
    ]),
    element!("Au", "Gold", 79, 196.966569, [(196.9665687, 1.0)]),
    element!("Hg", "Mercury", 80, 200.59, [(201.970643, 0.2986), (0.0, 0.0), (203.9734939, 0.0687)]),
    element!("Tl", "Thallium", 81, 204.3833, [(204.9744275, 0.70476)]),
    element!("Pb", "Lead", 82, 207.2, [(207.9766521, 0.524)]),
    element!("Bi", "Bismuth", 83, 208.98040, [(208.9803987, 1.0)]),
    element!("Po", "Polonium", 84, 209.0, [(208.9824304, 1.0)]),
    element!("At", "Astatine", 85, 210.0, [(209.987148, 1.0)]),
    element!("Rn", "Radon", 86, 222.0, [(222.0175777, 1.0)]),
    element!("Fr", "Francium", 87, 223.0, [(223.0197359, 1.0)]),
    element!("Ra", "Radium", 88, 226.0, [(226.0254098, 1.0)]),
    element!("Ac", "Actinium", 89, 227.0, [(227.0277521, 1.0)]),
    element!("Th", "Thorium", 90, 232.03806, [(232.0380553, 1.0)]),
    element!("Pa", "Protactinium", 91, 231.03588, [(231.0358840, 1.0)]),
    element!("U", "Uranium", 92, 238.02891, [(238.0507882, 0.992742)]),
    element!("Np", "Neptunium", 93, 237.0, [(237.0481734, 1.0)]),
    element!("Pu", "Plutonium", 94, 244.0, [(244.064204, 1.0)]),
    element!("Am", "Americium", 95, 243.0, [(243.0613811, 1.0)]),
    element!("Cm", "Curium", 96, 247.0, [(247.070354, 1.0)]),
    element!("Bk", "Berkelium", 97, 247.0, [(247.070307, 1.0)]),
    element!("Cf", "Californium", 98, 251.0, [(251.079587, 1.0)]),
    element!("Es", "Einsteinium", 99, 252.0, [(252.082980, 1.0)]),
    element!("Fm", "Fermium", 100, 257.0, [(257.095105, 1.0)]),
];

// Module Tests ========================================================================================================

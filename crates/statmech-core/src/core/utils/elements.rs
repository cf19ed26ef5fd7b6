use phf::{Map, phf_map};

// Standard atomic weights (CIAAW abridged values), in amu.
static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "H" => 1.008, "He" => 4.002602,
    "Li" => 6.94, "Be" => 9.0121831, "B" => 10.81, "C" => 12.011,
    "N" => 14.007, "O" => 15.999, "F" => 18.998403163, "Ne" => 20.1797,
    "Na" => 22.98976928, "Mg" => 24.305, "Al" => 26.9815384, "Si" => 28.085,
    "P" => 30.973761998, "S" => 32.06, "Cl" => 35.45, "Ar" => 39.948,
    "K" => 39.0983, "Ca" => 40.078, "Ti" => 47.867, "Cr" => 51.9961,
    "Mn" => 54.938043, "Fe" => 55.845, "Ni" => 58.6934, "Cu" => 63.546,
    "Zn" => 65.38, "Br" => 79.904, "I" => 126.90447,
};

/// Looks up the standard atomic weight for an element symbol, in amu.
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ATOMIC_MASSES.get(symbol.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_mass_returns_standard_weight_for_known_elements() {
        assert_eq!(atomic_mass("H"), Some(1.008));
        assert_eq!(atomic_mass("O"), Some(15.999));
    }

    #[test]
    fn atomic_mass_trims_surrounding_whitespace() {
        assert_eq!(atomic_mass(" C "), Some(12.011));
    }

    #[test]
    fn atomic_mass_returns_none_for_unknown_symbols() {
        assert_eq!(atomic_mass("Xx"), None);
        assert_eq!(atomic_mass(""), None);
    }
}

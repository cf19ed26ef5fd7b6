use phf::{Map, phf_map};

// Rotational symmetry numbers by point group.
// See DOI 10.1007/s00214-007-0328-0 for the full derivation.
static POINT_GROUP_SYMMETRY_NUMBERS: Map<&'static str, u32> = phf_map! {
    "C1" => 1,
    "Cs" => 1,
    "C2" => 2,
    "C2v" => 2,
    "C3v" => 3,
    "Cinfv" => 1,
    "D2h" => 4,
    "D3h" => 6,
    "D5h" => 10,
    "Dinfh" => 2,
    "D3d" => 6,
    "Td" => 12,
    "Oh" => 24,
};

/// Looks up the rotational symmetry number for a point group label.
pub fn symmetry_number(point_group: &str) -> Option<u32> {
    POINT_GROUP_SYMMETRY_NUMBERS.get(point_group.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetry_number_covers_common_point_groups() {
        assert_eq!(symmetry_number("C1"), Some(1));
        assert_eq!(symmetry_number("C2v"), Some(2));
        assert_eq!(symmetry_number("Dinfh"), Some(2));
        assert_eq!(symmetry_number("Td"), Some(12));
        assert_eq!(symmetry_number("Oh"), Some(24));
    }

    #[test]
    fn symmetry_number_returns_none_for_unknown_point_groups() {
        assert_eq!(symmetry_number("C7v"), None);
    }
}

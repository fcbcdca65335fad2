//! Locating every site at which rule 3 applies.

/// Every start index of `III` in `s`, ascending, overlaps included.
///
/// `"IIII"` yields `[0, 1]`. Empty when rule 3 is not applicable.
#[must_use]
pub fn rule3_sites(s: &str) -> Vec<usize> {
    // `I` is ASCII, so a byte-level match always starts on a char boundary.
    s.as_bytes()
        .windows(3)
        .enumerate()
        .filter(|(_, window)| *window == b"III")
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_sites() {
        assert_eq!(rule3_sites("IIII"), vec![0, 1]);
        assert_eq!(rule3_sites("MIIIII"), vec![1, 2, 3]);
    }

    #[test]
    fn test_disjoint_sites() {
        assert_eq!(rule3_sites("MIIIUIII"), vec![1, 5]);
    }

    #[test]
    fn test_no_sites() {
        assert!(rule3_sites("").is_empty());
        assert!(rule3_sites("MII").is_empty());
        assert!(rule3_sites("MIIUII").is_empty());
    }
}

//! Tests for `DotBitset` membership tracking

#[cfg(test)]
mod tests {
    use patternlock::algorithm::bitset::DotBitset;

    // Verifies new DotBitset is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_bitset() {
        let bitset = DotBitset::new(3);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
        assert_eq!(bitset.grid_size(), 3);
    }

    // Tests insertion reports whether the dot was new
    // Verified by returning the previous bit instead of its negation
    #[test]
    fn test_insert_reports_new_dots() {
        let mut bitset = DotBitset::new(3);
        assert!(bitset.insert(4));
        assert!(!bitset.insert(4));
        assert!(bitset.contains(4));
        assert!(!bitset.contains(3));
        assert_eq!(bitset.count(), 1);
    }

    // Tests off-grid indices are rejected rather than wrapping or panicking
    #[test]
    fn test_off_grid_indices_are_rejected() {
        let mut bitset = DotBitset::new(3);
        assert!(!bitset.insert(-1));
        assert!(!bitset.insert(9));
        assert!(!bitset.contains(-1));
        assert!(!bitset.contains(9));
        assert!(bitset.is_empty());
    }

    #[test]
    fn test_from_pattern_and_to_vec() {
        let bitset = DotBitset::from_pattern(&[8, 0, 4, 42, -3, 4], 3);
        assert_eq!(bitset.to_vec(), vec![0, 4, 8]);
    }

    #[test]
    fn test_clear() {
        let mut bitset = DotBitset::from_pattern(&[1, 2, 3], 3);
        bitset.clear();
        assert!(bitset.is_empty());
        assert!(bitset.insert(2));
    }

    #[test]
    fn test_debug_lists_members() {
        let bitset = DotBitset::from_pattern(&[2, 6], 3);
        let debug = format!("{bitset:?}");
        assert!(debug.contains("[2, 6]"));
    }
}

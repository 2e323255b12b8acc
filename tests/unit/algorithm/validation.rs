//! Tests for ordered, short-circuiting pattern validation

#[cfg(test)]
mod tests {
    use patternlock::algorithm::validation::{
        VALID_MESSAGE, ValidationFailure, ValidationResult, validate, validate_input,
        validate_with,
    };
    use patternlock::io::configuration::PatternConfig;

    #[test]
    fn test_valid_pattern() {
        let result = validate(&[0, 1, 2, 3], 4, 9, 3);
        assert!(result.is_valid);
        assert_eq!(result.message, "Valid pattern");
        assert_eq!(result, ValidationResult::valid());
        assert!(result.failure.is_none());
    }

    // Tests short patterns cite the minimum
    // Verified by comparing against max_points
    #[test]
    fn test_too_short() {
        let result = validate(&[0, 1], 4, 9, 3);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Pattern must have at least 4 points");
        assert_eq!(
            result.failure,
            Some(ValidationFailure::TooFewPoints { min_points: 4 })
        );
    }

    #[test]
    fn test_too_long() {
        let pattern: Vec<i64> = (0..10).collect();
        let result = validate(&pattern, 4, 9, 4);
        assert_eq!(result.message, "Pattern cannot have more than 9 points");
    }

    // Tests the first out-of-range value is cited, in sequence order
    // Verified by reporting the largest offender instead of the first
    #[test]
    fn test_out_of_range_cites_first_offender() {
        let result = validate(&[0, 1, 2, 9], 4, 9, 3);
        assert_eq!(result.message, "Invalid point: 9. Must be between 0 and 8");

        let result = validate(&[0, -3, 12, 1], 4, 9, 3);
        assert_eq!(result.message, "Invalid point: -3. Must be between 0 and 8");
        assert_eq!(
            result.failure,
            Some(ValidationFailure::PointOutOfRange {
                point: -3,
                max_index: 8
            })
        );
    }

    #[test]
    fn test_duplicates() {
        let result = validate(&[0, 1, 2, 1], 4, 9, 3);
        assert_eq!(result.message, "Pattern cannot have duplicate points");
    }

    // Tests checks short-circuit in order: length before range before uniqueness
    // Verified by running the uniqueness check first
    #[test]
    fn test_check_order() {
        assert_eq!(
            validate(&[9, 10], 4, 9, 3).failure,
            Some(ValidationFailure::TooFewPoints { min_points: 4 })
        );
        assert_eq!(
            validate(&[1, 1, 9, 2], 4, 9, 3).failure,
            Some(ValidationFailure::PointOutOfRange {
                point: 9,
                max_index: 8
            })
        );
    }

    #[test]
    fn test_missing_input() {
        let result = validate_input(None, 4, 9, 3);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Pattern must be an array");

        let present = validate_input(Some(&[0, 1, 2, 3]), 4, 9, 3);
        assert_eq!(present.message, VALID_MESSAGE);
    }

    // Tests the length window is inclusive on both ends for several grid sizes
    // Verified by using a strict comparison for the minimum
    #[test]
    fn test_length_bounds_across_grid_sizes() {
        for grid_size in 2..=6_usize {
            let min_points = 2;
            let max_points = grid_size * grid_size - 1;
            let prefix = |len: usize| -> Vec<i64> { (0..len as i64).collect() };

            assert!(!validate(&prefix(min_points - 1), min_points, max_points, grid_size).is_valid);
            for len in min_points..=max_points {
                assert!(validate(&prefix(len), min_points, max_points, grid_size).is_valid);
            }
            assert!(!validate(&prefix(max_points + 1), min_points, max_points, grid_size).is_valid);
        }
    }

    #[test]
    fn test_any_out_of_range_element_is_invalid() {
        for bad in [-1, -100, 9, 1000] {
            for position in 0..4 {
                let mut pattern = vec![0, 1, 2, 3];
                if let Some(slot) = pattern.get_mut(position) {
                    *slot = bad;
                }
                assert!(!validate(&pattern, 4, 9, 3).is_valid);
            }
        }
    }

    #[test]
    fn test_validate_with_config() {
        let config = PatternConfig::new(6, 16, 4);
        assert!(validate_with(&[0, 5, 10, 15, 14, 13], &config).is_valid);
        assert!(!validate_with(&[0, 5, 10, 15], &config).is_valid);
    }
}

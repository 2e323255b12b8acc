//! Tests for complexity scoring and level thresholds

#[cfg(test)]
mod tests {
    use patternlock::analysis::complexity::{
        ComplexityLevel, ComplexityResult, count_corner_visits, count_direction_changes, score,
    };

    // Tests patterns shorter than two dots are not scored
    #[test]
    fn test_degenerate_patterns() {
        assert_eq!(score(&[], 3), ComplexityResult::invalid());
        let single = score(&[4], 3);
        assert_eq!(single.score, 0);
        assert_eq!(single.level, ComplexityLevel::Invalid);
        assert!(single.factors.is_empty());
    }

    // Tests a two-dot pattern only earns points for its corner
    // Verified by awarding length points for the first two dots
    #[test]
    fn test_two_dots() {
        let result = score(&[0, 1], 3);
        assert_eq!(result.score, 8);
        assert_eq!(result.level, ComplexityLevel::VeryWeak);
        assert_eq!(result.factors, vec!["Corner usage: +8"]);
    }

    #[test]
    fn test_straight_middle_row() {
        let result = score(&[3, 4, 5], 3);
        assert_eq!(result.score, 10);
        assert_eq!(result.factors, vec!["Length: +10"]);
    }

    // Tests every factor contributes and appears in computation order
    #[test]
    fn test_hourglass_uses_every_factor() {
        let result = score(&[0, 8, 2, 6], 3);
        assert_eq!(
            result.factors,
            vec![
                "Length: +20",
                "Direction changes: +10",
                "Line crossings: +15",
                "Corner usage: +32",
            ]
        );
        assert_eq!(result.score, 77);
        assert_eq!(result.level, ComplexityLevel::Strong);
    }

    // Tests the score counts corner 2 alongside 0 and 8
    // Verified by checking only the top-left and bottom-right corners
    #[test]
    fn test_top_row_then_right_column() {
        let result = score(&[0, 1, 2, 5, 8], 3);
        assert_eq!(result.score, 59);
        assert_eq!(result.level, ComplexityLevel::Medium);
        assert!(result.factors.contains(&"Corner usage: +24".to_string()));
        assert!(!result.factors.iter().any(|f| f.starts_with("Line crossings")));
    }

    // Tests length points stop growing after eight dots
    #[test]
    fn test_length_cap() {
        let eight = score(&[1, 2, 3, 4, 5, 6, 7, 8], 12);
        let twelve = score(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 12);
        assert_eq!(eight.factors, vec!["Length: +60"]);
        assert_eq!(twelve.factors, vec!["Length: +60"]);
    }

    #[test]
    fn test_direction_changes() {
        assert_eq!(count_direction_changes(&[0, 1, 2], 3), 0);
        assert_eq!(count_direction_changes(&[0, 1, 4], 3), 1);
        // Reversal along the same line changes the step vector
        assert_eq!(count_direction_changes(&[0, 2, 1], 3), 1);
        assert_eq!(count_direction_changes(&[0, 1], 3), 0);
    }

    #[test]
    fn test_corner_visits() {
        assert_eq!(count_corner_visits(&[0, 3, 12, 15], 4), 4);
        assert_eq!(count_corner_visits(&[5, 6, 9, 10], 4), 0);
        assert_eq!(count_corner_visits(&[0], 1), 1);
    }

    // Tests thresholds are inclusive lower bounds
    // Verified by using strict comparisons
    #[test]
    fn test_level_thresholds() {
        let cases = [
            (100, ComplexityLevel::VeryStrong),
            (80, ComplexityLevel::VeryStrong),
            (79, ComplexityLevel::Strong),
            (60, ComplexityLevel::Strong),
            (59, ComplexityLevel::Medium),
            (40, ComplexityLevel::Medium),
            (39, ComplexityLevel::Weak),
            (20, ComplexityLevel::Weak),
            (19, ComplexityLevel::VeryWeak),
            (0, ComplexityLevel::VeryWeak),
        ];
        for (value, expected) in cases {
            assert_eq!(ComplexityLevel::from_score(value), expected, "score {value}");
        }
    }

    #[test]
    fn test_level_labels_and_order() {
        let labels: Vec<String> = ComplexityLevel::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec!["invalid", "very-weak", "weak", "medium", "strong", "very-strong"]
        );
        assert!(ComplexityLevel::Strong.at_least(ComplexityLevel::Medium));
        assert!(ComplexityLevel::Medium.at_least(ComplexityLevel::Medium));
        assert!(!ComplexityLevel::Weak.at_least(ComplexityLevel::Medium));
    }

    // Tests decoded indices far outside the grid are scored without overflowing
    // Verified by subtracting coordinates in i64
    #[test]
    fn test_extreme_indices() {
        let result = score(&[i64::MAX, -i64::MAX, 0, 1], 3);
        assert_eq!(
            result.factors,
            vec![
                "Length: +20",
                "Direction changes: +10",
                "Line crossings: +15",
                "Corner usage: +8",
            ]
        );
        assert_eq!(result.score, 53);

        let single_column = score(&[i64::MAX, -i64::MAX, 0], 1);
        assert_eq!(single_column.score, 23);
        assert_eq!(single_column.level, ComplexityLevel::Weak);
        assert_eq!(count_direction_changes(&[i64::MAX, -i64::MAX, 0], 1), 1);
    }
}

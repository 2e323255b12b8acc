//! Tests for pattern summaries and level histograms

#[cfg(test)]
mod tests {
    use patternlock::analysis::complexity::{ComplexityLevel, score};
    use patternlock::analysis::statistics::{LevelHistogram, PatternStats};
    use patternlock::io::configuration::PatternConfig;

    #[test]
    fn test_analyze_valid_pattern() {
        let stats = PatternStats::analyze(&[0, 1, 2, 5, 8], &PatternConfig::default());
        assert_eq!(stats.encoded, "0,1,2,5,8");
        assert_eq!(stats.length, 5);
        assert_eq!(stats.score, 59);
        assert_eq!(stats.level, ComplexityLevel::Medium);
        assert!(stats.is_valid);
        assert_eq!(stats.message, "Valid pattern");
    }

    // Tests invalid patterns are still scored
    #[test]
    fn test_analyze_invalid_pattern() {
        let stats = PatternStats::analyze(&[0, 4, 8], &PatternConfig::default());
        assert!(!stats.is_valid);
        assert_eq!(stats.message, "Pattern must have at least 4 points");
        assert!(stats.score > 0);
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = LevelHistogram::new();
        assert_eq!(histogram.total(), 0);
        assert!((histogram.mean_score() - 0.0).abs() < f64::EPSILON);
        assert!((histogram.fraction(ComplexityLevel::Weak) - 0.0).abs() < f64::EPSILON);
    }

    // Tests counts, fractions and the mean follow the recorded results
    // Verified by incrementing the wrong level slot
    #[test]
    fn test_record_and_fractions() {
        let mut histogram = LevelHistogram::new();
        histogram.record(&score(&[0, 1], 3));
        histogram.record(&score(&[0, 8, 2, 6], 3));
        histogram.record(&score(&[0, 8, 2, 6], 3));
        histogram.record(&score(&[4], 3));

        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.count(ComplexityLevel::Strong), 2);
        assert_eq!(histogram.count(ComplexityLevel::VeryWeak), 1);
        assert_eq!(histogram.count(ComplexityLevel::Invalid), 1);
        assert!((histogram.fraction(ComplexityLevel::Strong) - 0.5).abs() < f64::EPSILON);
        assert!((histogram.mean_score() - 40.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extend_and_iter() {
        let mut histogram = LevelHistogram::new();
        histogram.extend([score(&[3, 4, 5], 3), score(&[0, 1, 2, 5, 8], 3)]);

        let counts: Vec<usize> = histogram.iter().map(|(_, count)| count).collect();
        assert_eq!(counts, vec![0, 1, 0, 1, 0, 0]);
        assert_eq!(histogram.iter().count(), ComplexityLevel::ALL.len());
    }
}

//! Tests for seeded random pattern generation

#[cfg(test)]
mod tests {
    use patternlock::algorithm::generator::{PatternGenerator, generate};
    use patternlock::algorithm::validation::validate_with;
    use patternlock::io::configuration::{PatternConfig, Preset};
    use rand::{SeedableRng, rngs::StdRng};

    // Tests the same seed reproduces the same patterns
    // Verified by seeding from entropy instead of the given seed
    #[test]
    fn test_seed_reproducibility() {
        let config = PatternConfig::default();
        let first: Vec<Vec<i64>> = PatternGenerator::new(config, 99).take(20).collect();
        let second: Vec<Vec<i64>> = PatternGenerator::new(config, 99).take(20).collect();
        assert_eq!(first, second);
    }

    // Tests generated patterns always satisfy the validator for consistent presets
    // Verified by drawing with replacement
    #[test]
    fn test_generated_patterns_are_valid() {
        for preset in Preset::ALL {
            let config = preset.config();
            let mut generator = PatternGenerator::new(config, 3);
            assert_eq!(generator.config(), &config);
            for _ in 0..200 {
                let pattern = generator.next_pattern();
                assert!(pattern.len() >= config.min_points);
                assert!(pattern.len() <= config.max_points);
                assert!(validate_with(&pattern, &config).is_valid, "{pattern:?}");
            }
        }
    }

    #[test]
    fn test_every_length_in_range_is_reached() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 10];
        for _ in 0..500 {
            let pattern = generate(&mut rng, 4, 9, 3);
            if let Some(flag) = seen.get_mut(pattern.len()) {
                *flag = true;
            }
        }
        assert_eq!(seen, [false, false, false, false, true, true, true, true, true, true]);
    }

    // Tests drawing stops when the grid runs out of dots
    #[test]
    fn test_pool_exhaustion() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pattern = generate(&mut rng, 12, 12, 3);
        pattern.sort_unstable();
        assert_eq!(pattern, (0..9).collect::<Vec<i64>>());
    }

    #[test]
    fn test_inverted_bounds_use_minimum() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(generate(&mut rng, 5, 2, 3).len(), 5);
    }

    #[test]
    fn test_degenerate_inputs_yield_empty_patterns() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate(&mut rng, 4, 9, 0).is_empty());
        assert!(generate(&mut rng, 0, 0, 3).is_empty());
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{Rng, SeedableRng, rngs::{StdRng, ThreadRng}, seq::index};

use crate::{Array, StepVizError, StepVizResult, Value};

/// Shape of the value domain handed out by [`ArrayGenerator`].
///
/// For an array of `size` elements, values are drawn from `[1, upper)` where
/// `upper = max(min_upper_bound, size_multiplier * size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_upper_bound: usize,
    pub size_multiplier: usize,
    /// Largest array the generator agrees to build.
    pub max_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_upper_bound: 100,
            size_multiplier: 2,
            max_size: 1_000,
        }
    }
}

impl GeneratorConfig {
    /// Exclusive upper bound of the value domain for `size`, or [None] on overflow.
    #[must_use]
    pub fn upper_bound(&self, size: usize) -> Option<usize> {
        let scaled = self.size_multiplier.checked_mul(size)?;
        Some(self.min_upper_bound.max(scaled))
    }
}

/// Produces fresh arrays of distinct values. The source of randomness is injected so
/// tests can use a seeded [`StdRng`].
#[derive(Debug)]
pub struct ArrayGenerator<R: Rng = StdRng> {
    rng: R,
    config: GeneratorConfig,
}

impl ArrayGenerator<StdRng> {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self { Self::new(StdRng::seed_from_u64(seed)) }

    /// Seeded from the thread local generator, so every instance differs.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut thread_rng: ThreadRng = rand::rng();
        Self::new(StdRng::from_rng(&mut thread_rng))
    }
}

impl<R: Rng> ArrayGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> GeneratorConfig { self.config }

    /// Returns `size` distinct values drawn uniformly without replacement from the
    /// configured domain. The returned [`Array`] is never flagged as sorted.
    ///
    /// # Errors
    ///
    /// [`StepVizError::InvalidSize`] if `size` is zero, larger than
    /// [`GeneratorConfig::max_size`], or larger than the number of values the domain
    /// can supply. Nothing is generated in that case.
    pub fn generate(&mut self, size: usize) -> StepVizResult<Array> {
        let available = self
            .config
            .upper_bound(size)
            .map_or(0, |upper| upper.saturating_sub(1));
        let max_size = available.min(self.config.max_size);

        if size == 0 || size > max_size {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Rejected array size",
                size = %size,
                max_size = %max_size
            );
            return Err(StepVizError::InvalidSize { size, max_size });
        }

        // Indices in `0..available` map onto values in `1..=available`.
        let values = index::sample(&mut self.rng, available, size)
            .into_iter()
            .map(|it| Value::try_from(it + 1))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| StepVizError::InvalidSize { size, max_size })?;

        Ok(Array::from(values))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(1)]
    #[test_case(10)]
    #[test_case(20)]
    #[test_case(99)]
    #[test_case(500)]
    fn generates_distinct_values_in_domain(size: usize) {
        let mut generator = ArrayGenerator::from_seed(7);
        let array = generator.generate(size).unwrap();

        let upper = Value::try_from(100.max(2 * size)).unwrap();
        assert_eq!(array.len(), size);
        assert!(!array.is_sorted());
        assert!(array.iter().all(|it| (1..upper).contains(it)));

        let unique: HashSet<_> = array.iter().collect();
        assert_eq!(unique.len(), size);
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut generator = ArrayGenerator::from_seed(1);
        assert_eq!(
            generator.generate(0),
            Err(StepVizError::InvalidSize {
                size: 0,
                max_size: 99
            })
        );
    }

    #[test]
    fn size_larger_than_domain_is_rejected() {
        let config = GeneratorConfig {
            min_upper_bound: 10,
            size_multiplier: 0,
            max_size: 1_000,
        };
        let mut generator = ArrayGenerator::from_seed(1).with_config(config);

        // Domain is [1, 10), so 9 values at most.
        assert!(generator.generate(9).is_ok());
        assert_eq!(
            generator.generate(10),
            Err(StepVizError::InvalidSize {
                size: 10,
                max_size: 9
            })
        );
    }

    #[test]
    fn size_above_configured_cap_is_rejected() {
        let mut generator = ArrayGenerator::from_seed(1);
        let result = generator.generate(1_001);
        assert!(matches!(
            result,
            Err(StepVizError::InvalidSize { size: 1_001, .. })
        ));
    }

    #[test]
    fn same_seed_same_array() {
        let first = ArrayGenerator::from_seed(42).generate(20).unwrap();
        let second = ArrayGenerator::from_seed(42).generate(20).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn upper_bound_overflow_is_none() {
        let config = GeneratorConfig::default();
        assert_eq!(config.upper_bound(usize::MAX), None);
        assert_eq!(config.upper_bound(10), Some(100));
        assert_eq!(config.upper_bound(80), Some(160));
    }
}

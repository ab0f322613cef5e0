// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! How long each step stays on screen. The engine never sleeps, so this is the only
//! place that knows about time.

use std::time::Duration;

use stepviz::StepEvent;

/// Bigger arrays have many more sort steps than search steps, so the two phases get
/// their own base delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingConfig {
    pub search_delay: Duration,
    pub sort_delay: Duration,
    /// Playback speed, `2.0` halves every delay.
    pub speed: f64,
}

const SEARCH_DELAY_SMALL_MS: f64 = 1_500.0;
const SEARCH_DELAY_LARGE_MS: f64 = 50.0;
const SMALL_ARRAY: usize = 10;
const LARGE_ARRAY: usize = 500;

/// `(largest array size, delay)`, in ascending order of size.
const SORT_DELAY_TIERS_MS: [(usize, u64); 5] =
    [(10, 150), (20, 100), (50, 50), (100, 20), (200, 10)];
const SORT_DELAY_FLOOR_MS: u64 = 5;

impl PacingConfig {
    /// Delays suggested for an array of `size` elements, at normal speed.
    #[must_use]
    pub fn for_size(size: usize) -> Self {
        Self {
            search_delay: search_delay_for(size),
            sort_delay: sort_delay_for(size),
            speed: 1.0,
        }
    }

    /// No delay at all.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            search_delay: Duration::ZERO,
            sort_delay: Duration::ZERO,
            speed: 1.0,
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// How long `event` should stay on screen before the next one is shown.
    #[must_use]
    pub fn delay_for(&self, event: &StepEvent) -> Duration {
        let base = match event {
            StepEvent::Counting { .. } => self.sort_delay * 7 / 10,
            StepEvent::Rebuilding { .. } | StepEvent::Found { .. } => self.sort_delay / 2,
            StepEvent::SortComplete { .. } => self.sort_delay,
            StepEvent::Probe { .. }
            | StepEvent::MoveLeft { .. }
            | StepEvent::MoveRight { .. }
            | StepEvent::NotFound { .. } => self.search_delay,
        };

        let is_normal_speed = (self.speed - 1.0).abs() < f64::EPSILON;
        if base.is_zero() || self.speed <= 0.0 || is_normal_speed {
            base
        } else {
            base.div_f64(self.speed)
        }
    }
}

/// `1.5s` up to 10 elements, `0.05s` from 500 elements, log interpolated in between.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn search_delay_for(size: usize) -> Duration {
    if size <= SMALL_ARRAY {
        return Duration::from_millis(1_500);
    }
    if size >= LARGE_ARRAY {
        return Duration::from_millis(50);
    }

    let progress = (size as f64 / SMALL_ARRAY as f64).ln()
        / (LARGE_ARRAY as f64 / SMALL_ARRAY as f64).ln();
    let span = SEARCH_DELAY_SMALL_MS - SEARCH_DELAY_LARGE_MS;
    let millis = (SEARCH_DELAY_SMALL_MS - span * progress)
        .clamp(SEARCH_DELAY_LARGE_MS, SEARCH_DELAY_SMALL_MS)
        .round();

    // Clamped to [50, 1500] above.
    Duration::from_millis(millis as u64)
}

fn sort_delay_for(size: usize) -> Duration {
    let millis = SORT_DELAY_TIERS_MS
        .iter()
        .find(|(max_size, _)| size <= *max_size)
        .map_or(SORT_DELAY_FLOOR_MS, |(_, millis)| *millis);
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const PROBE: StepEvent = StepEvent::Probe {
        left: 0,
        right: 4,
        mid: 2,
        value: 3,
        target: 4,
        step_count: 1,
    };

    #[test_case(1, 150)]
    #[test_case(10, 150)]
    #[test_case(11, 100)]
    #[test_case(20, 100)]
    #[test_case(50, 50)]
    #[test_case(100, 20)]
    #[test_case(200, 10)]
    #[test_case(201, 5)]
    #[test_case(1_000, 5)]
    fn sort_delay_tiers(size: usize, millis: u64) {
        assert_eq!(
            PacingConfig::for_size(size).sort_delay,
            Duration::from_millis(millis)
        );
    }

    #[test_case(1, 1_500)]
    #[test_case(10, 1_500)]
    #[test_case(20, 1_243)]
    #[test_case(100, 647)]
    #[test_case(500, 50)]
    #[test_case(5_000, 50)]
    fn search_delay_interpolation(size: usize, millis: u64) {
        assert_eq!(
            PacingConfig::for_size(size).search_delay,
            Duration::from_millis(millis)
        );
    }

    #[test]
    fn search_delay_shrinks_as_arrays_grow() {
        let delays: Vec<Duration> = (10..=500)
            .map(|size| PacingConfig::for_size(size).search_delay)
            .collect();
        assert!(delays.windows(2).all(|it| it[0] >= it[1]));
    }

    #[test]
    fn phase_multipliers() {
        let pacing = PacingConfig::for_size(10);
        let ms = |event: StepEvent| pacing.delay_for(&event).as_millis();

        assert_eq!(ms(StepEvent::Counting { index: 0, value: 1, count: 1 }), 105);
        assert_eq!(ms(StepEvent::Rebuilding { position: 0, value: 1 }), 75);
        assert_eq!(ms(StepEvent::SortComplete { len: 10 }), 150);
        assert_eq!(ms(StepEvent::Found { index: 2, value: 3, step_count: 1 }), 75);
        assert_eq!(ms(PROBE), 1_500);
        assert_eq!(ms(StepEvent::NotFound { target: 4, step_count: 3 }), 1_500);
    }

    #[test]
    fn speed_scales_every_delay() {
        let pacing = PacingConfig::for_size(10).with_speed(2.0);
        let delay = pacing.delay_for(&PROBE);
        assert!((delay.as_secs_f64() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn disabled_is_zero_for_every_phase() {
        let pacing = PacingConfig::disabled().with_speed(3.0);
        assert_eq!(pacing.delay_for(&PROBE), Duration::ZERO);
        assert_eq!(
            pacing.delay_for(&StepEvent::SortComplete { len: 1 }),
            Duration::ZERO
        );
    }
}

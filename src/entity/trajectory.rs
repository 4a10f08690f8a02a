//! Trajectory prediction and interception
//!
//! A creature walks in a straight line until something pushes it. Instead of
//! solving the closed-form rendezvous, the line is sampled at fixed steps
//! around "now" and every sample is priced as time penalty plus travel
//! distance. The cheapest sample is where a hero should head.

use serde::{Deserialize, Serialize};

use crate::core::constants::{INTERCEPT_STEP_PENALTY, TRAJECTORY_CENTER, TRAJECTORY_SAMPLES};
use crate::spatial::Position;

/// Per-turn displacement of a moving entity (raw frame)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_stationary(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Sampled past and future positions of a creature
///
/// Sample `TRAJECTORY_CENTER` is the current position; lower indices lie in
/// the past, higher ones in the future, one step apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    samples: [Position; TRAJECTORY_SAMPLES],
}

impl Trajectory {
    /// Extrapolate `origin` along `velocity` in both directions
    pub fn predict(origin: Position, velocity: Velocity) -> Self {
        let samples = std::array::from_fn(|i| {
            let steps = i as i32 - TRAJECTORY_CENTER as i32;
            origin.offset(steps * velocity.dx, steps * velocity.dy)
        });
        Self { samples }
    }

    pub fn samples(&self) -> &[Position] {
        &self.samples
    }

    /// The "now" sample
    pub fn current(&self) -> Position {
        self.samples[TRAJECTORY_CENTER]
    }

    /// Time penalty for meeting the creature at sample `index`
    #[inline]
    pub fn step_penalty(index: usize) -> f64 {
        INTERCEPT_STEP_PENALTY * index.abs_diff(TRAJECTORY_CENTER) as f64
    }

    /// Interception cost of every sample as seen from `from`
    pub fn interception_costs(&self, from: &Position) -> [f64; TRAJECTORY_SAMPLES] {
        std::array::from_fn(|i| Self::step_penalty(i) + from.distance(&self.samples[i]))
    }

    /// Cheapest sample as (index, cost); the earliest sample wins ties
    fn cheapest(&self, from: &Position) -> (usize, f64) {
        let costs = self.interception_costs(from);
        let mut best = (0, costs[0]);
        for (i, &cost) in costs.iter().enumerate().skip(1) {
            if cost < best.1 {
                best = (i, cost);
            }
        }
        best
    }

    pub fn smallest_interception_distance(&self, from: &Position) -> f64 {
        self.cheapest(from).1
    }

    pub fn best_intercept(&self, from: &Position) -> Position {
        self.samples[self.cheapest(from).0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_follow_velocity() {
        let trajectory = Trajectory::predict(Position::new(5000, 5000), Velocity::new(100, -50));
        let samples = trajectory.samples();

        assert_eq!(samples.len(), TRAJECTORY_SAMPLES);
        assert_eq!(trajectory.current(), Position::new(5000, 5000));
        assert_eq!(samples[0], Position::new(4500, 5250));
        assert_eq!(samples[TRAJECTORY_SAMPLES - 1], Position::new(5500, 4750));
    }

    #[test]
    fn test_step_penalty_zero_only_at_center() {
        for i in 0..TRAJECTORY_SAMPLES {
            let penalty = Trajectory::step_penalty(i);
            if i == TRAJECTORY_CENTER {
                assert_eq!(penalty, 0.0);
            } else {
                assert!(penalty > 0.0);
            }
        }
        assert_eq!(Trajectory::step_penalty(0), 2000.0);
    }

    #[test]
    fn test_stationary_creature_intercepts_now() {
        let trajectory = Trajectory::predict(Position::new(3000, 3000), Velocity::default());
        let from = Position::new(0, 0);

        assert_eq!(trajectory.best_intercept(&from), Position::new(3000, 3000));
        let expected = from.distance(&Position::new(3000, 3000));
        assert_eq!(trajectory.smallest_interception_distance(&from), expected);
    }

    #[test]
    fn test_approaching_creature_is_met_ahead() {
        // Creature walks toward the observer along the x axis
        let trajectory = Trajectory::predict(Position::new(6000, 0), Velocity::new(-400, 0));
        let from = Position::new(0, 0);

        // Each future step costs 400 but saves 400 of travel: all future
        // samples tie, so the earliest of them (now) wins.
        assert_eq!(trajectory.best_intercept(&from), Position::new(6000, 0));
        assert_eq!(trajectory.smallest_interception_distance(&from), 6000.0);
    }

    #[test]
    fn test_fast_creature_is_met_further_along() {
        let trajectory = Trajectory::predict(Position::new(8000, 0), Velocity::new(-800, 0));
        let from = Position::new(0, 0);

        // Every future step saves 800 of travel for 400 of penalty
        let best = trajectory.best_intercept(&from);
        assert_eq!(best, Position::new(4000, 0));
        assert_eq!(trajectory.smallest_interception_distance(&from), 2000.0 + 4000.0);
    }
}

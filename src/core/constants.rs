//! Fixed game rules - values the arena dictates, not tunables
//!
//! Tunable thresholds live in `core::config`.

// Board (raw frame)
pub const BOARD_WIDTH: i32 = 17630;
pub const BOARD_HEIGHT: i32 = 9000;
pub const BOARD_CENTER_X: i32 = BOARD_WIDTH / 2;
pub const BOARD_CENTER_Y: i32 = BOARD_HEIGHT / 2;

// Bases
pub const STARTING_BASE_HEALTH: i32 = 3;

// Trajectory sampling: one "now" sample plus the same count either side
pub const TRAJECTORY_SAMPLES: usize = 11;
pub const TRAJECTORY_CENTER: usize = TRAJECTORY_SAMPLES / 2;

/// Time penalty per trajectory step away from "now" (distance units)
pub const INTERCEPT_STEP_PENALTY: f64 = 400.0;

/// Mana spent per spell
pub const SPELL_COST: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_is_odd_and_centered() {
        assert_eq!(TRAJECTORY_SAMPLES % 2, 1);
        assert_eq!(TRAJECTORY_CENTER * 2 + 1, TRAJECTORY_SAMPLES);
    }

    #[test]
    fn test_board_center() {
        assert_eq!(BOARD_CENTER_X, 8815);
        assert_eq!(BOARD_CENTER_Y, 4500);
    }
}

//! Coordinate frames
//!
//! The game speaks in the raw frame: origin in the top-left corner, y growing
//! downward. The internal frame is centered on the board with y growing
//! upward, which makes the two bases point reflections of each other
//! (`internal -> -internal`). Distances are always measured in the raw frame;
//! the internal frame only answers orientation questions.

use serde::{Deserialize, Serialize};

use crate::core::constants::{BOARD_CENTER_X, BOARD_CENTER_Y};

/// A point in the game's own coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RawCoords {
    pub x: i32,
    pub y: i32,
}

impl RawCoords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A point in the board-centered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InternalCoords {
    pub x: i32,
    pub y: i32,
}

impl InternalCoords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point reflection through the board center
    pub fn reflected(&self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Affine map between the raw and internal frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateSystem {
    /// Raw position of the internal origin
    pub center: RawCoords,
}

impl CoordinateSystem {
    /// The arena frame, centered on the middle of the board
    pub const BOARD: CoordinateSystem = CoordinateSystem {
        center: RawCoords {
            x: BOARD_CENTER_X,
            y: BOARD_CENTER_Y,
        },
    };

    #[inline]
    pub fn to_internal(&self, raw: RawCoords) -> InternalCoords {
        InternalCoords::new(raw.x - self.center.x, -(raw.y - self.center.y))
    }

    #[inline]
    pub fn to_raw(&self, internal: InternalCoords) -> RawCoords {
        RawCoords::new(internal.x + self.center.x, self.center.y - internal.y)
    }
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::BOARD
    }
}

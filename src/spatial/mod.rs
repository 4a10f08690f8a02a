//! Board geometry: coordinate frames, positions, camp bands

pub mod frame;
pub mod position;

pub use frame::{CoordinateSystem, InternalCoords, RawCoords};
pub use position::{distance, CampBand, Position};

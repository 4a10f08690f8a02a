//! Positions, distances and camp bands

use rand::Rng;

use crate::core::config::CampConfig;
use crate::spatial::frame::{CoordinateSystem, InternalCoords, RawCoords};

/// Straight-line distance between two raw points
#[inline]
pub fn distance(a: RawCoords, b: RawCoords) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// A board position known in both frames
///
/// Fields are private so the two frames can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    raw: RawCoords,
    internal: InternalCoords,
}

impl Position {
    /// Position from raw game coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self::from_raw(RawCoords::new(x, y))
    }

    pub fn from_raw(raw: RawCoords) -> Self {
        Self {
            raw,
            internal: CoordinateSystem::BOARD.to_internal(raw),
        }
    }

    pub fn from_internal(internal: InternalCoords) -> Self {
        Self {
            raw: CoordinateSystem::BOARD.to_raw(internal),
            internal,
        }
    }

    #[inline]
    pub fn raw(&self) -> RawCoords {
        self.raw
    }

    #[inline]
    pub fn internal(&self) -> InternalCoords {
        self.internal
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.raw.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.raw.y
    }

    #[inline]
    pub fn distance(&self, other: &Position) -> f64 {
        distance(self.raw, other.raw)
    }

    /// Shift by a raw-frame offset
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.raw.x + dx, self.raw.y + dy)
    }

    /// Random point at most `radius` away from this one
    ///
    /// Samples the bounding square and rejects corners. After a handful of
    /// misses it gives up and returns the point itself so the cost stays
    /// bounded.
    pub fn jittered<R: Rng + ?Sized>(&self, radius: i32, rng: &mut R) -> Position {
        if radius <= 0 {
            return *self;
        }

        let limit = (radius as i64) * (radius as i64);
        for _ in 0..JITTER_ATTEMPTS {
            let dx = rng.gen_range(-radius..radius);
            let dy = rng.gen_range(-radius..radius);
            if (dx as i64) * (dx as i64) + (dy as i64) * (dy as i64) <= limit {
                return self.offset(dx, dy);
            }
        }
        *self
    }
}

const JITTER_ATTEMPTS: usize = 8;

/// Which of the concentric camp bands a distance falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampBand {
    /// Within striking distance of the base
    Critical,
    /// Inside the camp but not critical
    Inside,
    /// Strictly between the camp edge and the outer radius
    Near,
    Outside,
}

impl CampBand {
    pub fn classify(distance: f64, camp: &CampConfig) -> Self {
        if distance <= camp.critical_radius {
            CampBand::Critical
        } else if distance <= camp.inside_radius {
            CampBand::Inside
        } else if distance < camp.near_radius {
            CampBand::Near
        } else {
            CampBand::Outside
        }
    }

    /// Band of `point` relative to `base`
    pub fn of(point: &Position, base: &Position, camp: &CampConfig) -> Self {
        Self::classify(point.distance(base), camp)
    }

    /// In the camp, critical band included
    pub fn is_inside(self) -> bool {
        matches!(self, CampBand::Critical | CampBand::Inside)
    }

    pub fn is_critical(self) -> bool {
        self == CampBand::Critical
    }

    /// Inside or near the camp
    pub fn is_relevant(self) -> bool {
        self != CampBand::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_distance_pythagorean() {
        let a = Position::new(0, 0);
        let b = Position::new(3000, 4000);
        assert_eq!(a.distance(&b), 5000.0);
        assert_eq!(b.distance(&a), 5000.0);
    }

    #[test]
    fn test_position_frames_stay_in_sync() {
        let p = Position::new(100, 200);
        assert_eq!(p.internal(), CoordinateSystem::BOARD.to_internal(p.raw()));

        let q = Position::from_internal(p.internal());
        assert_eq!(q, p);
    }

    #[test]
    fn test_offset() {
        let p = Position::new(1000, 1000).offset(-500, 250);
        assert_eq!(p.raw(), RawCoords::new(500, 1250));
    }

    #[test]
    fn test_band_edges() {
        let camp = CampConfig::default();
        assert_eq!(CampBand::classify(0.0, &camp), CampBand::Critical);
        assert_eq!(CampBand::classify(2000.0, &camp), CampBand::Critical);
        assert_eq!(CampBand::classify(2000.5, &camp), CampBand::Inside);
        assert_eq!(CampBand::classify(5000.0, &camp), CampBand::Inside);
        assert_eq!(CampBand::classify(5000.1, &camp), CampBand::Near);
        assert_eq!(CampBand::classify(8999.9, &camp), CampBand::Near);
        assert_eq!(CampBand::classify(9000.0, &camp), CampBand::Outside);
    }

    #[test]
    fn test_band_predicates() {
        assert!(CampBand::Critical.is_inside());
        assert!(CampBand::Critical.is_critical());
        assert!(!CampBand::Inside.is_critical());
        assert!(!CampBand::Near.is_inside());
        assert!(CampBand::Near.is_relevant());
        assert!(!CampBand::Outside.is_relevant());
    }

    #[test]
    fn test_jitter_stays_within_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let anchor = Position::new(1000, 1000);
        for _ in 0..200 {
            let p = anchor.jittered(2500, &mut rng);
            assert!(p.distance(&anchor) <= 2500.0);
        }
    }

    #[test]
    fn test_jitter_is_reproducible() {
        let anchor = Position::new(5000, 5000);
        let mut rng1 = ChaCha8Rng::seed_from_u64(9);
        let mut rng2 = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(anchor.jittered(800, &mut rng1), anchor.jittered(800, &mut rng2));
    }

    #[test]
    fn test_zero_radius_jitter_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let anchor = Position::new(42, 24);
        assert_eq!(anchor.jittered(0, &mut rng), anchor);
    }
}

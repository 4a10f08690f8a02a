//! Property tests for the geometry and targeting primitives

use camp_warden::ai::FocusClaims;
use camp_warden::core::types::EntityId;
use camp_warden::entity::{Trajectory, Velocity};
use camp_warden::spatial::{CoordinateSystem, Position, RawCoords};
use proptest::prelude::*;

proptest! {
    /// Converting to the internal frame and back is the identity
    #[test]
    fn prop_frame_round_trip(x in -20000i32..40000, y in -20000i32..20000) {
        let frame = CoordinateSystem::BOARD;
        let raw = RawCoords::new(x, y);
        prop_assert_eq!(frame.to_raw(frame.to_internal(raw)), raw);
    }

    /// Mirroring through the board center twice returns the start point
    #[test]
    fn prop_reflection_is_an_involution(x in 0i32..17631, y in 0i32..9001) {
        let p = Position::new(x, y);
        let mirrored = Position::from_internal(p.internal().reflected());
        prop_assert_eq!(mirrored.x() + x, 17630);
        prop_assert_eq!(mirrored.y() + y, 9000);
        prop_assert_eq!(Position::from_internal(mirrored.internal().reflected()), p);
    }

    /// Distance is symmetric and zero to itself
    #[test]
    fn prop_distance_symmetric(
        ax in 0i32..17631, ay in 0i32..9001,
        bx in 0i32..17631, by in 0i32..9001
    ) {
        let a = Position::new(ax, ay);
        let b = Position::new(bx, by);
        prop_assert_eq!(a.distance(&b), b.distance(&a));
        prop_assert_eq!(a.distance(&a), 0.0);
    }

    /// A stationary creature is best met where it stands
    #[test]
    fn prop_stationary_trajectory_collapses(
        cx in 0i32..17631, cy in 0i32..9001,
        hx in 0i32..17631, hy in 0i32..9001
    ) {
        let here = Position::new(cx, cy);
        let trajectory = Trajectory::predict(here, Velocity::default());
        let hero = Position::new(hx, hy);

        prop_assert!(trajectory.samples().iter().all(|s| *s == here));
        prop_assert_eq!(trajectory.best_intercept(&hero), here);
        prop_assert_eq!(trajectory.smallest_interception_distance(&hero), hero.distance(&here));
    }

    /// Backing away from a receding creature never makes it cheaper to catch
    #[test]
    fn prop_receding_creature_cost_grows_with_distance(
        cx in 5000i32..12000, cy in 1000i32..8000,
        speed in 1i32..=400,
        vertical in any::<bool>()
    ) {
        let creature = Position::new(cx, cy);
        let (ux, uy) = if vertical { (0, 1) } else { (1, 0) };
        let trajectory = Trajectory::predict(creature, Velocity::new(ux * speed, uy * speed));

        let mut previous = 0.0;
        for gap in (0..4000).step_by(100) {
            let observer = creature.offset(-ux * gap, -uy * gap);
            let cost = trajectory.smallest_interception_distance(&observer);
            prop_assert!(cost >= previous, "cost fell from {} to {} at gap {}", previous, cost, gap);
            previous = cost;
        }
    }

    /// Only the present sample goes unpenalized
    #[test]
    fn prop_step_penalty_zero_only_now(index in 0usize..11) {
        let penalty = Trajectory::step_penalty(index);
        prop_assert_eq!(penalty == 0.0, index == 5);
        prop_assert!(penalty >= 0.0);
    }

    /// A claimed target is "other" for everyone but its claimant
    #[test]
    fn prop_claims_exclude_only_the_claimant(
        claims in proptest::collection::btree_map(0i32..6, 100i32..110, 0..6),
        probe in 0i32..6,
        target in 100i32..110
    ) {
        let mut focus = FocusClaims::new();
        for (hero, claimed) in &claims {
            focus.claim(EntityId(*hero), Some(EntityId(*claimed)));
        }

        let expected = claims
            .iter()
            .any(|(hero, claimed)| *claimed == target && *hero != probe);
        prop_assert_eq!(focus.is_claimed_by_other(EntityId(target), EntityId(probe)), expected);
    }
}

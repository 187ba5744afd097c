use std::f64::consts::{PI, TAU};

use heading_core::{AngleIntegrator, WrapPolicy, normalize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_lands_in_canonical_range(h in -1e9f64..1e9) {
        let n = normalize(h);
        prop_assert!((-PI..PI).contains(&n), "normalize({h}) = {n}");
    }

    #[test]
    fn normalize_is_idempotent(h in -1e9f64..1e9) {
        let once = normalize(h);
        let twice = normalize(once);
        prop_assert!((twice - once).abs() < 1e-9, "{once} vs {twice}");
    }

    #[test]
    fn normalize_is_invariant_under_full_turns(h in -1e3f64..1e3, turns in -100i32..100) {
        let shifted = h + f64::from(turns) * TAU;
        prop_assert!((normalize(shifted) - normalize(h)).abs() < 1e-9);
    }

    #[test]
    fn integration_is_additive_in_dt(rate in -10.0f64..10.0, dt in 0.0f64..1.0) {
        let mut whole = AngleIntegrator::new(WrapPolicy::Unbounded);
        let mut halves = AngleIntegrator::new(WrapPolicy::Unbounded);
        whole.integrate(rate, dt);
        halves.integrate(rate, dt / 2.0);
        halves.integrate(rate, dt / 2.0);
        prop_assert!((whole.heading() - halves.heading()).abs() < 1e-9);
    }

    #[test]
    fn corrected_heading_never_escapes_range(
        rates in prop::collection::vec(-50.0f64..50.0, 1..64),
        policy_in_place in any::<bool>(),
    ) {
        let policy = if policy_in_place { WrapPolicy::InPlace } else { WrapPolicy::Unbounded };
        let mut i = AngleIntegrator::new(policy);
        for rate in rates {
            let (_, corrected) = i.integrate(rate, 0.01);
            prop_assert!((-PI..PI).contains(&corrected));
        }
    }
}

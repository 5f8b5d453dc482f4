//! Unit tests for triage-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CellId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(CellId(100) > CellId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(CellId::default(), CellId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::GridPos;

    #[test]
    fn wrap_negative_and_overflowing() {
        assert_eq!(GridPos::new(-1, 0).wrap(15, 15), GridPos::new(14, 0));
        assert_eq!(GridPos::new(15, 31).wrap(15, 15), GridPos::new(0, 1));
        assert_eq!(GridPos::new(-16, -30).wrap(15, 15), GridPos::new(14, 0));
    }

    #[test]
    fn distance_sq_is_raw() {
        // No wrap: (0,0)→(14,0) is far even though it is one step on a torus.
        assert_eq!(GridPos::new(0, 0).distance_sq(GridPos::new(14, 0)), 196);
        assert_eq!(GridPos::new(1, 2).distance_sq(GridPos::new(4, 6)), 25);
    }

    #[test]
    fn torus_distances_take_short_way() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(14, 13);
        assert_eq!(a.torus_chebyshev(b, 15, 15), 2);
        assert_eq!(a.torus_manhattan(b, 15, 15), 3);
        assert_eq!(a.torus_chebyshev(GridPos::new(5, 0), 15, 15), 5);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(5)), 10);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u8 = rng.gen_range(1..=10);
            assert!((1..=10).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{DecayRule, TriageConfig, TriageError};

    #[test]
    fn default_is_valid() {
        assert!(TriageConfig::default().validate().is_ok());
    }

    #[test]
    fn cell_id_overflow_rejected() {
        let cfg = TriageConfig { width: 65_536, height: 65_536, ..TriageConfig::default() };
        assert!(matches!(cfg.validate(), Err(TriageError::Config(_))));
    }

    #[test]
    fn zero_dimension_rejected() {
        let cfg = TriageConfig { width: 0, ..TriageConfig::default() };
        assert!(matches!(cfg.validate(), Err(TriageError::Config(_))));
        let cfg = TriageConfig { height: 0, ..TriageConfig::default() };
        assert!(matches!(cfg.validate(), Err(TriageError::Config(_))));
    }

    #[test]
    fn non_positive_ttl_parameters_rejected() {
        let cfg = TriageConfig { ttl_constant: 0, ..TriageConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = TriageConfig { healed_ttl: -5, ..TriageConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_denominator_rejected() {
        let cfg = TriageConfig {
            decay: DecayRule::Scaled { numerator: 1, denominator: 0 },
            ..TriageConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn initial_ttl_is_floor_division() {
        let cfg = TriageConfig::default();
        assert_eq!(cfg.initial_ttl(1), 99);
        assert_eq!(cfg.initial_ttl(10), 9);
        assert_eq!(cfg.initial_ttl(7), 14);
    }

    #[test]
    fn decay_rules() {
        assert_eq!(DecayRule::HalfInjury.amount(10), 5);
        assert_eq!(DecayRule::HalfInjury.amount(1), 0);
        assert_eq!(DecayRule::HalfInjury.amount(7), 3);
        assert_eq!(DecayRule::FullInjury.amount(7), 7);
        assert_eq!(DecayRule::Scaled { numerator: 3, denominator: 2 }.amount(5), 7);
        assert_eq!(DecayRule::HalfInjury.amount(0), 0);
    }
}

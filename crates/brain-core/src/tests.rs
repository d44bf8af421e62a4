//! Unit tests for brain-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActivityId, AgentId, KeyId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(KeyId(100) > KeyId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(KeyId::INVALID.0, u16::MAX);
        assert_eq!(ActivityId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(KeyId(7).to_string(), "KeyId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{AgentId, AgentRng, Tick, TickRange};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn fixed_range_always_samples_same() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let r = TickRange::fixed(7);
        for _ in 0..100 {
            assert_eq!(r.sample(&mut rng), 7);
        }
    }

    #[test]
    fn sample_inclusive_bounds() {
        let mut rng = AgentRng::new(1, AgentId(0));
        let r = TickRange::new(3, 5);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = r.sample(&mut rng);
            assert!((3..=5).contains(&v), "out of range: {v}");
            seen[(v - 3) as usize] = true;
        }
        // Both ends of the inclusive range must be reachable.
        assert!(seen[0] && seen[2], "bounds never sampled: {seen:?}");
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
        assert_eq!(TickRange::new(1, 4).to_string(), "[1, 4]");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_permutes_in_place() {
        let mut rng = AgentRng::new(7, AgentId(0));
        let mut items: Vec<u32> = (0..16).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn sim_rng_children_diverge() {
        let mut root = SimRng::new(99);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }
}

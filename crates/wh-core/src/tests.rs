//! Unit tests for wh-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PackageId, ShelfId, StationId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn narrow_ids_reject_overflow() {
        assert!(StationId::try_from(70_000usize).is_err());
        assert_eq!(StationId::try_from(3usize).unwrap(), StationId(3));
    }

    #[test]
    fn ordering() {
        assert!(ShelfId(0) < ShelfId(1));
        assert!(PackageId(100) > PackageId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 2);
        let b = Cell::new(4, -1);
        assert_eq!(a.manhattan(b), 6);
        assert_eq!(b.manhattan(a), 6);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn neighbor_order_is_east_west_south_north() {
        let c = Cell::new(5, 5);
        assert_eq!(
            c.neighbors(),
            [Cell::new(6, 5), Cell::new(4, 5), Cell::new(5, 6), Cell::new(5, 4)]
        );
        assert!(c.neighbors().iter().all(|&n| c.is_adjacent(n)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 9).to_string(), "(3, 9)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - t, 5);
    }

    #[test]
    fn zero_interval_never_fires() {
        assert!(!Tick(0).is_multiple_of(0));
        assert!(Tick(0).is_multiple_of(5));
        assert!(Tick(10).is_multiple_of(5));
        assert!(!Tick(11).is_multiple_of(5));
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn sample_is_distinct_and_capped() {
        let mut rng = SimRng::new(3);
        let pool = [1, 2, 3, 4, 5];
        let picked = rng.sample(&pool, 3);
        assert_eq!(picked.len(), 3);
        let mut sorted = picked.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);

        assert_eq!(rng.sample(&pool, 10).len(), 5);
        assert!(rng.sample(&pool, 0).is_empty());
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = SimRng::new(5);
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn child_streams_differ() {
        let mut root = SimRng::new(11);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let a: Vec<u64> = (0..4).map(|_| c1.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..4).map(|_| c2.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b);
    }
}

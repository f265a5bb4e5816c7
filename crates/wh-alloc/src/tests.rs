//! Unit tests for wh-alloc.

#[cfg(test)]
mod shelf {
    use wh_core::ShelfId;

    use crate::{AllocError, ShelfStatus, ShelfTable};

    #[test]
    fn lifecycle_transitions() {
        let mut t = ShelfTable::new(1, ShelfStatus::Empty);
        let s = ShelfId(0);
        t.fill(s).unwrap();
        assert_eq!(t.status(s), ShelfStatus::Full);
        t.mark_target(s, true).unwrap();
        assert!(t.status(s).is_urgent());
        t.take(s).unwrap();
        assert_eq!(t.status(s), ShelfStatus::Empty);
    }

    #[test]
    fn empty_cannot_become_target() {
        let mut t = ShelfTable::new(1, ShelfStatus::Empty);
        let err = t.mark_target(ShelfId(0), false).unwrap_err();
        assert_eq!(
            err,
            AllocError::IllegalTransition { shelf: ShelfId(0), from: "empty", to: "target" }
        );
        assert_eq!(t.status(ShelfId(0)), ShelfStatus::Empty);
    }

    #[test]
    fn target_cannot_become_full() {
        let mut t = ShelfTable::from_statuses(vec![ShelfStatus::Target { urgent: false }]);
        assert!(t.fill(ShelfId(0)).is_err());
    }

    #[test]
    fn urgency_only_on_targets() {
        assert!(!ShelfStatus::Full.is_urgent());
        assert!(!ShelfStatus::Target { urgent: false }.is_urgent());
        assert!(ShelfStatus::Target { urgent: true }.is_target());
    }

    #[test]
    fn ids_where_is_ascending() {
        let t = ShelfTable::from_statuses(vec![
            ShelfStatus::Full,
            ShelfStatus::Empty,
            ShelfStatus::Full,
        ]);
        assert_eq!(t.ids_where(|_, s| s == ShelfStatus::Full), vec![ShelfId(0), ShelfId(2)]);
        assert_eq!(t.count_where(|s| s == ShelfStatus::Empty), 1);
    }
}

#[cfg(test)]
mod claims {
    use wh_core::ShelfId;

    use crate::ClaimSet;

    #[test]
    fn no_duplicates() {
        let mut c = ClaimSet::new();
        assert!(c.claim(ShelfId(4)));
        assert!(!c.claim(ShelfId(4)));
        assert_eq!(c.len(), 1);
        assert!(c.release(ShelfId(4)));
        assert!(!c.release(ShelfId(4)));
        assert!(c.is_empty());
    }

    #[test]
    fn sorted_listing() {
        let mut c = ClaimSet::new();
        for i in [5, 1, 3] {
            c.claim(ShelfId(i));
        }
        assert_eq!(c.sorted(), vec![ShelfId(1), ShelfId(3), ShelfId(5)]);
    }
}

#[cfg(test)]
mod allocator {
    use wh_core::{ShelfId, SimRng};

    use crate::{AllocError, Allocator, ShelfStatus, ShelfTable};

    fn allocator(statuses: Vec<ShelfStatus>) -> Allocator {
        Allocator::new(ShelfTable::from_statuses(statuses))
    }

    #[test]
    fn restock_claims_only_unclaimed_empty() {
        let mut a = allocator(vec![ShelfStatus::Full, ShelfStatus::Empty, ShelfStatus::Empty]);
        let mut rng = SimRng::new(1);
        let first = a.claim_restock_target(&mut rng).unwrap();
        let second = a.claim_restock_target(&mut rng).unwrap();
        assert_ne!(first, second);
        assert!([first, second].iter().all(|s| *s != ShelfId(0)));
        assert_eq!(
            a.claim_restock_target(&mut rng),
            Err(AllocError::NoCandidate("empty shelf"))
        );
    }

    #[test]
    fn complete_restock_fills_and_releases() {
        let mut a = allocator(vec![ShelfStatus::Empty]);
        let mut rng = SimRng::new(2);
        let s = a.claim_restock_target(&mut rng).unwrap();
        a.complete_restock(s).unwrap();
        assert_eq!(a.shelves.status(s), ShelfStatus::Full);
        assert!(!a.restock_claims.contains(s));
    }

    #[test]
    fn pickup_prefers_urgent() {
        let mut rng = SimRng::new(3);
        for _ in 0..32 {
            let mut a = allocator(vec![
                ShelfStatus::Target { urgent: false },
                ShelfStatus::Target { urgent: true },
                ShelfStatus::Target { urgent: false },
            ]);
            assert_eq!(a.claim_pickup_target(&mut rng).unwrap(), ShelfId(1));
            // Urgent one is taken; the next claim falls back to normal targets.
            let next = a.claim_pickup_target(&mut rng).unwrap();
            assert!(next == ShelfId(0) || next == ShelfId(2));
        }
    }

    #[test]
    fn pickup_without_targets_is_unavailable() {
        let mut a = allocator(vec![ShelfStatus::Full, ShelfStatus::Empty]);
        assert_eq!(
            a.claim_pickup_target(&mut SimRng::new(4)),
            Err(AllocError::NoCandidate("target shelf"))
        );
    }

    #[test]
    fn complete_pickup_empties_and_releases() {
        let mut a = allocator(vec![ShelfStatus::Target { urgent: true }]);
        let s = a.claim_pickup_target(&mut SimRng::new(5)).unwrap();
        a.complete_pickup(s).unwrap();
        assert_eq!(a.shelves.status(s), ShelfStatus::Empty);
        assert!(a.pickup_claims.is_empty());
    }

    #[test]
    fn marking_respects_batch_and_eligibility() {
        let mut a = allocator(vec![
            ShelfStatus::Full,
            ShelfStatus::Full,
            ShelfStatus::Empty,
            ShelfStatus::Full,
            ShelfStatus::Full,
        ]);
        let mut rng = SimRng::new(6);
        let marked = a.mark_for_delivery(&mut rng, 3, 0.5);
        assert_eq!(marked.len(), 3);
        for m in &marked {
            assert_ne!(m.shelf, ShelfId(2));
            assert_eq!(a.shelves.status(m.shelf), ShelfStatus::Target { urgent: m.urgent });
        }
        // Only one Full shelf left.
        assert_eq!(a.mark_for_delivery(&mut rng, 3, 0.5).len(), 1);
        assert!(a.mark_for_delivery(&mut rng, 3, 0.5).is_empty());
    }

    #[test]
    fn urgency_probability_extremes() {
        let mut a = allocator(vec![ShelfStatus::Full; 4]);
        let mut rng = SimRng::new(7);
        assert!(a.mark_for_delivery(&mut rng, 2, 1.0).iter().all(|m| m.urgent));
        assert!(a.mark_for_delivery(&mut rng, 2, 0.0).iter().all(|m| !m.urgent));
    }
}

#[cfg(test)]
mod pickup {
    use wh_core::PickupId;

    use crate::PickupStock;

    #[test]
    fn take_until_empty() {
        let mut p = PickupStock::new(2, 1, 10);
        assert!(p.take(PickupId(0)));
        assert!(!p.take(PickupId(0)));
        assert_eq!(p.counts(), &[0, 1]);
    }

    #[test]
    fn refills_on_interval() {
        let mut p = PickupStock::new(2, 1, 3);
        p.take(PickupId(1));
        assert!(!p.tick());
        assert!(!p.tick());
        assert_eq!(p.count(PickupId(1)), 0);
        assert!(p.tick());
        assert_eq!(p.counts(), &[1, 1]);
    }

    #[test]
    fn set_count_caps_at_capacity() {
        let mut p = PickupStock::new(1, 1, 10);
        p.set_count(PickupId(0), 7);
        assert_eq!(p.count(PickupId(0)), 1);
    }
}

#[cfg(test)]
mod stations {
    use wh_core::{Cell, StationId};

    use crate::select_station;

    #[test]
    fn nearest_free_station() {
        let stations = [Cell::new(0, 0), Cell::new(10, 0), Cell::new(5, 5)];
        let from = Cell::new(1, 1);
        assert_eq!(select_station(&stations, &[], from), Some(StationId(0)));
        assert_eq!(select_station(&stations, &[StationId(0)], from), Some(StationId(2)));
    }

    #[test]
    fn all_occupied_falls_back_to_nearest() {
        let stations = [Cell::new(0, 0), Cell::new(10, 0)];
        let occupied = [StationId(0), StationId(1)];
        assert_eq!(select_station(&stations, &occupied, Cell::new(9, 0)), Some(StationId(1)));
    }

    #[test]
    fn no_stations() {
        assert_eq!(select_station(&[], &[], Cell::new(0, 0)), None);
    }

    #[test]
    fn ties_go_to_lower_id() {
        let stations = [Cell::new(0, 2), Cell::new(2, 0)];
        assert_eq!(select_station(&stations, &[], Cell::new(0, 0)), Some(StationId(0)));
    }
}

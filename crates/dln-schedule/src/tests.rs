//! Unit tests for dln-schedule.

mod helpers {
    use dln_core::Timestamp;

    use crate::{Delivery, Priority};

    /// A fixed "now" so urgency scores are deterministic.
    pub const NOW: Timestamp = Timestamp(1_700_000_000);

    pub fn delivery(id: &str, dest: &str, load: f64, hours: i64, priority: Priority) -> Delivery {
        Delivery::new(id, dest, load, NOW.plus_hours(hours), 1.0, priority)
    }
}

mod dispatch {
    use std::cmp::Ordering;

    use super::helpers::delivery;
    use crate::{dispatch_order, Priority};

    #[test]
    fn priority_dominates_deadline() {
        let urgent_low = delivery("D1", "C1", 1.0, 1, Priority::Low);
        let relaxed_high = delivery("D2", "C2", 1.0, 20, Priority::High);
        assert_eq!(dispatch_order(&relaxed_high, &urgent_low), Ordering::Less);
        assert_eq!(dispatch_order(&urgent_low, &relaxed_high), Ordering::Greater);
    }

    #[test]
    fn equal_priority_breaks_by_deadline() {
        let later = delivery("D1", "C1", 1.0, 10, Priority::High);
        let sooner = delivery("D2", "C2", 1.0, 2, Priority::High);
        assert_eq!(dispatch_order(&sooner, &later), Ordering::Less);
    }

    #[test]
    fn full_ties_are_equal_never_by_id() {
        let a = delivery("AAA", "C1", 1.0, 5, Priority::Medium);
        let b = delivery("ZZZ", "C2", 9.0, 5, Priority::Medium);
        assert_eq!(dispatch_order(&a, &b), Ordering::Equal);
        assert_eq!(dispatch_order(&b, &a), Ordering::Equal);
    }
}

mod queue {
    use super::helpers::delivery;
    use crate::{DeliveryQueue, Priority};

    #[test]
    fn polls_in_dispatch_order() {
        let mut q = DeliveryQueue::new();
        q.push(delivery("D1", "C1", 1.0, 5, Priority::Low));
        q.push(delivery("D2", "C2", 1.0, 10, Priority::High));
        q.push(delivery("D3", "C3", 1.0, 2, Priority::High));

        assert_eq!(q.pop().unwrap().id.as_str(), "D3"); // HIGH, +2h
        assert_eq!(q.pop().unwrap().id.as_str(), "D2"); // HIGH, +10h
        assert_eq!(q.pop().unwrap().id.as_str(), "D1"); // LOW, +5h
        assert!(q.pop().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn interleaved_push_pop() {
        let mut q = DeliveryQueue::new();
        q.push(delivery("D1", "C1", 1.0, 5, Priority::Medium));
        assert_eq!(q.pop().unwrap().id.as_str(), "D1");
        q.push(delivery("D2", "C2", 1.0, 9, Priority::Low));
        q.push(delivery("D3", "C3", 1.0, 1, Priority::Medium));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop().unwrap().id.as_str(), "D3");
        assert_eq!(q.pop().unwrap().id.as_str(), "D2");
    }
}

mod vehicle {
    use super::helpers::delivery;
    use crate::{Priority, Vehicle};

    #[test]
    fn fills_up_and_goes_unavailable() {
        let mut v = Vehicle::new("V1", 10.0, "H1");
        let d1 = delivery("D1", "C1", 6.0, 5, Priority::High);
        let d2 = delivery("D2", "C2", 4.0, 5, Priority::Low);

        assert!(v.can_accept(&d1));
        v.assign(&d1);
        assert_eq!(v.current_load(), 6.0);
        assert!(v.is_available());

        // Exactly reaching capacity flips availability.
        assert!(v.can_accept(&d2));
        v.assign(&d2);
        assert_eq!(v.current_load(), 10.0);
        assert!(!v.is_available());
        assert_eq!(v.assigned().len(), 2);
    }

    #[test]
    fn rejects_loads_over_remaining_room() {
        let mut v = Vehicle::new("V1", 10.0, "H1");
        v.assign(&delivery("D1", "C1", 7.0, 5, Priority::High));
        assert!(!v.can_accept(&delivery("D2", "C2", 4.0, 5, Priority::Low)));
        assert!(v.can_accept(&delivery("D3", "C3", 3.0, 5, Priority::Low)));
    }
}

mod scheduler {
    use dln_core::{DeliveryId, VehicleId};

    use super::helpers::{delivery, NOW};
    use crate::{DeliveryScheduler, Priority, Vehicle};

    #[test]
    fn assigns_to_emptier_vehicle() {
        let mut s = DeliveryScheduler::new();
        s.add_vehicle(Vehicle::new("V1", 10.0, "H1"));
        s.add_vehicle(Vehicle::new("V2", 10.0, "H2"));

        // First delivery goes somewhere; the second must go to the other
        // vehicle, which now has lower load and fewer stops.
        s.add_delivery(delivery("D1", "C1", 4.0, 5, Priority::High));
        let first = s.schedule_deliveries(NOW);
        let (_, first_vehicle) = &first.assigned[0];

        s.add_delivery(delivery("D2", "C2", 4.0, 5, Priority::High));
        let second = s.schedule_deliveries(NOW);
        let (_, second_vehicle) = &second.assigned[0];

        assert_ne!(first_vehicle, second_vehicle);
    }

    #[test]
    fn drains_in_dispatch_order_and_reports() {
        let mut s = DeliveryScheduler::new();
        s.add_vehicle(Vehicle::new("V1", 100.0, "H1"));

        s.add_delivery(delivery("D1", "C1", 1.0, 5, Priority::Low));
        s.add_delivery(delivery("D2", "C2", 1.0, 10, Priority::High));
        s.add_delivery(delivery("D3", "C3", 1.0, 2, Priority::High));

        let report = s.schedule_deliveries(NOW);
        let order: Vec<&str> = report.assigned.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(order, vec!["D3", "D2", "D1"]);
        assert!(report.dropped.is_empty());

        // Schedule rows record assignment order.
        let row = &s.schedule()[&VehicleId::from("V1")];
        assert_eq!(row[0].id.as_str(), "D3");
        assert_eq!(row[2].id.as_str(), "D1");
    }

    #[test]
    fn unassignable_delivery_is_dropped_not_retried() {
        let mut s = DeliveryScheduler::new();
        s.add_vehicle(Vehicle::new("V1", 5.0, "H1"));

        s.add_delivery(delivery("D1", "C1", 9.0, 5, Priority::High)); // too big
        s.add_delivery(delivery("D2", "C2", 3.0, 5, Priority::Low));

        let report = s.schedule_deliveries(NOW);
        assert_eq!(report.dropped, vec![DeliveryId::from("D1")]);
        assert_eq!(report.assigned.len(), 1);
        assert_eq!(s.pending_count(), 0);

        // A later pass does not resurrect the dropped delivery.
        let again = s.schedule_deliveries(NOW);
        assert!(again.assigned.is_empty());
        assert!(again.dropped.is_empty());
    }

    #[test]
    fn full_vehicle_is_never_offered_again() {
        let mut s = DeliveryScheduler::new();
        s.add_vehicle(Vehicle::new("V1", 10.0, "H1"));
        s.add_delivery(delivery("D1", "C1", 10.0, 5, Priority::High));
        let report = s.schedule_deliveries(NOW);
        assert_eq!(report.assigned.len(), 1);
        assert!(!s.vehicle(&"V1".into()).unwrap().is_available());

        // Even a tiny later delivery cannot use the full vehicle.
        s.add_delivery(delivery("D2", "C2", 0.5, 1, Priority::High));
        let report = s.schedule_deliveries(NOW);
        assert_eq!(report.dropped, vec![DeliveryId::from("D2")]);
    }

    #[test]
    fn urgent_deadline_lowers_the_score() {
        // One vehicle pre-loaded to a high score, one empty.  The urgent
        // delivery must still pick the empty one; this pins the sign of the
        // urgency term (subtracted, so near deadlines attract assignment).
        let mut s = DeliveryScheduler::new();
        s.add_vehicle(Vehicle::new("V1", 10.0, "H1"));
        s.add_delivery(delivery("D1", "C1", 5.0, 2, Priority::High));
        s.schedule_deliveries(NOW);

        // V1 now: load 5/10 → 50, one stop → 10.  Score for a +2h delivery:
        // 50 + 10 − 10 = 50.  A fresh V2 scores 0 + 0 − 10 = −10.
        s.add_vehicle(Vehicle::new("V2", 10.0, "H2"));
        s.add_delivery(delivery("D2", "C2", 2.0, 2, Priority::High));
        let report = s.schedule_deliveries(NOW);
        assert_eq!(report.assigned[0].1, VehicleId::from("V2"));
    }

    #[test]
    fn passes_are_incremental() {
        let mut s = DeliveryScheduler::new();
        s.add_vehicle(Vehicle::new("V1", 10.0, "H1"));

        s.add_delivery(delivery("D1", "C1", 6.0, 5, Priority::High));
        s.schedule_deliveries(NOW);
        assert_eq!(s.vehicle(&"V1".into()).unwrap().current_load(), 6.0);

        // Second pass continues from the mutated fleet: only 4 units remain.
        s.add_delivery(delivery("D2", "C2", 5.0, 5, Priority::High)); // won't fit
        s.add_delivery(delivery("D3", "C3", 4.0, 5, Priority::Low)); // fits exactly
        let report = s.schedule_deliveries(NOW);

        assert_eq!(report.dropped, vec![DeliveryId::from("D2")]);
        assert_eq!(
            report.assigned,
            vec![(DeliveryId::from("D3"), VehicleId::from("V1"))]
        );
        let v1 = s.vehicle(&"V1".into()).unwrap();
        assert_eq!(v1.current_load(), 10.0);
        assert!(!v1.is_available());
    }

    #[test]
    fn schedule_rows_exist_for_idle_vehicles() {
        let mut s = DeliveryScheduler::new();
        s.add_vehicle(Vehicle::new("V1", 10.0, "H1"));
        assert!(s.schedule()[&VehicleId::from("V1")].is_empty());
    }
}

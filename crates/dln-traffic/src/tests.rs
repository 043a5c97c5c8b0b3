//! Unit tests for dln-traffic.

mod helpers {
    use dln_core::Timestamp;
    use dln_core::time::SECS_PER_HOUR;

    /// A timestamp falling in the given hour of day (day 0, UTC).
    pub fn at_hour(hour: i64) -> Timestamp {
        Timestamp(hour * SECS_PER_HOUR)
    }
}

mod history {
    use dln_core::RoadId;

    use super::helpers::at_hour;
    use crate::TrafficHistory;

    #[test]
    fn no_samples_defaults_to_free_flow() {
        let h = TrafficHistory::new();
        assert_eq!(h.historical_average(&RoadId::from("R1"), 8), 1.0);
        assert_eq!(h.live(&RoadId::from("R1")), None);
    }

    #[test]
    fn average_is_per_road_per_hour() {
        let mut h = TrafficHistory::new();
        let r1 = RoadId::from("R1");
        let r2 = RoadId::from("R2");

        h.record(&r1, at_hour(8), 2.0);
        h.record(&r1, at_hour(8), 3.0);
        h.record(&r1, at_hour(14), 1.2);
        h.record(&r2, at_hour(8), 5.0);

        assert_eq!(h.historical_average(&r1, 8), 2.5);
        assert_eq!(h.historical_average(&r1, 14), 1.2);
        // Other hours untouched.
        assert_eq!(h.historical_average(&r1, 9), 1.0);
        assert_eq!(h.historical_average(&r2, 8), 5.0);
    }

    #[test]
    fn live_tracks_most_recent_sample() {
        let mut h = TrafficHistory::new();
        let r1 = RoadId::from("R1");
        h.record(&r1, at_hour(8), 2.0);
        h.record(&r1, at_hour(9), 1.3);
        assert_eq!(h.live(&r1), Some(1.3));
    }

    #[test]
    fn samples_from_later_days_share_the_hour_bucket() {
        let mut h = TrafficHistory::new();
        let r1 = RoadId::from("R1");
        h.record(&r1, at_hour(8), 2.0);
        h.record(&r1, at_hour(8 + 24), 4.0); // next day, same hour
        assert_eq!(h.historical_average(&r1, 8), 3.0);
        assert_eq!(h.sample_count(&r1, 8), 2);
    }
}

mod predictor {
    use dln_core::Road;

    use super::helpers::at_hour;
    use crate::{CongestionPredictor, RoadClass};

    #[test]
    fn class_from_avg_speed() {
        let fast = Road::new("R1", "A", "B", 10.0).with_avg_speed(90.0);
        let mid = Road::new("R2", "A", "B", 10.0).with_avg_speed(60.0);
        let slow = Road::new("R3", "A", "B", 10.0); // default 50
        assert_eq!(RoadClass::of(&fast), RoadClass::Main);
        assert_eq!(RoadClass::of(&mid), RoadClass::Secondary);
        assert_eq!(RoadClass::of(&slow), RoadClass::Local);
    }

    #[test]
    fn blend_without_history_uses_default() {
        let p = CongestionPredictor::new();
        let road = Road::new("R1", "A", "B", 10.0).with_congestion(2.0);
        // 0.7 × 2.0 + 0.3 × 1.0 = 1.7
        let predicted = p.predict(&road, at_hour(8));
        assert!((predicted - 1.7).abs() < 1e-9);
    }

    #[test]
    fn blend_includes_recorded_history() {
        let mut p = CongestionPredictor::new();
        let road = Road::new("R1", "A", "B", 10.0).with_congestion(2.0);
        p.history_mut().record(&road.id, at_hour(8), 3.0);
        p.history_mut().record(&road.id, at_hour(8), 1.0);
        // history mean = 2.0 → 0.7 × 2.0 + 0.3 × 2.0 = 2.0
        let predicted = p.predict(&road, at_hour(8));
        assert!((predicted - 2.0).abs() < 1e-9);
        // A different hour falls back to the 1.0 default.
        let off_peak = p.predict(&road, at_hour(14));
        assert!((off_peak - 1.7).abs() < 1e-9);
    }

    #[test]
    fn bottleneck_thresholds_per_class() {
        let p = CongestionPredictor::new();
        // Local road, threshold 1.2: live 2.0 → predicted 1.7 > 1.2.
        let local = Road::new("R1", "A", "B", 10.0).with_congestion(2.0);
        assert!(p.is_likely_bottleneck(&local, at_hour(8)));

        // Main road, threshold 2.0: predicted 1.7 is below it.
        let main = Road::new("R2", "A", "B", 10.0)
            .with_congestion(2.0)
            .with_avg_speed(100.0);
        assert!(!p.is_likely_bottleneck(&main, at_hour(8)));
    }

    #[test]
    fn threshold_override() {
        let mut p = CongestionPredictor::new();
        let local = Road::new("R1", "A", "B", 10.0).with_congestion(2.0);
        p.set_threshold(RoadClass::Local, 5.0);
        assert!(!p.is_likely_bottleneck(&local, at_hour(8)));
    }
}

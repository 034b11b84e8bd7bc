//! Unit tests for the propagation model and AP table.

use roam_core::{ApId, FadingRng, Point3, StationId, Tick};

use crate::{
    AccessPoint, ApTable, PropagationParams, RadioError, signal_strength, signal_strength_faded,
};

fn ap(id: u32, name: &str, x: f64, y: f64, range: f64) -> AccessPoint {
    AccessPoint {
        id:           ApId(id),
        name:         name.to_string(),
        ssid:         "roam-net".to_string(),
        channel:      1,
        position:     Point3::new(x, y, 0.0),
        tx_power_dbm: 20.0,
        range,
    }
}

// ── Propagation model ─────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use super::*;

    #[test]
    fn reference_distance_loss() {
        let params = PropagationParams::default();
        // At exactly 1 m only the reference loss applies.
        assert_eq!(signal_strength(20.0, 1.0, &params), 20.0 - 40.0);
    }

    #[test]
    fn distance_floor_prevents_singularity() {
        let params = PropagationParams::default();
        assert_eq!(
            signal_strength(20.0, 0.0, &params),
            signal_strength(20.0, 1.0, &params)
        );
    }

    #[test]
    fn strictly_decreasing_in_distance() {
        let params = PropagationParams::default();
        let mut last = f64::INFINITY;
        // Sampled distances above the floor, log-spaced.
        for i in 1..200 {
            let d = 1.0 + (i as f64) * 0.7;
            let rssi = signal_strength(20.0, d, &params);
            assert!(rssi < last, "rssi {rssi} not below {last} at d={d}");
            last = rssi;
        }
    }

    #[test]
    fn ten_times_distance_costs_ten_exponent_db() {
        let params = PropagationParams { path_loss_exponent: 3.0, ..Default::default() };
        let near = signal_strength(20.0, 10.0, &params);
        let far = signal_strength(20.0, 100.0, &params);
        assert!((near - far - 30.0).abs() < 1e-9);
    }

    #[test]
    fn zero_fading_is_exact_model() {
        let params = PropagationParams::default();
        let fading = FadingRng::new(42);
        let faded = signal_strength_faded(
            20.0, 25.0, &params, &fading, StationId(0), ApId(0), Tick(5),
        );
        assert_eq!(faded, signal_strength(20.0, 25.0, &params));
    }

    #[test]
    fn fading_bounded_and_deterministic() {
        let params = PropagationParams { fading_db: 6.0, ..Default::default() };
        let fading = FadingRng::new(42);
        let base = signal_strength(20.0, 25.0, &params);
        for t in 0..50 {
            let faded = signal_strength_faded(
                20.0, 25.0, &params, &fading, StationId(1), ApId(2), Tick(t),
            );
            assert!(faded <= base && faded > base - 6.0, "fade out of bounds: {faded}");
            // Same key, same fade.
            let again = signal_strength_faded(
                20.0, 25.0, &params, &fading, StationId(1), ApId(2), Tick(t),
            );
            assert_eq!(faded, again);
        }
    }

    #[test]
    fn params_validation() {
        assert!(PropagationParams::default().validate().is_ok());
        let bad_exp = PropagationParams { path_loss_exponent: 0.0, ..Default::default() };
        assert!(bad_exp.validate().is_err());
        let bad_fade = PropagationParams { fading_db: -1.0, ..Default::default() };
        assert!(bad_fade.validate().is_err());
    }
}

// ── AP table ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;

    #[test]
    fn rejects_non_positive_range() {
        let result = ApTable::new(vec![ap(0, "ap1", 50.0, 50.0, 0.0)]);
        assert!(matches!(result, Err(RadioError::NonPositiveRange { .. })));
    }

    #[test]
    fn rejects_invalid_channel() {
        let mut bad = ap(0, "ap1", 50.0, 50.0, 30.0);
        bad.channel = 15;
        let result = ApTable::new(vec![bad]);
        assert!(matches!(result, Err(RadioError::InvalidChannel { .. })));
    }

    #[test]
    fn rejects_misnumbered_ids() {
        let result = ApTable::new(vec![ap(3, "ap1", 50.0, 50.0, 30.0)]);
        assert!(matches!(result, Err(RadioError::IdMismatch { .. })));
    }

    #[test]
    fn in_range_respects_per_ap_radius() {
        // ap1 covers 40 m, ap2 only 10 m; the station sits 20 m from both.
        let table = ApTable::new(vec![
            ap(0, "ap1", 30.0, 50.0, 40.0),
            ap(1, "ap2", 70.0, 50.0, 10.0),
        ])
        .unwrap();
        let hits = table.in_range(Point3::new(50.0, 50.0, 0.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, ApId(0));
        assert_eq!(hits[0].1, 20.0);
    }

    #[test]
    fn in_range_orders_by_id() {
        let table = ApTable::new(vec![
            ap(0, "ap1", 30.0, 50.0, 40.0),
            ap(1, "ap2", 70.0, 50.0, 40.0),
        ])
        .unwrap();
        let hits = table.in_range(Point3::new(50.0, 50.0, 0.0));
        assert_eq!(hits.iter().map(|h| h.0).collect::<Vec<_>>(), vec![ApId(0), ApId(1)]);
    }

    #[test]
    fn empty_result_when_out_of_all_ranges() {
        let table = ApTable::new(vec![ap(0, "ap1", 0.0, 0.0, 30.0)]).unwrap();
        assert!(table.in_range(Point3::new(200.0, 200.0, 0.0)).is_empty());
    }

    #[test]
    fn boundary_distance_is_in_range() {
        let table = ApTable::new(vec![ap(0, "ap1", 0.0, 0.0, 30.0)]).unwrap();
        let hits = table.in_range(Point3::new(30.0, 0.0, 0.0));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn lookup_helpers() {
        let table = ApTable::new(vec![ap(0, "ap1", 0.0, 0.0, 30.0)]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(ApId(0)).name, "ap1");
        assert!(table.try_get(ApId(9)).is_none());
    }

    #[test]
    fn debug_formatting_names_aps() {
        // Tables surface in error paths and test failure output.
        let table = ApTable::new(vec![ap(0, "ap1", 0.0, 0.0, 30.0)]).unwrap();
        assert!(format!("{table:?}").contains("ap1"));
    }
}

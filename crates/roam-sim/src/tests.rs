//! Integration tests for roam-sim.

use roam_assoc::Evaluator;
use roam_core::{ApId, CoreError, Point3, SimConfig, StationId, Tick};
use roam_mobility::{WaypointSchedule, WaypointSegment};
use roam_radio::{AccessPoint, ApTable, PropagationParams};
use roam_scenario::Station;

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, StationStore, Sim};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

fn config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        seed: 42,
        ..SimConfig::default()
    }
}

fn ap(id: u32, name: &str, x: f64, channel: u8) -> AccessPoint {
    AccessPoint {
        id:           ApId(id),
        name:         name.to_string(),
        ssid:         "roam-net".to_string(),
        channel,
        position:     p(x, 50.0),
        tx_power_dbm: 20.0,
        range:        40.0,
    }
}

fn station(id: u32, name: &str, schedule: WaypointSchedule) -> Station {
    Station {
        id:   StationId(id),
        name: name.to_string(),
        mac:  format!("00:00:00:00:00:{:02x}", id + 1).parse().unwrap(),
        schedule,
    }
}

/// The linear crossing: (10,50) at t=0 to (90,50) at t=20, AP_A at x=30 and
/// AP_B at x=70, both range 40, symmetric power.
fn crossing_sim(margin_db: f64, dwell_ticks: u64, total_ticks: u64) -> Sim {
    let schedule =
        WaypointSchedule::new(p(10.0, 50.0), vec![WaypointSegment::new(
            Tick(0),
            p(10.0, 50.0),
            Tick(20),
            p(90.0, 50.0),
        )])
        .unwrap();
    let stations = StationStore::from_stations(vec![station(0, "sta1", schedule)]);
    let aps = ApTable::new(vec![ap(0, "ap1", 30.0, 1), ap(1, "ap2", 70.0, 11)]).unwrap();
    SimBuilder::new(
        config(total_ticks),
        stations,
        aps,
        PropagationParams::default(),
        Evaluator::new(margin_db, dwell_ticks),
    )
    .build()
    .unwrap()
}

struct CountingObserver {
    ticks:     usize,
    handovers: usize,
    snapshots: usize,
}

impl CountingObserver {
    fn new() -> Self {
        Self { ticks: 0, handovers: 0, snapshots: 0 }
    }
}

impl SimObserver for CountingObserver {
    fn on_tick_end(&mut self, _tick: Tick, handovers: usize) {
        self.ticks += 1;
        self.handovers += handovers;
    }
    fn on_snapshot(
        &mut self,
        _tick: Tick,
        _stations: &StationStore,
        _positions: &[Point3],
        _assoc: &[roam_assoc::AssociationState],
    ) {
        self.snapshots += 1;
    }
}

// ── The crossing scenario ─────────────────────────────────────────────────────

#[cfg(test)]
mod crossing {
    use super::*;

    #[test]
    fn exactly_one_handover_near_the_midpoint() {
        let mut sim = crossing_sim(0.0, 0, 21);
        sim.run(&mut NoopObserver).unwrap();

        let events = sim.events_for_station(StationId(0)).unwrap();
        assert_eq!(events.len(), 2, "initial association + one handover: {events:?}");

        // Initial association to AP_A at t=0.
        assert_eq!(events[0].tick, Tick(0));
        assert_eq!(events[0].from, None);
        assert_eq!(events[0].to, Some(ApId(0)));

        // One clean handover A -> B just past the geometric midpoint (t=10
        // is an exact RSSI tie, which hysteresis resolves in favour of the
        // incumbent's lower channel).
        assert_eq!(events[1].from, Some(ApId(0)));
        assert_eq!(events[1].to, Some(ApId(1)));
        assert_eq!(events[1].tick, Tick(11));
    }

    #[test]
    fn never_disconnected_inside_the_overlap() {
        let mut sim = crossing_sim(0.0, 0, 21);
        sim.run(&mut NoopObserver).unwrap();
        for t in 0..=20 {
            let assoc = sim.association_at(StationId(0), Tick(t)).unwrap();
            assert!(assoc.is_some(), "disconnected at tick {t}");
        }
    }

    #[test]
    fn dwell_postpones_the_handover() {
        let mut sim = crossing_sim(0.0, 3, 21);
        sim.run(&mut NoopObserver).unwrap();
        let events = sim.events_for_station(StationId(0)).unwrap();
        assert_eq!(events.len(), 2);
        // Strict-best from t=11; third consecutive tick commits at t=13.
        assert_eq!(events[1].tick, Tick(13));
    }

    #[test]
    fn consecutive_events_respect_dwell_spacing() {
        let mut sim = crossing_sim(0.0, 3, 21);
        sim.run(&mut NoopObserver).unwrap();
        let events = sim.events_for_station(StationId(0)).unwrap();
        for pair in events.windows(2) {
            // Out-of-range drops are exempt, but this run has none.
            assert!(pair[1].tick.since(pair[0].tick) >= 3);
        }
    }

    #[test]
    fn rssi_follows_the_motion() {
        let sim = crossing_sim(0.0, 0, 21);
        // Near AP_A at t=0, far at t=20.
        let near = sim.rssi_at(StationId(0), ApId(0), Tick(0)).unwrap();
        let far = sim.rssi_at(StationId(0), ApId(0), Tick(20)).unwrap();
        assert!(near.rssi_dbm > far.rssi_dbm);
        assert!(near.in_range);
        assert!(!far.in_range); // x=90 is 60 m from AP_A, past its 40 m range
    }
}

// ── Out-of-range behaviour ────────────────────────────────────────────────────

#[cfg(test)]
mod coverage {
    use super::*;

    #[test]
    fn unreachable_station_stays_disconnected_without_error() {
        let stations = StationStore::from_stations(vec![station(
            0,
            "sta1",
            WaypointSchedule::stationary(p(500.0, 500.0)),
        )]);
        let aps = ApTable::new(vec![ap(0, "ap1", 30.0, 1)]).unwrap();
        let mut sim = SimBuilder::new(
            config(50),
            stations,
            aps,
            PropagationParams::default(),
            Evaluator::new(0.0, 0),
        )
        .build()
        .unwrap();

        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.log.is_empty());
        assert_eq!(sim.association_at(StationId(0), Tick(49)).unwrap(), None);
    }

    #[test]
    fn leaving_all_coverage_disconnects_once() {
        // Walk from inside AP_A's cell straight out of coverage.
        let schedule = WaypointSchedule::new(
            p(30.0, 50.0),
            vec![WaypointSegment::new(Tick(0), p(30.0, 50.0), Tick(10), p(200.0, 50.0))],
        )
        .unwrap();
        let stations = StationStore::from_stations(vec![station(0, "sta1", schedule)]);
        let aps = ApTable::new(vec![ap(0, "ap1", 30.0, 1)]).unwrap();
        let mut sim = SimBuilder::new(
            config(12),
            stations,
            aps,
            PropagationParams::default(),
            Evaluator::new(0.0, 0),
        )
        .build()
        .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let events = sim.events_for_station(StationId(0)).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].to, Some(ApId(0)));
        assert_eq!(events[1].to, None);
        assert_eq!(events[1].rssi_dbm, None);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn faded_run(seed: u64) -> Vec<roam_assoc::HandoverEvent> {
        let schedule = WaypointSchedule::new(
            p(10.0, 50.0),
            vec![WaypointSegment::new(Tick(0), p(10.0, 50.0), Tick(40), p(90.0, 50.0))],
        )
        .unwrap();
        let stations = StationStore::from_stations(vec![station(0, "sta1", schedule)]);
        let aps = ApTable::new(vec![ap(0, "ap1", 30.0, 1), ap(1, "ap2", 70.0, 11)]).unwrap();
        let params = PropagationParams { fading_db: 6.0, ..Default::default() };
        let mut sim = SimBuilder::new(
            SimConfig { total_ticks: 41, seed, ..SimConfig::default() },
            stations,
            aps,
            params,
            Evaluator::new(2.0, 2),
        )
        .build()
        .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        sim.log.iter().copied().collect()
    }

    #[test]
    fn identical_seeds_identical_logs() {
        assert_eq!(faded_run(42), faded_run(42));
    }

    #[test]
    fn tie_never_alternates() {
        // Station parked exactly between two identical APs.
        let stations = StationStore::from_stations(vec![station(
            0,
            "sta1",
            WaypointSchedule::stationary(p(50.0, 50.0)),
        )]);
        let aps = ApTable::new(vec![ap(0, "ap1", 30.0, 1), ap(1, "ap2", 70.0, 1)]).unwrap();
        let mut sim = SimBuilder::new(
            config(50),
            stations,
            aps,
            PropagationParams::default(),
            Evaluator::new(0.0, 0),
        )
        .build()
        .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        // One initial association, zero flaps, and the winner is the
        // lexicographically smaller name (channels are equal).
        let events = sim.events_for_station(StationId(0)).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to, Some(ApId(0)));
    }
}

// ── Manual override ───────────────────────────────────────────────────────────

#[cfg(test)]
mod overrides {
    use super::*;

    #[test]
    fn force_and_release() {
        let mut sim = crossing_sim(0.0, 0, 21);

        // Let the station associate naturally with AP_A.
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.association_at(StationId(0), Tick(4)).unwrap(), Some(ApId(0)));

        // Pin it to AP_B against the signal.
        sim.force_association(StationId(0), ApId(1)).unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.association_at(StationId(0), Tick(9)).unwrap(), Some(ApId(1)));

        // Release: automatic evaluation resumes (by now the crossing is
        // close enough that AP_B genuinely wins, so no switch back).
        sim.clear_override(StationId(0)).unwrap();
        sim.run_ticks(11, &mut NoopObserver).unwrap();
        assert_eq!(sim.association_at(StationId(0), Tick(20)).unwrap(), Some(ApId(1)));
    }

    #[test]
    fn force_unknown_ids_error() {
        let mut sim = crossing_sim(0.0, 0, 21);
        assert!(sim.force_association(StationId(9), ApId(0)).is_err());
        assert!(sim.force_association(StationId(0), ApId(9)).is_err());
        assert!(sim.clear_override(StationId(9)).is_err());
    }
}

// ── Query errors and observers ────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn association_query_ahead_of_time_errors() {
        let mut sim = crossing_sim(0.0, 0, 21);
        assert!(matches!(
            sim.association_at(StationId(0), Tick(0)),
            Err(CoreError::QueryAheadOfTime { .. })
        ));
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert!(sim.association_at(StationId(0), Tick(4)).is_ok());
        assert!(sim.association_at(StationId(0), Tick(5)).is_err());
    }

    #[test]
    fn unknown_entities_are_named() {
        let sim = crossing_sim(0.0, 0, 21);
        assert!(matches!(
            sim.position_at(StationId(7), Tick(0)),
            Err(CoreError::StationNotFound(StationId(7)))
        ));
        assert!(matches!(
            sim.rssi_at(StationId(0), ApId(7), Tick(0)),
            Err(CoreError::ApNotFound(ApId(7)))
        ));
        assert!(sim.events_for_station(StationId(7)).is_err());
    }

    #[test]
    fn events_in_range_is_inclusive() {
        let mut sim = crossing_sim(0.0, 0, 21);
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.events_in_range(Tick(0), Tick(20)).len(), 2);
        assert_eq!(sim.events_in_range(Tick(1), Tick(10)).len(), 0);
        assert_eq!(sim.events_in_range(Tick(11), Tick(11)).len(), 1);
    }

    #[test]
    fn observer_sees_ticks_handovers_and_snapshots() {
        let mut sim = crossing_sim(0.0, 0, 20);
        sim.config.snapshot_interval_ticks = 5;
        let mut obs = CountingObserver::new();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.ticks, 20);
        assert_eq!(obs.handovers, 2);
        assert_eq!(obs.snapshots, 4); // ticks 0, 5, 10, 15
    }

    #[test]
    fn builder_rejects_zero_ticks() {
        let stations = StationStore::from_stations(vec![]);
        let aps = ApTable::new(vec![]).unwrap();
        let result = SimBuilder::new(
            SimConfig { total_ticks: 0, ..SimConfig::default() },
            stations,
            aps,
            PropagationParams::default(),
            Evaluator::new(0.0, 0),
        )
        .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Worker pool ───────────────────────────────────────────────────────────────

#[cfg(feature = "parallel")]
mod worker_pool {
    use super::*;

    fn crossing_with_threads(threads: Option<usize>) -> Sim {
        let schedule =
            WaypointSchedule::new(p(10.0, 50.0), vec![WaypointSegment::new(
                Tick(0),
                p(10.0, 50.0),
                Tick(20),
                p(90.0, 50.0),
            )])
            .unwrap();
        let stations = StationStore::from_stations(vec![station(0, "sta1", schedule)]);
        let aps = ApTable::new(vec![ap(0, "ap1", 30.0, 1), ap(1, "ap2", 70.0, 11)]).unwrap();
        let config = SimConfig {
            total_ticks: 21,
            seed: 42,
            num_threads: threads,
            ..SimConfig::default()
        };
        SimBuilder::new(
            config,
            stations,
            aps,
            PropagationParams::default(),
            Evaluator::new(0.0, 0),
        )
        .build()
        .unwrap()
    }

    #[test]
    fn num_threads_builds_a_dedicated_pool() {
        let sim = crossing_with_threads(Some(2));
        assert!(sim.pool.is_some());
        assert!(crossing_with_threads(None).pool.is_none());
    }

    #[test]
    fn pinned_pool_matches_global_pool_logs() {
        let mut pinned = crossing_with_threads(Some(2));
        let mut global = crossing_with_threads(None);
        pinned.run(&mut NoopObserver).unwrap();
        global.run(&mut NoopObserver).unwrap();
        let a: Vec<_> = pinned.log.iter().copied().collect();
        let b: Vec<_> = global.log.iter().copied().collect();
        assert_eq!(a, b);
    }
}

// ── Scenario wiring ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_wiring {
    use super::*;
    use roam_scenario::Scenario;

    const CROSSING_TOML: &str = r#"
[sim]
total_ticks = 21
seed        = 42

[handover]
margin_db   = 0.0
dwell_ticks = 0

[[station]]
name      = "sta1"
mac       = "00:00:00:00:00:01"
position  = [10.0, 50.0, 0.0]
waypoints = [{ start = 0, from = [10.0, 50.0, 0.0], stop = 20, to = [90.0, 50.0, 0.0] }]

[[ap]]
name         = "ap1"
ssid         = "roam-net"
channel      = 1
position     = [30.0, 50.0, 0.0]
tx_power_dbm = 20.0
range        = 40.0

[[ap]]
name         = "ap2"
ssid         = "roam-net"
channel      = 11
position     = [70.0, 50.0, 0.0]
tx_power_dbm = 20.0
range        = 40.0
"#;

    #[test]
    fn toml_scenario_runs_end_to_end() {
        let scenario = Scenario::from_toml_str(CROSSING_TOML).unwrap();
        let sta = scenario.station_index["sta1"];
        let ap_b = scenario.ap_index["ap2"];
        let mut sim = SimBuilder::from_scenario(scenario).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let events = sim.events_for_station(sta).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].to, Some(ap_b));
    }
}

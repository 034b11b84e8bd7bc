//! Scenario loading and validation.

use std::path::Path;

use rustc_hash::FxHashMap;

use roam_assoc::Evaluator;
use roam_core::{ApId, MacAddr, Point3, SimConfig, SimRng, StationId, Tick};
use roam_mobility::{
    Arena, RandomDirection, RandomWalk, WaypointGenerator, WaypointSchedule, WaypointSegment,
};
use roam_radio::{AccessPoint, ApTable, PropagationParams};

use crate::spec::{MobilitySpec, ScenarioSpec, StationSpec};
use crate::{ScenarioError, ScenarioResult};

// ── Station ───────────────────────────────────────────────────────────────────

/// A fully validated station, ready to simulate.
#[derive(Clone, Debug)]
pub struct Station {
    pub id:       StationId,
    pub name:     String,
    pub mac:      MacAddr,
    pub schedule: WaypointSchedule,
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A validated scenario: everything the simulation builder needs.
///
/// Construction is all-or-nothing — if any entity fails validation, no
/// `Scenario` is produced.
#[derive(Debug)]
pub struct Scenario {
    pub config:    SimConfig,
    pub params:    PropagationParams,
    pub evaluator: Evaluator,
    pub stations:  Vec<Station>,
    pub aps:       ApTable,
    /// Name → ID lookups for harnesses that address nodes by scenario name.
    pub station_index: FxHashMap<String, StationId>,
    pub ap_index:      FxHashMap<String, ApId>,
}

impl Scenario {
    /// Load and validate a scenario from a TOML file.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load and validate a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> ScenarioResult<Self> {
        let spec: ScenarioSpec = toml::from_str(text)?;
        Self::from_spec(spec)
    }

    /// Validate a parsed spec into a runnable scenario.
    pub fn from_spec(spec: ScenarioSpec) -> ScenarioResult<Self> {
        let config: SimConfig = spec.sim.into();

        spec.propagation.validate()?;
        if spec.handover.margin_db < 0.0 {
            return Err(ScenarioError::Handover(format!(
                "hysteresis margin must be non-negative, got {}",
                spec.handover.margin_db
            )));
        }
        let evaluator = Evaluator::new(spec.handover.margin_db, spec.handover.dwell_ticks);

        // ── Access points ─────────────────────────────────────────────────
        let mut ap_index: FxHashMap<String, ApId> = FxHashMap::default();
        let mut aps = Vec::with_capacity(spec.aps.len());
        for (i, ap) in spec.aps.into_iter().enumerate() {
            let id = ApId(i as u32);
            if ap_index.insert(ap.name.clone(), id).is_some() {
                return Err(ScenarioError::DuplicateAp(ap.name));
            }
            aps.push(AccessPoint {
                id,
                name:         ap.name,
                ssid:         ap.ssid,
                channel:      ap.channel,
                position:     Point3::from(ap.position),
                tx_power_dbm: ap.tx_power_dbm,
                range:        ap.range,
            });
        }
        let aps = ApTable::new(aps)?;

        // ── Stations ──────────────────────────────────────────────────────
        //
        // Generated mobility draws from a child RNG stream per station, in
        // file order, so a scenario edit that appends a station leaves the
        // existing schedules untouched.
        let mut rng = SimRng::new(config.seed);
        let mut station_index: FxHashMap<String, StationId> = FxHashMap::default();
        let mut stations = Vec::with_capacity(spec.stations.len());
        for (i, sta) in spec.stations.into_iter().enumerate() {
            let id = StationId(i as u32);
            if station_index.insert(sta.name.clone(), id).is_some() {
                return Err(ScenarioError::DuplicateStation(sta.name));
            }
            stations.push(build_station(sta, id, config.total_ticks, &mut rng)?);
        }

        Ok(Self {
            config,
            params: spec.propagation,
            evaluator,
            stations,
            aps,
            station_index,
            ap_index,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_station(
    spec:        StationSpec,
    id:          StationId,
    total_ticks: u64,
    rng:         &mut SimRng,
) -> ScenarioResult<Station> {
    let mac: MacAddr = spec.mac.parse().map_err(|_| ScenarioError::BadMac {
        station: spec.name.clone(),
        mac:     spec.mac.clone(),
    })?;

    let origin = Point3::from(spec.position);

    let schedule = match (&spec.waypoints[..], spec.mobility) {
        ([], None) => WaypointSchedule::stationary(origin),

        (waypoints, None) => {
            let segments: Vec<WaypointSegment> = waypoints
                .iter()
                .map(|w| {
                    WaypointSegment::new(
                        Tick(w.start),
                        Point3::from(w.from),
                        Tick(w.stop),
                        Point3::from(w.to),
                    )
                })
                .collect();
            WaypointSchedule::new(origin, segments).map_err(|source| {
                ScenarioError::Mobility { station: spec.name.clone(), source }
            })?
        }

        ([], Some(model)) => {
            let mut station_rng = rng.child(id.0 as u64);
            expand_mobility(model, origin, total_ticks, &mut station_rng).map_err(|source| {
                ScenarioError::Mobility { station: spec.name.clone(), source }
            })?
        }

        (_, Some(_)) => {
            return Err(ScenarioError::ConflictingMobility { station: spec.name });
        }
    };

    Ok(Station { id, name: spec.name, mac, schedule })
}

fn expand_mobility(
    model:       MobilitySpec,
    origin:      Point3,
    total_ticks: u64,
    rng:         &mut SimRng,
) -> Result<WaypointSchedule, roam_mobility::MobilityError> {
    match model {
        MobilitySpec::RandomWalk { step, interval_ticks, arena } => {
            let model = RandomWalk {
                arena: Arena::new(arena[0], arena[1], arena[2], arena[3]),
                step,
                interval_ticks,
            };
            model.generate(origin, total_ticks, rng)
        }
        MobilitySpec::RandomDirection { speed, arena } => {
            let model = RandomDirection {
                arena: Arena::new(arena[0], arena[1], arena[2], arena[3]),
                speed,
            };
            model.generate(origin, total_ticks, rng)
        }
    }
}

//! Raw serde types mirroring the TOML schema.
//!
//! These are deliberately dumb: all invariant checking happens in
//! [`loader`][crate::loader], so every error can name the offending station,
//! AP, or segment rather than surfacing as a serde type mismatch.

use serde::Deserialize;

use roam_core::SimConfig;
use roam_radio::PropagationParams;

/// Top-level scenario file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSpec {
    #[serde(default)]
    pub sim:         SimSpec,
    #[serde(default)]
    pub propagation: PropagationParams,
    pub handover:    HandoverSpec,
    #[serde(default, rename = "station")]
    pub stations:    Vec<StationSpec>,
    #[serde(default, rename = "ap")]
    pub aps:         Vec<ApSpec>,
}

/// The `[sim]` table.  Mirrors [`SimConfig`] with the same defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SimSpec {
    pub total_ticks:             u64,
    pub tick_duration_secs:      u32,
    pub seed:                    u64,
    pub num_threads:             Option<usize>,
    pub snapshot_interval_ticks: u64,
}

impl Default for SimSpec {
    fn default() -> Self {
        let d = SimConfig::default();
        Self {
            total_ticks:             d.total_ticks,
            tick_duration_secs:      d.tick_duration_secs,
            seed:                    d.seed,
            num_threads:             d.num_threads,
            snapshot_interval_ticks: d.snapshot_interval_ticks,
        }
    }
}

impl From<SimSpec> for SimConfig {
    fn from(s: SimSpec) -> SimConfig {
        SimConfig {
            total_ticks:             s.total_ticks,
            tick_duration_secs:      s.tick_duration_secs,
            seed:                    s.seed,
            num_threads:             s.num_threads,
            snapshot_interval_ticks: s.snapshot_interval_ticks,
        }
    }
}

/// The `[handover]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandoverSpec {
    pub margin_db:   f64,
    pub dwell_ticks: u64,
}

/// One `[[station]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationSpec {
    pub name:      String,
    pub mac:       String,
    /// Static position, and the origin for generated mobility.
    pub position:  [f64; 3],
    #[serde(default)]
    pub waypoints: Vec<WaypointSpec>,
    pub mobility:  Option<MobilitySpec>,
}

/// One explicit waypoint segment.  `start`/`stop` are ticks.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaypointSpec {
    pub start: u64,
    pub from:  [f64; 3],
    pub stop:  u64,
    pub to:    [f64; 3],
}

/// A random mobility model, expanded to waypoints at load time.
#[derive(Debug, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case", deny_unknown_fields)]
pub enum MobilitySpec {
    RandomWalk {
        step:           f64,
        interval_ticks: u64,
        /// `[min_x, min_y, max_x, max_y]`
        arena:          [f64; 4],
    },
    RandomDirection {
        speed: f64,
        arena: [f64; 4],
    },
}

/// One `[[ap]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApSpec {
    pub name:         String,
    pub ssid:         String,
    pub channel:      u8,
    pub position:     [f64; 3],
    pub tx_power_dbm: f64,
    pub range:        f64,
}

//! `roam-scenario` — scenario files and load-time validation.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`spec`]   | Raw serde types mirroring the TOML schema                   |
//! | [`loader`] | `Scenario::load` / `Scenario::from_toml_str` + validation   |
//! | [`error`]  | `ScenarioError`, `ScenarioResult<T>`                        |
//!
//! # TOML schema
//!
//! ```toml
//! [sim]
//! total_ticks = 120
//! seed        = 42
//!
//! [propagation]
//! path_loss_exponent = 3.5
//!
//! [handover]
//! margin_db   = 3.0
//! dwell_ticks = 2
//!
//! [[station]]
//! name      = "sta1"
//! mac       = "00:00:00:00:00:01"
//! position  = [10.0, 50.0, 0.0]
//! waypoints = [{ start = 0, from = [10.0, 50.0, 0.0], stop = 20, to = [90.0, 50.0, 0.0] }]
//!
//! [[station]]
//! name     = "sta2"
//! mac      = "00:00:00:00:00:02"
//! position = [50.0, 50.0, 0.0]
//! mobility = { model = "random-walk", step = 5.0, interval_ticks = 2, arena = [0.0, 0.0, 100.0, 100.0] }
//!
//! [[ap]]
//! name         = "ap1"
//! ssid         = "roam-net"
//! channel      = 1
//! position     = [30.0, 50.0, 0.0]
//! tx_power_dbm = 20.0
//! range        = 40.0
//! ```
//!
//! Waypoint `start`/`stop` values are ticks (1 s each by default).  Every
//! `[propagation]` and `[sim]` field has a documented default; `[handover]`
//! and the node lists are required.
//!
//! # Validation policy
//!
//! Validation is all-or-nothing: any malformed station, segment, or AP
//! aborts the load with an error naming the offender, and no partial
//! scenario is ever returned (no simulation runs on invalid input).

pub mod error;
pub mod loader;
pub mod spec;


pub use error::{ScenarioError, ScenarioResult};
pub use loader::{Scenario, Station};

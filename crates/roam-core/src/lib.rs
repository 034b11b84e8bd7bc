//! `roam-core` — foundational types for the `roamsim` wireless emulation engine.
//!
//! This crate is a dependency of every other `roam-*` crate.  It intentionally
//! has no `roam-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `StationId`, `ApId`                                   |
//! | [`point`]   | `Point3`, Euclidean distance, linear interpolation    |
//! | [`mac`]     | `MacAddr` — parsed station hardware addresses         |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]     | `FadingRng` (per-link draws), `SimRng` (global)       |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                               |
//! |---------|----------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types (`roam-scenario`) |

pub mod error;
pub mod ids;
pub mod mac;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ApId, StationId};
pub use mac::MacAddr;
pub use point::Point3;
pub use rng::{FadingRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};

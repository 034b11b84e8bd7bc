//! `roam-sim` — tick loop orchestrator for the roamsim engine.
//!
//! # The tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Interpolate — resolve every station's position from its waypoint
//!                   schedule (parallel with the `parallel` feature).
//!                   Completes fully before any evaluation starts.
//!   ② Measure     — for each station, collect the in-range APs and compute
//!                   their RSSI (read-only; also parallelizable).
//!   ③ Apply       — run the association evaluator per station in ascending
//!                   StationId order, appending handover events to the log.
//! ```
//!
//! The barrier between ① and ②/③ guarantees evaluation never sees a
//! half-updated world; the sequential ③ makes event logs byte-identical
//! across runs and thread counts.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                           |
//! |------------|------------------------------------------------------------------|
//! | `parallel` | Runs phases ① and ② on Rayon (pool sized by `num_threads`).      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use roam_scenario::Scenario;
//! use roam_sim::{NoopObserver, SimBuilder};
//!
//! let scenario = Scenario::load(Path::new("crossing.toml"))?;
//! let mut sim = SimBuilder::from_scenario(scenario).build()?;
//! sim.run(&mut NoopObserver)?;
//! for event in sim.log.iter() {
//!     println!("{event:?}");
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod query;
pub mod sim;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use query::RssiSample;
pub use sim::Sim;
pub use store::StationStore;

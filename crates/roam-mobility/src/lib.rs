//! `roam-mobility` — waypoint schedules and position interpolation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`schedule`]  | `WaypointSegment`, `WaypointSchedule`, `position_at`           |
//! | [`generator`] | `WaypointGenerator` trait, `RandomWalk`, `RandomDirection`     |
//! | [`error`]     | `MobilityError`, `MobilityResult<T>`                           |
//!
//! # Movement model (piecewise-linear hold)
//!
//! A station's motion is an ordered, time-disjoint list of
//! [`WaypointSegment`]s.  At tick `t`:
//!
//! 1. Before the first segment starts the station sits at the first
//!    segment's start position (or its static initial position if the
//!    schedule is empty).
//! 2. Inside a segment, each coordinate is linearly interpolated.
//! 3. In a gap between segments, or after the last segment, the station
//!    holds the position resolved at the nearest preceding boundary.
//!
//! `position_at` is a pure function of the schedule — it never depends on
//! other stations or on evaluation order, so distinct stations may be
//! interpolated concurrently without synchronisation.
//!
//! Random mobility models (`RandomWalk`, `RandomDirection`) are expanded to
//! a concrete `WaypointSchedule` before the run starts, keeping the
//! interpolator agnostic to how waypoints were produced and the run
//! reproducible from the master seed.

pub mod error;
pub mod generator;
pub mod schedule;


pub use error::{MobilityError, MobilityResult};
pub use generator::{Arena, RandomDirection, RandomWalk, WaypointGenerator};
pub use schedule::{WaypointSchedule, WaypointSegment};

//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock seconds is held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Using an integer tick as the canonical time unit means all waypoint
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//!
//! The default tick duration is 1 s, matching how the scenario scripts
//! express waypoint times (`time=2`, `time=60`, …).  Runs that need finer
//! granularity shrink `tick_duration_secs`; the rest of the engine is
//! agnostic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` so overflow is a non-issue: at 1 tick/second a u64 lasts
/// ~585 billion years.  Being unsigned also makes "negative time" queries
/// unrepresentable by construction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts between ticks and seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one tick represents.  Default: 1.
    pub tick_duration_secs: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_secs as u64
    }

    /// How many ticks span `secs` seconds? (rounds up — a waypoint is never
    /// reached early)
    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        secs.div_ceil(self.tick_duration_secs as u64)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        SimClock::new(1)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically deserialized from the `[sim]` table of a scenario file and
/// passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.  A 2-minute roaming run at 1 s/tick is 120.
    pub total_ticks: u64,

    /// Seconds per tick.  Default: 1.
    pub tick_duration_secs: u32,

    /// Master RNG seed.  The same seed always produces identical event logs.
    pub seed: u64,

    /// Worker thread count passed to Rayon (with the `parallel` feature).
    /// `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit an association snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:             120,
            tick_duration_secs:      1,
            seed:                    0,
            num_threads:             None,
            snapshot_interval_ticks: 0,
        }
    }
}

//! Deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every random draw in the engine derives from the run's master seed:
//!
//! - [`SimRng`] feeds load-time randomness (waypoint generators).  It is a
//!   plain `SmallRng` seeded from the master seed, used only while the
//!   scenario is being expanded — never during tick processing.
//! - [`FadingRng`] produces the per-link fading draws.  Each draw is keyed
//!   by `(station, ap, tick)`, mixed into the master seed with the 64-bit
//!   fractional golden-ratio constant, which spreads consecutive keys
//!   uniformly across the seed space.  This means:
//!
//!   - A draw never depends on evaluation order or thread scheduling.
//!   - Adding stations or APs does not disturb existing links' sequences.
//!   - Repeated runs with the same seed produce byte-identical RSSI traces.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{ApId, StationId, Tick};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── FadingRng ─────────────────────────────────────────────────────────────────

/// Stateless, key-addressed fading source.
///
/// `draw` is a pure function of `(master_seed, station, ap, tick)` — the
/// struct holds no mutable state, so it is freely shared across parallel
/// evaluation workers.
#[derive(Copy, Clone, Debug)]
pub struct FadingRng {
    seed: u64,
}

impl FadingRng {
    pub fn new(master_seed: u64) -> Self {
        Self { seed: master_seed }
    }

    /// A uniform draw in `[0, 1)` for one (station, AP) link at one tick.
    pub fn draw(&self, station: StationId, ap: ApId, tick: Tick) -> f64 {
        let mut key = self.seed;
        key ^= (station.0 as u64 + 1).wrapping_mul(MIXING_CONSTANT);
        key ^= (ap.0 as u64 + 1)
            .wrapping_mul(MIXING_CONSTANT)
            .rotate_left(21);
        key ^= (tick.0 + 1).wrapping_mul(MIXING_CONSTANT).rotate_left(42);
        SmallRng::seed_from_u64(key).r#gen::<f64>()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for load-time operations (waypoint generation,
/// scenario expansion).
///
/// Used only in single-threaded contexts.  If parallel randomness is ever
/// needed, give each worker its own `SimRng` derived via [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — used to give
    /// each station's waypoint generator an independent stream so adding a
    /// station never reshuffles the others.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

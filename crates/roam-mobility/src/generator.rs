//! Mobility-model waypoint generators.
//!
//! Scenario scripts that configure "random" mobility (random walk, random
//! direction) do not list explicit waypoints.  A [`WaypointGenerator`]
//! expands such a model into a concrete [`WaypointSchedule`] at load time,
//! drawing from a [`SimRng`] derived from the run's master seed.  The
//! interpolator never learns where a schedule came from, and two runs with
//! the same seed produce identical schedules.

use roam_core::{Point3, SimRng, Tick};

use crate::{MobilityError, MobilityResult, WaypointSchedule, WaypointSegment};

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The rectangular area a generated schedule must stay inside.
///
/// Random motion is planar: `z` is inherited from the station's origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Arena {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    fn clamp(&self, p: Point3) -> Point3 {
        Point3::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
            p.z,
        )
    }
}

// ── WaypointGenerator ─────────────────────────────────────────────────────────

/// Strategy that produces a station's schedule before the run starts.
pub trait WaypointGenerator {
    /// Generate a schedule starting at `origin` and covering at least
    /// `total_ticks` ticks of motion.
    fn generate(
        &self,
        origin:      Point3,
        total_ticks: u64,
        rng:         &mut SimRng,
    ) -> MobilityResult<WaypointSchedule>;
}

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// Fixed-interval random walk: every `interval_ticks` the station steps a
/// fixed distance in a uniformly random direction, clamped to the arena.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    pub arena:          Arena,
    /// Distance covered per step, in metres.
    pub step:           f64,
    /// Ticks per step.
    pub interval_ticks: u64,
}

impl WaypointGenerator for RandomWalk {
    fn generate(
        &self,
        origin:      Point3,
        total_ticks: u64,
        rng:         &mut SimRng,
    ) -> MobilityResult<WaypointSchedule> {
        if self.step <= 0.0 {
            return Err(MobilityError::BadModelParam(format!(
                "random-walk step must be positive, got {}",
                self.step
            )));
        }
        if self.interval_ticks == 0 {
            return Err(MobilityError::BadModelParam(
                "random-walk interval must be at least 1 tick".into(),
            ));
        }

        let mut segments = Vec::new();
        let mut pos = self.arena.clamp(origin);
        let mut t = Tick::ZERO;

        while t.0 < total_ticks {
            let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let next = self.arena.clamp(Point3::new(
                pos.x + self.step * heading.cos(),
                pos.y + self.step * heading.sin(),
                pos.z,
            ));
            let stop = t + self.interval_ticks;
            segments.push(WaypointSegment::new(t, pos, stop, next));
            pos = next;
            t = stop;
        }

        WaypointSchedule::new(origin, segments)
    }
}

// ── RandomDirection ───────────────────────────────────────────────────────────

/// Random-direction model: the station picks a uniformly random point on the
/// arena border, travels there at constant speed, then picks again.
#[derive(Clone, Debug)]
pub struct RandomDirection {
    pub arena: Arena,
    /// Travel speed in metres per tick.
    pub speed: f64,
}

impl RandomDirection {
    fn random_border_point(&self, z: f64, rng: &mut SimRng) -> Point3 {
        let a = &self.arena;
        // Pick a side, then a point along it.
        match rng.gen_range(0..4u8) {
            0 => Point3::new(rng.gen_range(a.min_x..=a.max_x), a.min_y, z),
            1 => Point3::new(rng.gen_range(a.min_x..=a.max_x), a.max_y, z),
            2 => Point3::new(a.min_x, rng.gen_range(a.min_y..=a.max_y), z),
            _ => Point3::new(a.max_x, rng.gen_range(a.min_y..=a.max_y), z),
        }
    }
}

impl WaypointGenerator for RandomDirection {
    fn generate(
        &self,
        origin:      Point3,
        total_ticks: u64,
        rng:         &mut SimRng,
    ) -> MobilityResult<WaypointSchedule> {
        if self.speed <= 0.0 {
            return Err(MobilityError::BadModelParam(format!(
                "random-direction speed must be positive, got {}",
                self.speed
            )));
        }

        let mut segments = Vec::new();
        let mut pos = self.arena.clamp(origin);
        let mut t = Tick::ZERO;

        while t.0 < total_ticks {
            let target = self.random_border_point(pos.z, rng);
            let distance = pos.distance(target);
            // A border draw can land on the current corner; re-draw.
            if distance < f64::EPSILON {
                continue;
            }
            let travel_ticks = ((distance / self.speed).ceil() as u64).max(1);
            let stop = t + travel_ticks;
            segments.push(WaypointSegment::new(t, pos, stop, target));
            pos = target;
            t = stop;
        }

        WaypointSchedule::new(origin, segments)
    }
}

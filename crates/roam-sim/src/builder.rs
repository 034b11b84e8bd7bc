//! Fluent builder for constructing a [`Sim`].

use roam_assoc::{AssociationState, EventLog, Evaluator};
use roam_core::{FadingRng, SimConfig};
use roam_radio::{ApTable, PropagationParams};
use roam_scenario::Scenario;

use crate::{Sim, SimError, SimResult, StationStore};

/// Builder for [`Sim`].
///
/// Most callers go through [`SimBuilder::from_scenario`]; assembling the
/// parts by hand is for tests and embedders that construct stations and
/// APs programmatically.
///
/// # Example
///
/// ```rust,ignore
/// let scenario = Scenario::load(Path::new("crossing.toml"))?;
/// let mut sim = SimBuilder::from_scenario(scenario).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    stations:  StationStore,
    aps:       ApTable,
    params:    PropagationParams,
    evaluator: Evaluator,
}

impl SimBuilder {
    /// Create a builder from already-validated parts.
    pub fn new(
        config:    SimConfig,
        stations:  StationStore,
        aps:       ApTable,
        params:    PropagationParams,
        evaluator: Evaluator,
    ) -> Self {
        Self { config, stations, aps, params, evaluator }
    }

    /// Create a builder from a loaded [`Scenario`].
    pub fn from_scenario(scenario: Scenario) -> Self {
        Self {
            config:    scenario.config,
            stations:  StationStore::from_stations(scenario.stations),
            aps:       scenario.aps,
            params:    scenario.params,
            evaluator: scenario.evaluator,
        }
    }

    /// Validate and assemble a ready-to-run [`Sim`] at tick 0.
    ///
    /// Positions start at each schedule's initial position and every station
    /// starts `Disconnected`; the first processed tick establishes real
    /// associations.
    pub fn build(self) -> SimResult<Sim> {
        self.params.validate()?;
        if self.config.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be at least 1".into()));
        }

        let count = self.stations.count();
        let positions = self
            .stations
            .schedules
            .iter()
            .map(|s| s.initial_position())
            .collect();

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("worker pool: {e}")))?,
            ),
            None => None,
        };

        Ok(Sim {
            clock:     self.config.make_clock(),
            fading:    FadingRng::new(self.config.seed),
            config:    self.config,
            stations:  self.stations,
            positions,
            aps:       self.aps,
            params:    self.params,
            evaluator: self.evaluator,
            assoc:     vec![AssociationState::new(); count],
            log:       EventLog::new(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}

//! Read-only per-station storage.

use roam_core::MacAddr;
use roam_mobility::WaypointSchedule;
use roam_scenario::Station;

/// Immutable station data, indexed by `StationId`.
///
/// Parallel vectors rather than a `Vec<Station>` so the tick loop can borrow
/// `schedules` alone while mutating position and association arrays held
/// next to it in [`Sim`][crate::Sim].
pub struct StationStore {
    pub names:     Vec<String>,
    pub macs:      Vec<MacAddr>,
    pub schedules: Vec<WaypointSchedule>,
}

impl StationStore {
    pub fn from_stations(stations: Vec<Station>) -> Self {
        let mut names = Vec::with_capacity(stations.len());
        let mut macs = Vec::with_capacity(stations.len());
        let mut schedules = Vec::with_capacity(stations.len());
        for sta in stations {
            names.push(sta.name);
            macs.push(sta.mac);
            schedules.push(sta.schedule);
        }
        Self { names, macs, schedules }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.schedules.len()
    }
}

//! Simulation observer trait for progress reporting and data collection.

use roam_assoc::{AssociationState, HandoverEvent};
use roam_core::{Point3, Tick};

use crate::StationStore;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — handover printer
///
/// ```rust,ignore
/// struct HandoverPrinter;
///
/// impl SimObserver for HandoverPrinter {
///     fn on_handover(&mut self, event: &HandoverEvent) {
///         println!("{}: {} {:?} -> {:?}", event.tick, event.station, event.from, event.to);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every handover event, in the order it was logged.
    fn on_handover(&mut self, _event: &HandoverEvent) {}

    /// Called at the end of each tick.
    ///
    /// `handovers` is the number of association changes this tick.
    fn on_tick_end(&mut self, _tick: Tick, _handovers: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    ///
    /// Provides read-only access to station data, resolved positions, and
    /// association state so output writers can record the world without the
    /// sim knowing about any specific format.
    fn on_snapshot(
        &mut self,
        _tick:      Tick,
        _stations:  &StationStore,
        _positions: &[Point3],
        _assoc:     &[AssociationState],
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

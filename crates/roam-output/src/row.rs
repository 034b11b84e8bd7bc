//! Plain data row types written by output backends.

/// One association change, as it appears in `handover_events.csv`.
///
/// `None` in `from_ap`/`to_ap` means "disconnected" and is written as an
/// empty cell.  `rssi_dbm` is empty for disconnect events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandoverEventRow {
    pub tick:       u64,
    pub station_id: u32,
    pub from_ap:    Option<u32>,
    pub to_ap:      Option<u32>,
    pub rssi_dbm:   Option<f64>,
}

/// One station's position and link state at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationSnapshotRow {
    pub tick:       u64,
    pub station_id: u32,
    pub mac:        String,
    pub x:          f64,
    pub y:          f64,
    pub z:          f64,
    /// Associated AP, or `None` when disconnected.
    pub ap:         Option<u32>,
    /// Last measured RSSI; `None` when disconnected.
    pub rssi_dbm:   Option<f64>,
}

//! Access points and the validated, spatially indexed AP table.

use rstar::RTree;
use rstar::primitives::GeomWithData;

use roam_core::{ApId, Point3};

use crate::{RadioError, RadioResult};

// ── AccessPoint ───────────────────────────────────────────────────────────────

/// A fixed access point.  Immutable for the simulation's duration — this
/// engine models no AP mobility.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessPoint {
    pub id:           ApId,
    /// Scenario name, e.g. `ap1`.  Used in logs and as the final tie-break.
    pub name:         String,
    /// Broadcast network name.  APs sharing an SSID form one roaming domain.
    pub ssid:         String,
    /// 2.4 GHz channel, 1–14.
    pub channel:      u8,
    pub position:     Point3,
    pub tx_power_dbm: f64,
    /// Nominal coverage radius in metres — a hard candidacy cutoff.
    pub range:        f64,
}

impl AccessPoint {
    /// `true` when a station at `distance` metres is inside nominal coverage.
    #[inline]
    pub fn covers(&self, distance: f64) -> bool {
        distance <= self.range
    }
}

// ── ApTable ───────────────────────────────────────────────────────────────────

/// Leaf entry in the r-tree: AP position plus its ID.
type ApGeom = GeomWithData<[f64; 3], ApId>;

/// All access points of a run, indexed for in-range candidate queries.
///
/// Construction validates every AP (positive range, channel 1–14) and
/// re-numbers nothing — `aps[id.index()].id == id` is an invariant the
/// builder enforces.  The table is read-only afterwards and may be shared
/// freely across evaluation workers.
#[derive(Debug)]
pub struct ApTable {
    aps:       Vec<AccessPoint>,
    tree:      RTree<ApGeom>,
    /// Largest nominal range in the table — the r-tree search radius.
    max_range: f64,
}

impl ApTable {
    /// Build and validate the table.
    ///
    /// # Errors
    ///
    /// - [`RadioError::NonPositiveRange`] for `range <= 0`.
    /// - [`RadioError::InvalidChannel`] for channels outside 1–14.
    /// - [`RadioError::IdMismatch`] if `aps[i].id != i`.
    pub fn new(aps: Vec<AccessPoint>) -> RadioResult<Self> {
        for (i, ap) in aps.iter().enumerate() {
            if ap.id.index() != i {
                return Err(RadioError::IdMismatch {
                    ap:       ap.name.clone(),
                    expected: i,
                });
            }
            if ap.range <= 0.0 {
                return Err(RadioError::NonPositiveRange {
                    ap:    ap.name.clone(),
                    range: ap.range,
                });
            }
            if !(1..=14).contains(&ap.channel) {
                return Err(RadioError::InvalidChannel {
                    ap:      ap.name.clone(),
                    channel: ap.channel,
                });
            }
        }

        let tree = RTree::bulk_load(
            aps.iter()
                .map(|ap| ApGeom::new(ap.position.into(), ap.id))
                .collect(),
        );
        let max_range = aps.iter().map(|ap| ap.range).fold(0.0, f64::max);

        Ok(Self { aps, tree, max_range })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.aps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aps.is_empty()
    }

    /// Look up one AP.  Panics on an out-of-range ID — the table's IDs are
    /// dense by construction, so an invalid ID is a caller bug.
    #[inline]
    pub fn get(&self, id: ApId) -> &AccessPoint {
        &self.aps[id.index()]
    }

    /// Checked lookup for query-API callers holding unvalidated IDs.
    #[inline]
    pub fn try_get(&self, id: ApId) -> Option<&AccessPoint> {
        self.aps.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccessPoint> {
        self.aps.iter()
    }

    /// All APs whose nominal range covers `pos`, with their distances,
    /// in ascending `ApId` order (deterministic regardless of tree shape).
    ///
    /// The r-tree is queried with the table-wide maximum range, then each
    /// hit is filtered by its own radius.
    pub fn in_range(&self, pos: Point3) -> Vec<(ApId, f64)> {
        let center: [f64; 3] = pos.into();
        let mut hits: Vec<(ApId, f64)> = self
            .tree
            .locate_within_distance(center, self.max_range * self.max_range)
            .filter_map(|geom| {
                let ap = self.get(geom.data);
                let distance = pos.distance(ap.position);
                ap.covers(distance).then_some((geom.data, distance))
            })
            .collect();
        hits.sort_by_key(|&(id, _)| id);
        hits
    }
}

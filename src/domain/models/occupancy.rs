use serde::{Deserialize, Serialize};

/// Backend-reported occupancy for one date + schedule.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct OccupancySnapshot {
    pub available: bool,
    pub occupancy: u32,
    pub blocked_by_private: bool,
}

impl OccupancySnapshot {
    /// The optimistic-fallback snapshot: an empty, open venue.
    pub fn vacant() -> Self {
        Self {
            available: true,
            occupancy: 0,
            blocked_by_private: false,
        }
    }
}

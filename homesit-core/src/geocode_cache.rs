use std::collections::HashMap;

use parking_lot::Mutex;

use crate::entities::MapPoint;

/// Process-local memoization of resolved locations.
///
/// Keys are the lowercased location strings, so lookups are
/// case-insensitive but otherwise verbatim (no trimming, no punctuation
/// stripping). Entries are never evicted and the contents are lost when
/// the process exits.
#[derive(Debug, Default)]
pub struct GeocodeCache {
    entries: Mutex<HashMap<String, MapPoint>>,
}

impl GeocodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup without any side effects.
    pub fn get(&self, location: &str) -> Option<MapPoint> {
        self.entries.lock().get(&normalize(location)).copied()
    }

    /// Records a successful resolution.
    pub fn insert(&self, location: &str, pos: MapPoint) {
        self.entries.lock().insert(normalize(location), pos);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

fn normalize(location: &str) -> String {
    location.to_lowercase()
}

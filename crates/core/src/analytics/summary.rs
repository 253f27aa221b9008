use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analytics::frame_record::FrameRecord;

/// Whole-run aggregates over a tracking history.
///
/// `object_classes` counts sightings, not identities: one car seen in
/// five sampled frames contributes five. `total_unique_objects` is the
/// number of distinct ids, whatever their class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingSummary {
    pub total_unique_objects: usize,
    pub object_classes: HashMap<String, usize>,
}

impl TrackingSummary {
    pub fn from_history(history: &[FrameRecord]) -> Self {
        let mut ids = HashSet::new();
        let mut classes: HashMap<String, usize> = HashMap::new();
        for record in history {
            for object in &record.objects {
                ids.insert(object.id);
                *classes.entry(object.label.clone()).or_insert(0) += 1;
            }
        }
        Self {
            total_unique_objects: ids.len(),
            object_classes: classes,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::tracking::tracked_object::TrackedObject;

/// One sampled frame's worth of tracked objects, as it appears in the
/// batch report's history. Frames with no objects never produce a
/// record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub objects: Vec<TrackedObject>,
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analytics::frame_record::FrameRecord;

/// Final result of a batch analysis run, in the shape clients receive.
///
/// `total_frames` counts frames actually read, which the frame cap may
/// hold below the source's length. `tracking_history` is truncated to
/// the configured limit while the aggregate counts cover every sampled
/// frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoReport {
    pub success: bool,
    pub filename: String,
    pub total_frames: usize,
    pub total_unique_objects: usize,
    pub object_classes: HashMap<String, usize>,
    pub tracking_history: Vec<FrameRecord>,
    pub message: String,
}

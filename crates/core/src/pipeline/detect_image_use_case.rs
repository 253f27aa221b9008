use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detection::domain::object_detector::ObjectDetector;
use crate::tracking::tracked_object::TrackedObject;
use crate::video::domain::video_reader::VideoReader;

/// Result of a one-shot frame analysis.
///
/// There is no session behind it, so ids are per-call ordinals rather
/// than track identities. `frame_id` and `timestamp` mirror the stream
/// update envelope and stay null here because a lone frame brings
/// neither.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub objects: Vec<TrackedObject>,
    pub frame_id: serde_json::Value,
    pub timestamp: serde_json::Value,
    pub total_detections: usize,
}

/// Runs detection on a single image, without tracking state.
///
/// Unlike the batch pipeline this is reusable: every `execute` opens
/// the source fresh and numbers detections from 1.
pub struct DetectImageUseCase {
    reader: Box<dyn VideoReader>,
    detector: Box<dyn ObjectDetector>,
}

impl DetectImageUseCase {
    pub fn new(reader: Box<dyn VideoReader>, detector: Box<dyn ObjectDetector>) -> Self {
        Self { reader, detector }
    }

    pub fn execute(&mut self, path: &Path) -> Result<FrameReport, Box<dyn std::error::Error>> {
        self.reader.open(path)?;
        let first = self
            .reader
            .frames()
            .next()
            .unwrap_or_else(|| Err("Source produced no frames".into()));
        self.reader.close();
        let frame = first?;

        let detections = self.detector.detect(&frame)?;
        let objects: Vec<TrackedObject> = detections
            .iter()
            .enumerate()
            .map(|(i, detection)| TrackedObject::new(i as u32 + 1, detection))
            .collect();

        log::debug!("Analyzed {path:?}: {} objects", objects.len());

        Ok(FrameReport {
            total_detections: objects.len(),
            objects,
            frame_id: serde_json::Value::Null,
            timestamp: serde_json::Value::Null,
        })
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::class_labels::{class_label, UNKNOWN_LABEL};
use crate::detection::domain::detection::Detection;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum ReplayLogError {
    #[error("failed to read detection log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid detection log at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One log entry before label resolution: detectors log either a label
/// string or a raw model class index.
#[derive(Deserialize)]
struct LoggedDetection {
    bbox: [i32; 4],
    #[serde(rename = "class")]
    label: Option<String>,
    class_id: Option<usize>,
    #[serde(default)]
    confidence: f64,
}

impl LoggedDetection {
    fn into_detection(self) -> Detection {
        let label = match (self.label, self.class_id) {
            (Some(name), _) => name,
            (None, Some(id)) => class_label(id).to_string(),
            (None, None) => UNKNOWN_LABEL.to_string(),
        };
        Detection {
            bbox: BoundingBox::from(self.bbox),
            label,
            confidence: self.confidence,
        }
    }
}

/// Plays back a recorded detection log, keyed by frame source index.
///
/// Stands in for a live model: line `i` of the log holds frame `i`'s
/// detections, and frames past the end of the log replay as empty. Use
/// one instance per session so the log can be shared without any
/// cross-session state.
#[derive(Debug)]
pub struct ReplayDetector {
    frames: Vec<Vec<Detection>>,
}

impl ReplayDetector {
    pub fn new(frames: Vec<Vec<Detection>>) -> Self {
        Self { frames }
    }

    /// Loads a JSON Lines log: line `i` is the detection array for frame
    /// `i`. Blank lines stand for frames with no detections.
    pub fn from_jsonl(path: &Path) -> Result<Self, ReplayLogError> {
        let text = fs::read_to_string(path).map_err(|source| ReplayLogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut frames = Vec::new();
        for (line_index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                frames.push(Vec::new());
                continue;
            }
            let logged: Vec<LoggedDetection> =
                serde_json::from_str(line).map_err(|source| ReplayLogError::Parse {
                    line: line_index + 1,
                    source,
                })?;
            frames.push(
                logged
                    .into_iter()
                    .map(LoggedDetection::into_detection)
                    .collect(),
            );
        }
        Ok(Self { frames })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl ObjectDetector for ReplayDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        Ok(self.frames.get(frame.index()).cloned().unwrap_or_default())
    }
}

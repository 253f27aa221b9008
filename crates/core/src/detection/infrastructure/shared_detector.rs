use std::sync::{Arc, Mutex};

use crate::detection::domain::detection::Detection;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::shared::frame::Frame;

/// Shares one detector across sessions behind a lock.
///
/// The model is the only resource sessions have in common. Each `detect`
/// call holds the lock for its full duration, so concurrent sessions see
/// the model as a serialized, blocking collaborator; their tracking state
/// stays fully independent.
#[derive(Clone)]
pub struct SharedDetector {
    inner: Arc<Mutex<Box<dyn ObjectDetector>>>,
}

impl SharedDetector {
    pub fn new(detector: Box<dyn ObjectDetector>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(detector)),
        }
    }
}

impl ObjectDetector for SharedDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        let mut detector = self
            .inner
            .lock()
            .map_err(|_| "shared detector lock poisoned")?;
        detector.detect(frame)
    }
}

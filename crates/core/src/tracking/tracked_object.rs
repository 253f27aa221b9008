use serde::{Deserialize, Serialize};

use crate::detection::domain::detection::Detection;
use crate::shared::bounding_box::BoundingBox;

/// A detection after identity assignment. This is the shape every report
/// and stream update carries.
///
/// `frame` is filled in by the batch pipeline (1-based position in the
/// source) and left empty on the streaming path, where the client's own
/// frame id travels in the envelope instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub id: u32,
    pub bbox: BoundingBox,
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<usize>,
}

impl TrackedObject {
    pub fn new(id: u32, detection: &Detection) -> Self {
        Self {
            id,
            bbox: detection.bbox,
            label: detection.label.clone(),
            confidence: detection.confidence,
            frame: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(x1: i32, y1: i32, x2: i32, y2: i32, label: &str) -> Detection {
        Detection::new(BoundingBox::new(x1, y1, x2, y2), label, 0.9)
    }

    #[test]
    fn test_new_copies_detection_fields() {
        let tracked = TrackedObject::new(7, &det(10, 20, 30, 40, "car"));

        assert_eq!(tracked.id, 7);
        assert_eq!(tracked.bbox, BoundingBox::new(10, 20, 30, 40));
        assert_eq!(tracked.label, "car");
        assert_eq!(tracked.confidence, 0.9);
        assert_eq!(tracked.frame, None);
    }

    #[test]
    fn test_serializes_class_key_and_omits_missing_frame() {
        let tracked = TrackedObject::new(1, &det(0, 0, 10, 10, "person"));

        let json = serde_json::to_value(&tracked).unwrap();
        assert_eq!(json["class"], "person");
        assert_eq!(json["bbox"], serde_json::json!([0, 0, 10, 10]));
        assert!(json.get("frame").is_none());
    }

    #[test]
    fn test_serializes_frame_when_present() {
        let mut tracked = TrackedObject::new(1, &det(0, 0, 10, 10, "person"));
        tracked.frame = Some(42);

        let json = serde_json::to_value(&tracked).unwrap();
        assert_eq!(json["frame"], 42);
    }

    #[test]
    fn test_deserializes_without_frame_field() {
        let json = r#"{"id":3,"bbox":[1,2,3,4],"class":"dog","confidence":0.5}"#;
        let tracked: TrackedObject = serde_json::from_str(json).unwrap();

        assert_eq!(tracked.id, 3);
        assert_eq!(tracked.label, "dog");
        assert_eq!(tracked.frame, None);
    }
}

use serde::{Deserialize, Serialize};

use crate::shared::bounding_box::BoundingBox;

/// One detector output for one frame.
///
/// Ephemeral: consumed by identity assignment, never stored. The label is
/// serialized under the wire name `class`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: BoundingBox,
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
}

impl Detection {
    pub fn new(bbox: BoundingBox, label: &str, confidence: f64) -> Self {
        Self {
            bbox,
            label: label.to_string(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serializes_under_wire_name() {
        let detection = Detection::new(BoundingBox::new(0, 0, 10, 10), "car", 0.9);
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["class"], "car");
        assert_eq!(json["bbox"], serde_json::json!([0, 0, 10, 10]));
        assert!(json.get("label").is_none());
    }

    #[test]
    fn test_deserializes_from_wire_shape() {
        let detection: Detection =
            serde_json::from_str(r#"{"bbox":[5,5,20,25],"class":"person","confidence":0.75}"#)
                .unwrap();
        assert_eq!(detection.label, "person");
        assert_eq!(detection.bbox, BoundingBox::new(5, 5, 20, 25));
        assert_eq!(detection.confidence, 0.75);
    }
}

/// The 80-name detection vocabulary, indexed by model class id.
pub const CLASS_NAMES: [&str; 80] = [
    "person",
    "bicycle",
    "car",
    "motorcycle",
    "airplane",
    "bus",
    "train",
    "truck",
    "boat",
    "traffic light",
    "fire hydrant",
    "stop sign",
    "parking meter",
    "bench",
    "bird",
    "cat",
    "dog",
    "horse",
    "sheep",
    "cow",
    "elephant",
    "bear",
    "zebra",
    "giraffe",
    "backpack",
    "umbrella",
    "handbag",
    "tie",
    "suitcase",
    "frisbee",
    "skis",
    "snowboard",
    "sports ball",
    "kite",
    "baseball bat",
    "baseball glove",
    "skateboard",
    "surfboard",
    "tennis racket",
    "bottle",
    "wine glass",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "chair",
    "couch",
    "potted plant",
    "bed",
    "dining table",
    "toilet",
    "tv",
    "laptop",
    "mouse",
    "remote",
    "keyboard",
    "cell phone",
    "microwave",
    "oven",
    "toaster",
    "sink",
    "refrigerator",
    "book",
    "clock",
    "vase",
    "scissors",
    "teddy bear",
    "hair drier",
    "toothbrush",
];

/// Label for class indices outside the vocabulary.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Maps a model class index to its label, falling back to [`UNKNOWN_LABEL`].
pub fn class_label(index: usize) -> &'static str {
    CLASS_NAMES.get(index).copied().unwrap_or(UNKNOWN_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first(0, "person")]
    #[case::vehicle(2, "car")]
    #[case::last(79, "toothbrush")]
    #[case::one_past_the_end(80, "unknown")]
    #[case::far_out_of_range(9999, "unknown")]
    fn test_class_label(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(class_label(index), expected);
    }

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        let unique: std::collections::HashSet<&str> = CLASS_NAMES.iter().copied().collect();
        assert_eq!(unique.len(), CLASS_NAMES.len());
    }
}

pub mod class_labels;
pub mod detection;
pub mod object_detector;

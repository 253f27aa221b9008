pub mod analytics;
pub mod detection;
pub mod pipeline;
pub mod shared;
pub mod streaming;
pub mod tracking;
pub mod video;

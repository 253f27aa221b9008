pub mod replay_detector;
pub mod shared_detector;

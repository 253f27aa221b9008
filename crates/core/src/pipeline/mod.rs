pub mod analyze_video_use_case;
pub mod detect_image_use_case;
pub mod video_report;

use std::path::PathBuf;

/// Describes an opened frame source.
///
/// Image sources follow the single-image convention: `fps = 0.0` and
/// `total_frames` counting the files in the sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub source_path: Option<PathBuf>,
}

impl VideoMetadata {
    /// Final path component of the source, used to label reports.
    pub fn file_name(&self) -> String {
        self.source_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

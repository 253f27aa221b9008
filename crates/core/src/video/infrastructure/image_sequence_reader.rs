use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;

#[derive(Error, Debug)]
pub enum SequenceOpenError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no frames found in {path}")]
    Empty { path: PathBuf },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Adapts a directory of numbered images (or a single image file) to the
/// [`VideoReader`] interface.
///
/// Directory entries are served in lexicographic filename order, so
/// zero-padded frame names play back in capture order. Metadata
/// dimensions come from the first frame's header; `fps` is reported as
/// 0 because a bare sequence carries no timing.
pub struct ImageSequenceReader {
    frames: Vec<PathBuf>,
}

impl ImageSequenceReader {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl Default for ImageSequenceReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn list_frames(path: &Path) -> Result<Vec<PathBuf>, SequenceOpenError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = std::fs::read_dir(path).map_err(|source| SequenceOpenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut frames = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SequenceOpenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let candidate = entry.path();
        if is_image_file(&candidate) {
            frames.push(candidate);
        }
    }
    frames.sort();

    if frames.is_empty() {
        return Err(SequenceOpenError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(frames)
}

fn load_frame(path: &Path, index: usize) -> Result<Frame, Box<dyn std::error::Error>> {
    let image = image::open(path)?.to_rgb8();
    let (width, height) = image.dimensions();
    Ok(Frame::new(image.into_raw(), width, height, 3, index))
}

impl VideoReader for ImageSequenceReader {
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        let frames = list_frames(path)?;

        let (width, height) =
            image::image_dimensions(&frames[0]).map_err(|source| SequenceOpenError::Decode {
                path: frames[0].clone(),
                source,
            })?;

        let metadata = VideoMetadata {
            width,
            height,
            fps: 0.0,
            total_frames: frames.len(),
            source_path: Some(path.to_path_buf()),
        };
        self.frames = frames;
        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        if self.frames.is_empty() {
            return Box::new(std::iter::once(Err(
                "ImageSequenceReader: not opened".into()
            )));
        }
        let paths = std::mem::take(&mut self.frames);
        Box::new(
            paths
                .into_iter()
                .enumerate()
                .map(|(index, path)| load_frame(&path, index)),
        )
    }

    fn close(&mut self) {
        self.frames.clear();
    }
}

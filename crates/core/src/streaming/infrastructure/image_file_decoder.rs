use std::path::Path;

use crate::shared::frame::Frame;
use crate::streaming::frame_decoder::FrameDecoder;

/// Decodes frame payloads that name image files on local disk.
///
/// This is the decoder behind the stdin/stdout stream front end, where
/// clients send paths instead of inline image bytes. Decoded frames are
/// numbered in arrival order; a failed decode does not advance the
/// numbering.
pub struct ImageFileDecoder {
    frames_decoded: usize,
}

impl ImageFileDecoder {
    pub fn new() -> Self {
        Self { frames_decoded: 0 }
    }
}

impl Default for ImageFileDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder for ImageFileDecoder {
    fn decode(&mut self, payload: &str) -> Result<Frame, Box<dyn std::error::Error>> {
        let image = image::open(Path::new(payload))?.to_rgb8();
        let (width, height) = image.dimensions();
        let frame = Frame::new(image.into_raw(), width, height, 3, self.frames_decoded);
        self.frames_decoded += 1;
        Ok(frame)
    }
}

use crate::shared::frame::Frame;

/// Turns a client's frame payload into pixels.
///
/// The payload is the raw `image` field of a frame message;
/// implementations decide what it denotes (a file path, a data URL, a
/// blob reference).
pub trait FrameDecoder: Send {
    fn decode(&mut self, payload: &str) -> Result<Frame, Box<dyn std::error::Error>>;
}

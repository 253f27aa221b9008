/// One connection's message pipe, seen from the session side.
///
/// `receive` blocks for the next inbound message and returns `Ok(None)`
/// once the peer has closed the connection.
pub trait MessageTransport: Send {
    fn receive(&mut self) -> Result<Option<String>, Box<dyn std::error::Error>>;

    fn send(&mut self, message: &str) -> Result<(), Box<dyn std::error::Error>>;
}

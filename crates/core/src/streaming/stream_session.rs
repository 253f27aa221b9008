use crate::detection::domain::object_detector::ObjectDetector;
use crate::streaming::connection_registry::ConnectionRegistry;
use crate::streaming::frame_decoder::FrameDecoder;
use crate::streaming::message_transport::MessageTransport;
use crate::streaming::protocol::{
    timestamp_now, ClientMessage, ErrorReply, ServerMessage, StreamReply,
};
use crate::tracking::tracking_session::TrackingSession;

/// One connection's state: decoder, detector handle and tracking
/// session, constructed together and torn down together.
///
/// Frame failures (undecodable image, detector fault) are answered
/// in-band and leave tracking state untouched; only an unparseable
/// message ends the session with an error.
pub struct StreamSession {
    decoder: Box<dyn FrameDecoder>,
    detector: Box<dyn ObjectDetector>,
    session: TrackingSession,
}

impl StreamSession {
    pub fn new(decoder: Box<dyn FrameDecoder>, detector: Box<dyn ObjectDetector>) -> Self {
        Self {
            decoder,
            detector,
            session: TrackingSession::new(),
        }
    }

    /// Handles one parsed message. `None` means no reply is owed.
    pub fn handle_message(&mut self, message: ClientMessage) -> Option<ServerMessage> {
        match message {
            ClientMessage::Frame { image, frame_id } => {
                Some(match self.process_frame(&image, frame_id) {
                    Ok(reply) => ServerMessage::Reply(reply),
                    Err(e) => ServerMessage::Error(ErrorReply {
                        error: e.to_string(),
                    }),
                })
            }
            ClientMessage::Ping => Some(ServerMessage::Reply(StreamReply::Pong)),
            ClientMessage::Unknown => None,
        }
    }

    fn process_frame(
        &mut self,
        image: &str,
        frame_id: serde_json::Value,
    ) -> Result<StreamReply, Box<dyn std::error::Error>> {
        let frame = self.decoder.decode(image)?;
        let detections = self.detector.detect(&frame)?;
        let objects = self.session.submit_frame(&detections);
        Ok(StreamReply::TrackingUpdate {
            total_detections: objects.len(),
            objects,
            frame_id,
            timestamp: timestamp_now(),
        })
    }

    pub fn track_count(&self) -> usize {
        self.session.track_count()
    }

    /// Serves the connection until the peer departs or a message fails
    /// to parse. The registry entry is released on every exit path.
    pub fn run(
        &mut self,
        transport: &mut dyn MessageTransport,
        registry: &ConnectionRegistry,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let id = registry.register();
        let outcome = self.serve(transport);
        if let Err(e) = &outcome {
            log::warn!("Client {id} session failed: {e}");
        }
        registry.unregister(id);
        outcome
    }

    fn serve(
        &mut self,
        transport: &mut dyn MessageTransport,
    ) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let raw = match transport.receive()? {
                Some(raw) => raw,
                None => return Ok(()),
            };
            let message: ClientMessage = serde_json::from_str(&raw)?;
            if let Some(reply) = self.handle_message(message) {
                let encoded = serde_json::to_string(&reply)?;
                transport.send(&encoded)?;
            }
        }
    }
}

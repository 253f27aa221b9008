pub mod connection_registry;
pub mod frame_decoder;
pub mod infrastructure;
pub mod message_transport;
pub mod protocol;
pub mod stream_session;

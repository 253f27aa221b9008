pub mod channel_transport;
pub mod image_file_decoder;
pub mod stdio_transport;

use std::io::{BufRead, Write};

use crate::streaming::message_transport::MessageTransport;

/// Line-oriented transport: one JSON message per line in each
/// direction. Blank lines on the way in are skipped; end of input reads
/// as the peer closing.
///
/// `new` binds to the process's stdin/stdout. Logging goes to stderr,
/// so the outbound line stream stays parseable.
pub struct StdioTransport {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            input: Box::new(std::io::BufReader::new(std::io::stdin())),
            output: Box::new(std::io::stdout()),
        }
    }

    pub fn with_streams(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self { input, output }
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageTransport for StdioTransport {
    fn receive(&mut self) -> Result<Option<String>, Box<dyn std::error::Error>> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    fn send(&mut self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }
}

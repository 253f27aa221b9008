use crate::streaming::message_transport::MessageTransport;

/// In-process transport backed by a pair of bounded channels. The
/// session side implements [`MessageTransport`]; the returned peer is
/// the client's end. Dropping the peer reads as a clean disconnect.
pub struct ChannelTransport {
    inbound_rx: crossbeam_channel::Receiver<String>,
    outbound_tx: crossbeam_channel::Sender<String>,
}

/// Client half of a [`pair`]. `receive` blocks for the next reply and
/// returns `None` once the session side is gone.
pub struct ChannelPeer {
    inbound_tx: crossbeam_channel::Sender<String>,
    outbound_rx: crossbeam_channel::Receiver<String>,
}

/// Builds a connected transport/peer pair with the given channel
/// capacity in each direction.
pub fn pair(capacity: usize) -> (ChannelTransport, ChannelPeer) {
    let (inbound_tx, inbound_rx) = crossbeam_channel::bounded::<String>(capacity);
    let (outbound_tx, outbound_rx) = crossbeam_channel::bounded::<String>(capacity);
    (
        ChannelTransport {
            inbound_rx,
            outbound_tx,
        },
        ChannelPeer {
            inbound_tx,
            outbound_rx,
        },
    )
}

impl MessageTransport for ChannelTransport {
    fn receive(&mut self) -> Result<Option<String>, Box<dyn std::error::Error>> {
        match self.inbound_rx.recv() {
            Ok(message) => Ok(Some(message)),
            // All senders gone: the peer hung up.
            Err(_) => Ok(None),
        }
    }

    fn send(&mut self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.outbound_tx.send(message.to_string())?;
        Ok(())
    }
}

impl ChannelPeer {
    pub fn send(&self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.inbound_tx.send(message.to_string())?;
        Ok(())
    }

    pub fn receive(&self) -> Option<String> {
        self.outbound_rx.recv().ok()
    }
}

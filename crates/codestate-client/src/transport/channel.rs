//! Channel-backed transport for tests and in-process hosts.

use super::HostTransport;
use crate::protocol::Envelope;
use tokio::sync::mpsc;

/// Forwards envelopes into an unbounded channel.
pub struct ChannelTransport {
    sender: mpsc::UnboundedSender<Envelope>,
}

impl ChannelTransport {
    /// Creates the transport and the receiving end the host side drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Envelope>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wraps an existing sender.
    pub fn from_sender(sender: mpsc::UnboundedSender<Envelope>) -> Self {
        Self { sender }
    }
}

impl HostTransport for ChannelTransport {
    fn post(&self, envelope: Envelope) {
        // Non-blocking send - if the receiver is dropped, we just skip
        let _ = self.sender.send(envelope);
    }
}

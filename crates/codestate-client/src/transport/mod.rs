//! Outbound seam to the host.
//!
//! The webview's messaging primitive is fire-and-forget: posting never
//! fails visibly and never blocks. Embedders implement [`HostTransport`]
//! over whatever bridge the IDE provides; [`ChannelTransport`] covers tests
//! and in-process hosts.

mod channel;

pub use channel::ChannelTransport;

use crate::protocol::Envelope;

/// Posts envelopes to the host.
pub trait HostTransport: Send {
    /// Fire-and-forget send. Delivery, ordering across kinds, and whether a
    /// response ever arrives are all host concerns.
    fn post(&self, envelope: Envelope);
}

//! Subscriber-facing delivery sinks.
//!
//! The router hands serialized envelopes to subscribers through the
//! [`DataSink`] capability and knows nothing else about them. A sink must
//! never block the dispatch path: implementations that need buffering own
//! it internally and shed load when full, like [`ChannelSink`].

mod channel;


pub use channel::ChannelSink;

use bytes::Bytes;

/// Where the router pushes serialized envelopes.
///
/// # Contract
///
/// - `accept` is called concurrently from any number of dispatch threads
///   and must be non-blocking; delivery is best-effort and a sink that
///   cannot keep up drops data rather than stalling unrelated dispatch.
/// - The router neither inspects nor retains `data` after the call
///   returns.
/// - `accept` must not call back into the router on the calling thread;
///   registration from inside a delivery would deadlock on the registry
///   lock.
pub trait DataSink: Send + Sync {
    /// Hands one serialized envelope to the subscriber.
    fn accept(&self, data: Bytes);
}

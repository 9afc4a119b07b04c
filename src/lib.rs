//! # riffle
//!
//! An in-memory subscription router for platform telemetry: the fan-out
//! core of a log/metric aggregator node.
//!
//! ## Features
//! - **Firehose, per-app and logs-only subscriptions**: consumers pick how
//!   much of the stream they want
//! - **Shard groups**: like-named subscribers split one stream, each
//!   envelope reaching exactly one member
//! - **Contention-friendly**: registration, deregistration and dispatch
//!   run concurrently; dispatch never blocks on a slow subscriber
//! - **Best-effort delivery**: lossy per-subscriber buffering keeps one
//!   stuck consumer from stalling the rest
//! - **Memory-only**: no persistence, no global state; a process may host
//!   many routers
//!
//! ## Quick Start
//! ```
//! use riffle::proto::events::{Envelope, EventType, LogMessage};
//! use riffle::proto::subscriptions::SubscriptionRequest;
//! use riffle::{ChannelSink, Router};
//!
//! let router = Router::new();
//!
//! // A firehose consumer: sees every envelope, shares the "cli" shard.
//! let (sink, mut rx) = ChannelSink::new(100);
//! let subscription = router.register(&SubscriptionRequest::firehose("cli"), sink);
//!
//! // A producer hands an envelope to the router, keyed by app id.
//! let envelope = Envelope {
//!     origin: "router-docs".into(),
//!     event_type: EventType::LogMessage as i32,
//!     log_message: Some(LogMessage {
//!         app_id: Some("app-1".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! router.send_to("app-1", &envelope);
//!
//! let delivered = rx.try_recv().expect("envelope delivered");
//! assert!(!delivered.is_empty());
//!
//! subscription.deregister();
//! ```

pub mod codec;
pub mod config;
pub mod proto;
pub mod router;
pub mod sink;

mod errors;
mod metrics;

pub use config::SinkConfig;
pub use errors::*;
pub use metrics::{MetricsSnapshot, RouterMetrics};
pub use router::{RegistryCounts, Router, Subscription};
pub use sink::{ChannelSink, DataSink};

//-----------------------------------------------------------
// Test utils
#[cfg(test)]
#[doc(hidden)]
pub mod test_utils;

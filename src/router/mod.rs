//! Subscription routing for telemetry envelopes.
//!
//! The router is the fan-out core of an aggregator node: producers push
//! envelopes keyed by application id, consumers register subscriptions
//! (firehose, per-app, or per-app logs-only, optionally shard-grouped),
//! and each envelope reaches every matching direct subscriber plus exactly
//! one member of each matching shard group.
//!
//! ```text
//!  producers ──► Router::send_to(app_id, envelope)
//!                      │  classify + serialize once
//!                      ▼
//!           ┌─ SubscriptionIndex (RwLock) ─┐
//!           │ direct firehose  [S1, S2]    │──► every match
//!           │ direct streams   app → [..]  │──► every match
//!           │ shard groups     "cf" → {..} │──► one member per group
//!           └────────────────────────────--┘        (balancer)
//!                      │
//!                      ▼
//!            DataSink::accept(bytes)   non-blocking, best-effort
//! ```
//!
//! Registration and deregistration take the exclusive side of the lock,
//! so dispatch sees each subscription either fully indexed or not at all,
//! and a returned deregistration call guarantees no further deliveries.

mod balancer;
mod dispatch;
mod index;
mod registry;

#[cfg(test)]
mod index_test;

pub use index::RegistryCounts;
pub use registry::{Router, Subscription};

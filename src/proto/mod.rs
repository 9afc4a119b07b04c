//! Wire-format types for the telemetry fabric.
//!
//! The [`events`] module holds the platform's fixed event schema: the
//! [`events::Envelope`] container plus one payload message per event type.
//! The [`subscriptions`] module holds the consumer-facing subscription
//! request schema. Both are maintained in prost-generated style so the wire
//! encoding stays byte-stable without a protoc step in the build.
//!
//! Hand-written helper impls live in [`exts`].

pub mod events;
pub mod subscriptions;

pub mod exts;

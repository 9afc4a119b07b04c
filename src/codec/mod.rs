//! Envelope wire codec.
//!
//! The router reads exactly two things from an envelope: the event-type tag
//! and the application id. [`classify`] extracts both without touching the
//! rest of the message; [`serialize`] produces the canonical byte form that
//! is fanned out to subscribers, at most once per dispatch.
//!
//! An envelope whose raw event-type tag maps onto no known event type is
//! malformed and is rejected by every operation here; the dispatcher drops
//! such envelopes before any subscriber sees them.


use bytes::Bytes;
use prost::Message;

use crate::errors::CodecError;
use crate::proto::events::{Envelope, EventType};

/// Routing-relevant facts extracted from an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub event_type: EventType,
    /// Application id carried by the payload, when the event type is
    /// app-scoped.
    pub app_id: Option<&'a str>,
}

/// Extracts the event type and app id without serializing.
pub fn classify(envelope: &Envelope) -> Result<Classification<'_>, CodecError> {
    let event_type = EventType::try_from(envelope.event_type)
        .map_err(|_| CodecError::MissingEventType(envelope.event_type))?;

    Ok(Classification {
        event_type,
        app_id: envelope.app_id(),
    })
}

/// Canonical encoding of an envelope.
///
/// Stable across calls: serializing the same envelope twice yields
/// identical bytes, so every subscriber reached by one dispatch observes
/// the same byte form.
pub fn serialize(envelope: &Envelope) -> Result<Bytes, CodecError> {
    if EventType::try_from(envelope.event_type).is_err() {
        return Err(CodecError::MissingEventType(envelope.event_type));
    }

    Ok(Bytes::from(envelope.encode_to_vec()))
}

/// Decodes an envelope from its wire form, rejecting untagged envelopes.
pub fn deserialize(data: &[u8]) -> Result<Envelope, CodecError> {
    let envelope = Envelope::decode(data)?;

    if EventType::try_from(envelope.event_type).is_err() {
        return Err(CodecError::MissingEventType(envelope.event_type));
    }

    Ok(envelope)
}

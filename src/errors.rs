//! Telemetry Router Error Hierarchy
//!
//! Defines the error types for the subscription router, categorized by
//! concern. The dispatch path itself never surfaces errors to producers;
//! these types cover envelope codec failures and configuration validation.

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Envelope encode/decode failures
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Configuration validation failures
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The envelope's event-type tag is absent or unrecognized. Such an
    /// envelope must never reach a subscriber.
    #[error("envelope carries no recognized event type tag (raw value {0})")]
    MissingEventType(i32),

    /// Wire-format decode failures
    #[error(transparent)]
    Decode(#[from] prost::DecodeError),
}

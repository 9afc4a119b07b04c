// Subscription request schema. Field numbering is wire-stable; do not
// renumber.

/// A consumer's request to receive envelopes from the fabric.
///
/// An empty `shard_id` means the subscription is not a member of any shard
/// group and receives every matching envelope directly. An absent `filter`
/// means firehose: every envelope matches.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscriptionRequest {
    /// Subscriptions sharing a non-empty shard id form a shard group; each
    /// envelope reaches exactly one member of the group.
    #[prost(string, tag = "1")]
    pub shard_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub filter: ::core::option::Option<Filter>,
}

/// Restricts a subscription to a single application, optionally narrowed
/// further by event type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filter {
    /// Application whose envelopes the subscription wants.
    #[prost(string, tag = "1")]
    pub app_id: ::prost::alloc::string::String,
    /// Optional event-type narrowing. Absent means all event types for the
    /// application.
    #[prost(oneof = "filter::Message", tags = "2")]
    pub message: ::core::option::Option<filter::Message>,
}
/// Nested message and enum types in `Filter`.
pub mod filter {
    /// Optional event-type narrowing. Absent means all event types for the
    /// application.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Message {
        #[prost(message, tag = "2")]
        Log(super::LogFilter),
    }
}

/// Restricts delivery to log messages.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct LogFilter {}

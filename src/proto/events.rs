// Platform event schema. Field numbering is wire-stable; do not renumber.

/// Wrapper for all telemetry event payloads. Routing reads only
/// `event_type` and the payload's application id; everything else is
/// carried opaquely.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Envelope {
    /// Unique description of the origin of this event.
    #[prost(string, tag = "1")]
    pub origin: ::prost::alloc::string::String,
    /// Type of wrapped event. Only the payload corresponding to the
    /// selected event type is expected to be set.
    #[prost(int32, tag = "2")]
    pub event_type: i32,
    /// UNIX timestamp (in nanoseconds) event was wrapped in this envelope.
    #[prost(int64, optional, tag = "6")]
    pub timestamp: ::core::option::Option<i64>,
    /// Deployment name (used to uniquely identify source).
    #[prost(string, optional, tag = "13")]
    pub deployment: ::core::option::Option<::prost::alloc::string::String>,
    /// Job name (used to uniquely identify source).
    #[prost(string, optional, tag = "14")]
    pub job: ::core::option::Option<::prost::alloc::string::String>,
    /// Index of job (used to uniquely identify source).
    #[prost(string, optional, tag = "15")]
    pub index: ::core::option::Option<::prost::alloc::string::String>,
    /// IP address (used to uniquely identify source).
    #[prost(string, optional, tag = "16")]
    pub ip: ::core::option::Option<::prost::alloc::string::String>,
    /// Key/value tags to include additional identifying information.
    #[prost(map = "string, string", tag = "17")]
    pub tags: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(message, optional, tag = "7")]
    pub http_start_stop: ::core::option::Option<HttpStartStop>,
    #[prost(message, optional, tag = "8")]
    pub log_message: ::core::option::Option<LogMessage>,
    #[prost(message, optional, tag = "9")]
    pub value_metric: ::core::option::Option<ValueMetric>,
    #[prost(message, optional, tag = "10")]
    pub counter_event: ::core::option::Option<CounterEvent>,
    #[prost(message, optional, tag = "11")]
    pub error: ::core::option::Option<Error>,
    #[prost(message, optional, tag = "12")]
    pub container_metric: ::core::option::Option<ContainerMetric>,
}

/// Type of the wrapped event. There is no zero value; an envelope whose
/// raw tag does not map onto one of these variants is malformed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
)]
#[repr(i32)]
pub enum EventType {
    HttpStartStop = 4,
    LogMessage = 5,
    ValueMetric = 6,
    CounterEvent = 7,
    Error = 8,
    ContainerMetric = 9,
}

impl EventType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered
    /// stable (if the ProtoBuf definition does not change) and safe for
    /// programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            EventType::HttpStartStop => "HttpStartStop",
            EventType::LogMessage => "LogMessage",
            EventType::ValueMetric => "ValueMetric",
            EventType::CounterEvent => "CounterEvent",
            EventType::Error => "Error",
            EventType::ContainerMetric => "ContainerMetric",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "HttpStartStop" => Some(Self::HttpStartStop),
            "LogMessage" => Some(Self::LogMessage),
            "ValueMetric" => Some(Self::ValueMetric),
            "CounterEvent" => Some(Self::CounterEvent),
            "Error" => Some(Self::Error),
            "ContainerMetric" => Some(Self::ContainerMetric),
            _ => None,
        }
    }
}

/// An application log line, emitted to stdout or stderr of an instance.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogMessage {
    /// Bytes of the log message (may not be UTF-8).
    #[prost(bytes = "bytes", tag = "1")]
    pub message: ::prost::bytes::Bytes,
    /// Type of the message (OUT or ERR).
    #[prost(enumeration = "log_message::MessageType", tag = "2")]
    pub message_type: i32,
    /// UNIX timestamp (in nanoseconds) when the log was written.
    #[prost(int64, tag = "3")]
    pub timestamp: i64,
    /// Application that emitted the message (or to which the application is
    /// related).
    #[prost(string, optional, tag = "4")]
    pub app_id: ::core::option::Option<::prost::alloc::string::String>,
    /// Source of the message. For Cloud Foundry, this can be "APP", "RTR",
    /// "DEA", "STG", etc.
    #[prost(string, optional, tag = "5")]
    pub source_type: ::core::option::Option<::prost::alloc::string::String>,
    /// Instance that emitted the message.
    #[prost(string, optional, tag = "6")]
    pub source_instance: ::core::option::Option<::prost::alloc::string::String>,
}
/// Nested message and enum types in `LogMessage`.
pub mod log_message {
    /// Destination stream of the message.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum MessageType {
        Out = 1,
        Err = 2,
    }

    impl MessageType {
        /// String value of the enum field names used in the ProtoBuf
        /// definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                MessageType::Out => "OUT",
                MessageType::Err => "ERR",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OUT" => Some(Self::Out),
                "ERR" => Some(Self::Err),
                _ => None,
            }
        }
    }
}

/// An incrementing counter event.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CounterEvent {
    /// Name of the counter. Must be consistent for downstream consumers to
    /// associate events semantically.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Amount by which to increment the counter.
    #[prost(uint64, tag = "2")]
    pub delta: u64,
    /// Total value of the counter. This will be overridden by Metron, which
    /// internally tracks the total of each named counter it receives.
    #[prost(uint64, optional, tag = "3")]
    pub total: ::core::option::Option<u64>,
}

/// An instantaneous measurement of a named quantity.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueMetric {
    /// Name of the metric. Must be consistent for downstream consumers to
    /// associate events semantically.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Value at the time of event emission.
    #[prost(double, tag = "2")]
    pub value: f64,
    /// Unit of the metric.
    #[prost(string, tag = "3")]
    pub unit: ::prost::alloc::string::String,
}

/// Resource usage of an application instance.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContainerMetric {
    /// ID of the contained application.
    #[prost(string, tag = "1")]
    pub application_id: ::prost::alloc::string::String,
    /// Instance index of the contained application (used to uniquely
    /// identify the container).
    #[prost(int32, tag = "2")]
    pub instance_index: i32,
    /// CPU based on number of cores.
    #[prost(double, tag = "3")]
    pub cpu_percentage: f64,
    /// Bytes of memory used.
    #[prost(uint64, tag = "4")]
    pub memory_bytes: u64,
    /// Bytes of disk used.
    #[prost(uint64, tag = "5")]
    pub disk_bytes: u64,
}

/// An error in a platform component.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Error {
    /// Source of the error.
    #[prost(string, tag = "1")]
    pub source: ::prost::alloc::string::String,
    /// Numeric error code (source-specific).
    #[prost(int32, tag = "2")]
    pub code: i32,
    /// Error description (preferably human-readable).
    #[prost(string, tag = "3")]
    pub message: ::prost::alloc::string::String,
}

/// The whole lifecycle of an HTTP request, from the perspective of either
/// the client or the server.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpStartStop {
    /// UNIX timestamp (in nanoseconds) when the request was sent (by a
    /// client) or received (by a server).
    #[prost(int64, optional, tag = "1")]
    pub start_timestamp: ::core::option::Option<i64>,
    /// UNIX timestamp (in nanoseconds) when the request was received.
    #[prost(int64, optional, tag = "2")]
    pub stop_timestamp: ::core::option::Option<i64>,
    /// ID for tracking lifecycle of the request.
    #[prost(string, optional, tag = "3")]
    pub request_id: ::core::option::Option<::prost::alloc::string::String>,
    /// Role of the emitting process in the request cycle.
    #[prost(enumeration = "http_start_stop::PeerType", optional, tag = "4")]
    pub peer_type: ::core::option::Option<i32>,
    /// Method of the request.
    #[prost(enumeration = "http_start_stop::Method", optional, tag = "5")]
    pub method: ::core::option::Option<i32>,
    /// Destination of the request.
    #[prost(string, optional, tag = "6")]
    pub uri: ::core::option::Option<::prost::alloc::string::String>,
    /// Remote address of the request (for a server, the client's address).
    #[prost(string, optional, tag = "7")]
    pub remote_address: ::core::option::Option<::prost::alloc::string::String>,
    /// Contents of the UserAgent header on the request.
    #[prost(string, optional, tag = "8")]
    pub user_agent: ::core::option::Option<::prost::alloc::string::String>,
    /// Status code returned with the response to the request.
    #[prost(int32, optional, tag = "9")]
    pub status_code: ::core::option::Option<i32>,
    /// Length of the response in bytes.
    #[prost(int64, optional, tag = "10")]
    pub content_length: ::core::option::Option<i64>,
    /// ID of the application to which the request was routed, if any.
    #[prost(string, optional, tag = "12")]
    pub application_id: ::core::option::Option<::prost::alloc::string::String>,
    /// Index of the application instance to which the request was routed.
    #[prost(int32, optional, tag = "13")]
    pub instance_index: ::core::option::Option<i32>,
}
/// Nested message and enum types in `HttpStartStop`.
pub mod http_start_stop {
    /// Role of the process emitting the event.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum PeerType {
        Client = 1,
        Server = 2,
    }

    impl PeerType {
        /// String value of the enum field names used in the ProtoBuf
        /// definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                PeerType::Client => "Client",
                PeerType::Server => "Server",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "Client" => Some(Self::Client),
                "Server" => Some(Self::Server),
                _ => None,
            }
        }
    }

    /// HTTP method of the request.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum Method {
        Get = 1,
        Post = 2,
        Put = 3,
        Delete = 4,
        Head = 5,
        Options = 6,
        Patch = 7,
    }

    impl Method {
        /// String value of the enum field names used in the ProtoBuf
        /// definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Method::Get => "GET",
                Method::Post => "POST",
                Method::Put => "PUT",
                Method::Delete => "DELETE",
                Method::Head => "HEAD",
                Method::Options => "OPTIONS",
                Method::Patch => "PATCH",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "GET" => Some(Self::Get),
                "POST" => Some(Self::Post),
                "PUT" => Some(Self::Put),
                "DELETE" => Some(Self::Delete),
                "HEAD" => Some(Self::Head),
                "OPTIONS" => Some(Self::Options),
                "PATCH" => Some(Self::Patch),
                _ => None,
            }
        }
    }
}

use crate::proto::subscriptions::filter::Message;
use crate::proto::subscriptions::{Filter, LogFilter, SubscriptionRequest};

impl SubscriptionRequest {
    /// A firehose subscription: every envelope matches. An empty `shard_id`
    /// keeps the subscription out of any shard group.
    pub fn firehose(shard_id: impl Into<String>) -> Self {
        Self {
            shard_id: shard_id.into(),
            filter: None,
        }
    }

    /// A subscription to every envelope of one application.
    pub fn app_stream(
        shard_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Self {
        Self {
            shard_id: shard_id.into(),
            filter: Some(Filter::app(app_id)),
        }
    }

    /// A subscription to the log messages of one application.
    pub fn log_stream(
        shard_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Self {
        Self {
            shard_id: shard_id.into(),
            filter: Some(Filter::app_logs(app_id)),
        }
    }

    /// True iff the subscription is a member of a shard group.
    pub fn is_sharded(&self) -> bool {
        !self.shard_id.is_empty()
    }
}

impl Filter {
    /// Matches every envelope of the application.
    pub fn app(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            message: None,
        }
    }

    /// Matches only the application's log messages.
    pub fn app_logs(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            message: Some(Message::Log(LogFilter {})),
        }
    }

    /// True iff the filter restricts delivery to log messages.
    pub fn wants_logs_only(&self) -> bool {
        matches!(self.message, Some(Message::Log(_)))
    }
}

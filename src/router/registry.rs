use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Weak;

use bytes::Bytes;
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::debug;
use tracing::trace;

use crate::config::SinkConfig;
use crate::metrics::{MetricsSnapshot, RouterMetrics};
use crate::proto::subscriptions::SubscriptionRequest;
use crate::router::index::{
    RegistryCounts, StreamFilter, SubscriberId, SubscriberRecord, SubscriptionIndex,
};
use crate::sink::{ChannelSink, DataSink};

/// The subscription router.
///
/// Producers call [`Router::send_to`]; consumers call [`Router::register`]
/// and hold the returned [`Subscription`] until they want out. All three
/// are callable concurrently from any thread. Clones share one router.
///
/// The index sits behind a reader/writer lock: dispatch holds the shared
/// side across its non-blocking sink calls, registration and
/// deregistration take the exclusive side for index surgery only. A
/// record is therefore never visible in a subset of its index slots, and
/// once `deregister` returns the sink will not be called again.
#[derive(Clone)]
pub struct Router {
    shared: Arc<RouterShared>,
}

pub(crate) struct RouterShared {
    pub(crate) subscriptions: RwLock<SubscriptionIndex>,
    pub(crate) metrics: Arc<RouterMetrics>,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl Router {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(RouterShared {
                subscriptions: RwLock::new(SubscriptionIndex::default()),
                metrics: Arc::new(RouterMetrics::default()),
                next_id: AtomicU64::new(1),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Registers a subscriber and returns its deregistration token.
    ///
    /// The record becomes visible to dispatch atomically: a concurrent
    /// `send_to` sees it either everywhere it belongs or not at all. The
    /// closed check happens under the same write guard as the insert, so
    /// a register racing [`Router::close`] either lands before the clear
    /// or comes back inert; no record can slip into a closed router.
    /// Dropping the token does NOT deregister; transports hold sinks far
    /// beyond any local scope, so removal is always an explicit
    /// [`Subscription::deregister`] call.
    pub fn register(
        &self,
        request: &SubscriptionRequest,
        sink: Arc<dyn DataSink>,
    ) -> Subscription {
        let mut subscriptions = self.shared.subscriptions.write();
        if self.shared.closed.load(Ordering::Acquire) {
            debug!("register on closed router ignored");
            return Subscription::inert();
        }

        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        let shard_id: Option<Arc<str>> = (!request.shard_id.is_empty())
            .then(|| request.shard_id.as_str().into());
        let filter = StreamFilter::from_request(request);

        let record = Arc::new(SubscriberRecord {
            id,
            shard_id: shard_id.clone(),
            filter: filter.clone(),
            sink,
        });

        subscriptions.insert(record);
        self.shared.metrics.subscription_registered();
        drop(subscriptions);

        trace!(
            subscriber_id = id,
            shard_id = %request.shard_id,
            "subscriber registered"
        );

        Subscription {
            shared: Arc::downgrade(&self.shared),
            id,
            shard_id,
            filter,
            active: AtomicBool::new(true),
        }
    }

    /// Shuts the router down: existing subscriptions are dropped, further
    /// `register` calls return inert tokens and `send_to` becomes a
    /// no-op. Idempotent. The closed flag flips under the write guard, so
    /// once `close` returns no register can add a record anymore.
    pub fn close(&self) {
        let mut subscriptions = self.shared.subscriptions.write();
        if self.shared.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        let dropped = subscriptions.clear();
        self.shared.metrics.subscriptions_dropped(dropped);
        drop(subscriptions);

        debug!(subscribers = dropped, "router closed");
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    pub(crate) fn shared(&self) -> &RouterShared {
        &self.shared
    }

    /// Creates a [`ChannelSink`] wired to this router's counters:
    /// envelopes the sink sheds on overflow show up in
    /// [`Router::metrics`] as `sink_drops`, on top of the sink's own
    /// [`dropped`](ChannelSink::dropped) count.
    pub fn channel_sink(
        &self,
        config: &SinkConfig,
    ) -> (Arc<ChannelSink>, mpsc::Receiver<Bytes>) {
        ChannelSink::with_metrics(config.buffer_size, Arc::clone(&self.shared.metrics))
    }

    /// Counts of currently registered subscriptions.
    pub fn counts(&self) -> RegistryCounts {
        self.shared.subscriptions.read().counts()
    }

    /// A point-in-time copy of the router's counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.shared.metrics.snapshot()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Deregistration token for one subscription.
///
/// [`deregister`](Subscription::deregister) is idempotent and synchronous:
/// it waits out any in-flight dispatch, and once it returns the sink will
/// never be called again. The token holds only a weak router reference
/// and the record's index coordinates, so it neither keeps the router
/// alive nor retains the sink.
pub struct Subscription {
    shared: Weak<RouterShared>,
    id: SubscriberId,
    shard_id: Option<Arc<str>>,
    filter: StreamFilter,
    active: AtomicBool,
}

impl Subscription {
    /// A token that was never backed by a record (router already closed).
    fn inert() -> Self {
        Self {
            shared: Weak::new(),
            id: 0,
            shard_id: None,
            filter: StreamFilter::Firehose,
            active: AtomicBool::new(false),
        }
    }

    /// Removes the subscription from every index slot it occupies.
    /// Second and later calls are no-ops.
    pub fn deregister(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }

        let Some(shared) = self.shared.upgrade() else {
            return;
        };

        let removed = shared.subscriptions.write().remove(
            self.id,
            self.shard_id.as_deref(),
            &self.filter,
        );
        if removed {
            shared.metrics.subscription_deregistered();
            trace!(subscriber_id = self.id, "subscriber deregistered");
        }
    }

    /// False once [`deregister`](Subscription::deregister) has run (or
    /// the token was inert from the start).
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

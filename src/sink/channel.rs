use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::trace;

use crate::config::SinkConfig;
use crate::metrics::RouterMetrics;
use crate::sink::DataSink;

/// A bounded, lossy sink backed by an mpsc channel.
///
/// The sending half never blocks: when the subscriber's receiver falls
/// behind and the buffer fills up, new envelopes are dropped and counted.
/// This keeps one slow consumer from stalling dispatch to everyone else.
/// Transport layers (e.g. a gRPC stream task) own the receiving half and
/// drain it at their own pace.
///
/// Sinks created through [`Router::channel_sink`](crate::Router::channel_sink)
/// additionally report every shed envelope into that router's metrics.
pub struct ChannelSink {
    tx: mpsc::Sender<Bytes>,
    dropped: AtomicU64,
    router_metrics: Option<Arc<RouterMetrics>>,
}

impl ChannelSink {
    /// Creates a standalone sink with the given buffer capacity,
    /// returning the sink and the receiving half.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; validate via [`SinkConfig`] first.
    pub fn new(capacity: usize) -> (Arc<Self>, mpsc::Receiver<Bytes>) {
        Self::build(capacity, None)
    }

    /// Creates a standalone sink sized by configuration.
    pub fn with_config(config: &SinkConfig) -> (Arc<Self>, mpsc::Receiver<Bytes>) {
        Self::build(config.buffer_size, None)
    }

    /// Creates a sink whose drop count also feeds a router's counters.
    pub(crate) fn with_metrics(
        capacity: usize,
        metrics: Arc<RouterMetrics>,
    ) -> (Arc<Self>, mpsc::Receiver<Bytes>) {
        Self::build(capacity, Some(metrics))
    }

    fn build(
        capacity: usize,
        router_metrics: Option<Arc<RouterMetrics>>,
    ) -> (Arc<Self>, mpsc::Receiver<Bytes>) {
        let (tx, rx) = mpsc::channel(capacity);

        (
            Arc::new(Self {
                tx,
                dropped: AtomicU64::new(0),
                router_metrics,
            }),
            rx,
        )
    }

    /// Number of envelopes shed because the buffer was full or the
    /// receiver was gone.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn shed(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
        if let Some(metrics) = &self.router_metrics {
            metrics.sink_dropped();
        }
    }
}

impl DataSink for ChannelSink {
    fn accept(
        &self,
        data: Bytes,
    ) {
        match self.tx.try_send(data) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.shed();
                trace!("subscriber buffer full, dropping envelope");
            }
            Err(TrySendError::Closed(_)) => {
                self.shed();
                trace!("subscriber receiver gone, dropping envelope");
            }
        }
    }
}

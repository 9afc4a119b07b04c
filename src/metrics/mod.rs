//! Router instrumentation.
//!
//! Each router owns its counters; there is no process-global registry.
//! Embedding processes export [`MetricsSnapshot`] through whatever
//! telemetry pipeline they run.


use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Atomic counters updated on the register/dispatch paths.
#[derive(Debug, Default)]
pub struct RouterMetrics {
    envelopes_routed: AtomicU64,
    envelopes_delivered: AtomicU64,
    invalid_envelopes: AtomicU64,
    sink_faults: AtomicU64,
    sink_drops: AtomicU64,
    active_subscriptions: AtomicU64,
}

impl RouterMetrics {
    pub(crate) fn envelope_routed(&self) {
        self.envelopes_routed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn envelope_delivered(&self) {
        self.envelopes_delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn invalid_envelope(&self) {
        self.invalid_envelopes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn sink_fault(&self) {
        self.sink_faults.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn sink_dropped(&self) {
        self.sink_drops.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn subscription_registered(&self) {
        self.active_subscriptions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn subscription_deregistered(&self) {
        self.active_subscriptions.fetch_sub(1, Ordering::Relaxed);
    }

    pub(crate) fn subscriptions_dropped(
        &self,
        count: usize,
    ) {
        self.active_subscriptions
            .fetch_sub(count as u64, Ordering::Relaxed);
    }

    /// A point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            envelopes_routed: self.envelopes_routed.load(Ordering::Relaxed),
            envelopes_delivered: self.envelopes_delivered.load(Ordering::Relaxed),
            invalid_envelopes: self.invalid_envelopes.load(Ordering::Relaxed),
            sink_faults: self.sink_faults.load(Ordering::Relaxed),
            sink_drops: self.sink_drops.load(Ordering::Relaxed),
            active_subscriptions: self.active_subscriptions.load(Ordering::Relaxed),
        }
    }
}

/// Plain-data view of a router's counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Envelopes accepted by `send_to` (classified, serialized, fanned
    /// out).
    pub envelopes_routed: u64,
    /// Individual `accept` calls that completed.
    pub envelopes_delivered: u64,
    /// Envelopes dropped for lacking a recognized event type tag.
    pub invalid_envelopes: u64,
    /// Deliveries that panicked inside a subscriber's sink.
    pub sink_faults: u64,
    /// Envelopes shed by router-created sinks because a subscriber's
    /// buffer was full or its receiver was gone. Standalone sinks keep
    /// their own counts only.
    pub sink_drops: u64,
    /// Currently registered subscriptions.
    pub active_subscriptions: u64,
}

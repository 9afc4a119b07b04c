use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use bytes::Bytes;
use tracing::trace;
use tracing::warn;

use crate::codec;
use crate::proto::events::Envelope;
use crate::router::index::SubscriberRecord;
use crate::router::registry::Router;

impl Router {
    /// Routes one envelope to every matching subscriber.
    ///
    /// The envelope is serialized at most once; every receiver observes
    /// the same bytes. Direct (non-shard) matching subscribers all
    /// receive it; each shard group whose members match delivers to
    /// exactly one of them. Untagged envelopes are dropped before any
    /// subscriber sees them, and a faulting sink never stops delivery to
    /// the rest. Never returns an error to the producer.
    pub fn send_to(
        &self,
        app_id: &str,
        envelope: &Envelope,
    ) {
        if self.is_closed() {
            return;
        }

        let shared = self.shared();

        let event_type = match codec::classify(envelope) {
            Ok(classification) => classification.event_type,
            Err(_) => {
                shared.metrics.invalid_envelope();
                trace!(app_id, "dropping envelope without a recognized event type");
                return;
            }
        };

        let bytes = match codec::serialize(envelope) {
            Ok(bytes) => bytes,
            Err(err) => {
                shared.metrics.invalid_envelope();
                trace!(app_id, %err, "dropping unserializable envelope");
                return;
            }
        };

        shared.metrics.envelope_routed();

        let subscriptions = shared.subscriptions.read();
        subscriptions.for_each_target(app_id, event_type, |record| {
            deliver(self, record, bytes.clone());
        });
    }
}

/// One `accept` call, isolated: a panicking sink is counted and logged,
/// and dispatch moves on to the remaining subscribers.
fn deliver(
    router: &Router,
    record: &Arc<SubscriberRecord>,
    bytes: Bytes,
) {
    let sink = Arc::clone(&record.sink);

    match panic::catch_unwind(AssertUnwindSafe(move || sink.accept(bytes))) {
        Ok(()) => router.shared().metrics.envelope_delivered(),
        Err(_) => {
            router.shared().metrics.sink_fault();
            warn!(
                subscriber_id = record.id,
                "subscriber sink panicked during delivery, continuing with the rest"
            );
        }
    }
}

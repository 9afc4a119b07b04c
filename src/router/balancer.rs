use std::sync::Arc;

use rand::Rng;
use tracing::trace;

use crate::router::index::SubscriberRecord;

/// Picks the shard-group member that receives this envelope.
///
/// Uniform over the candidates, using the thread-local generator so
/// concurrent dispatches never coordinate. Members of a shard group are
/// interchangeable, so no attempt is made to keep the choice sticky
/// across envelopes.
pub(crate) fn select<'a>(
    shard_id: &str,
    candidates: &[&'a Arc<SubscriberRecord>],
) -> &'a Arc<SubscriberRecord> {
    debug_assert!(!candidates.is_empty(), "dispatch filters before balancing");

    if candidates.len() == 1 {
        return candidates[0];
    }

    let chosen = rand::thread_rng().gen_range(0..candidates.len());
    trace!(shard_id, members = candidates.len(), "balanced envelope across shard group");
    candidates[chosen]
}

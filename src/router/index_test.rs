use std::sync::Arc;

use crate::proto::events::EventType;
use crate::proto::subscriptions::SubscriptionRequest;
use crate::router::index::{StreamFilter, SubscriberRecord, SubscriptionIndex};
use crate::test_utils::SpySink;

fn record(
    id: u64,
    shard_id: Option<&str>,
    filter: StreamFilter,
) -> Arc<SubscriberRecord> {
    Arc::new(SubscriberRecord {
        id,
        shard_id: shard_id.map(Into::into),
        filter,
        sink: SpySink::new(),
    })
}

fn app_filter(app_id: &str) -> StreamFilter {
    StreamFilter::App(app_id.into())
}

fn log_filter(app_id: &str) -> StreamFilter {
    StreamFilter::AppLogs(app_id.into())
}

#[test]
fn test_filter_from_request() {
    assert_eq!(
        StreamFilter::from_request(&SubscriptionRequest::firehose("s")),
        StreamFilter::Firehose
    );
    assert_eq!(
        StreamFilter::from_request(&SubscriptionRequest::app_stream("", "a")),
        app_filter("a")
    );
    assert_eq!(
        StreamFilter::from_request(&SubscriptionRequest::log_stream("s", "a")),
        log_filter("a")
    );
}

#[test]
fn test_filter_matching() {
    let firehose = StreamFilter::Firehose;
    assert!(firehose.matches("any-app", EventType::CounterEvent));
    assert!(firehose.matches("other-app", EventType::LogMessage));

    let app = app_filter("some-app-id");
    assert!(app.matches("some-app-id", EventType::CounterEvent));
    assert!(app.matches("some-app-id", EventType::LogMessage));
    assert!(!app.matches("some-other-app-id", EventType::LogMessage));

    let logs = log_filter("some-app-id");
    assert!(logs.matches("some-app-id", EventType::LogMessage));
    assert!(!logs.matches("some-app-id", EventType::CounterEvent));
    assert!(!logs.matches("some-other-app-id", EventType::LogMessage));
}

#[test]
fn test_insert_places_records_by_shard_and_filter() {
    let mut index = SubscriptionIndex::default();

    index.insert(record(1, Some("shard-a"), StreamFilter::Firehose));
    index.insert(record(2, Some("shard-a"), app_filter("app-1")));
    index.insert(record(3, Some("shard-b"), StreamFilter::Firehose));
    index.insert(record(4, None, StreamFilter::Firehose));
    index.insert(record(5, None, app_filter("app-1")));
    index.insert(record(6, None, log_filter("app-2")));

    let counts = index.counts();
    assert_eq!(counts.total, 6);
    assert_eq!(counts.shard_members, 3);
    assert_eq!(counts.shard_groups, 2);
    assert_eq!(counts.direct_firehose, 1);
    assert_eq!(counts.direct_streams, 2);
}

#[test]
fn test_remove_prunes_emptied_slots() {
    let mut index = SubscriptionIndex::default();

    index.insert(record(1, Some("shard-a"), StreamFilter::Firehose));
    index.insert(record(2, Some("shard-a"), app_filter("app-1")));
    index.insert(record(3, None, app_filter("app-1")));

    assert!(index.remove(1, Some("shard-a"), &StreamFilter::Firehose));
    assert!(index.remove(2, Some("shard-a"), &app_filter("app-1")));
    assert!(index.remove(3, None, &app_filter("app-1")));

    let counts = index.counts();
    assert_eq!(counts.total, 0);
    assert_eq!(counts.shard_groups, 0);
    assert_eq!(counts.direct_streams, 0);
}

#[test]
fn test_remove_unknown_record_is_noop() {
    let mut index = SubscriptionIndex::default();
    index.insert(record(1, None, StreamFilter::Firehose));

    assert!(!index.remove(99, None, &StreamFilter::Firehose));
    assert!(!index.remove(99, Some("no-such-shard"), &StreamFilter::Firehose));
    assert!(!index.remove(99, None, &app_filter("no-such-app")));
    assert_eq!(index.counts().total, 1);
}

#[test]
fn test_clear_reports_dropped_count() {
    let mut index = SubscriptionIndex::default();
    index.insert(record(1, Some("shard-a"), StreamFilter::Firehose));
    index.insert(record(2, None, app_filter("app-1")));

    assert_eq!(index.clear(), 2);
    assert_eq!(index.counts().total, 0);
}

#[test]
fn test_targets_direct_members_all_matching() {
    let mut index = SubscriptionIndex::default();
    index.insert(record(1, None, StreamFilter::Firehose));
    index.insert(record(2, None, app_filter("app-1")));
    index.insert(record(3, None, log_filter("app-1")));
    index.insert(record(4, None, app_filter("app-2")));

    let mut hit = Vec::new();
    index.for_each_target("app-1", EventType::CounterEvent, |r| hit.push(r.id));
    hit.sort_unstable();
    // Firehose + app stream; the log filter and the other app sit out.
    assert_eq!(hit, vec![1, 2]);

    let mut hit = Vec::new();
    index.for_each_target("app-1", EventType::LogMessage, |r| hit.push(r.id));
    hit.sort_unstable();
    assert_eq!(hit, vec![1, 2, 3]);
}

#[test]
fn test_targets_one_member_per_shard_group() {
    let mut index = SubscriptionIndex::default();
    index.insert(record(1, Some("shard-a"), StreamFilter::Firehose));
    index.insert(record(2, Some("shard-a"), StreamFilter::Firehose));
    index.insert(record(3, Some("shard-b"), StreamFilter::Firehose));

    let mut hit = Vec::new();
    index.for_each_target("app-1", EventType::CounterEvent, |r| hit.push(r.id));

    assert_eq!(hit.len(), 2);
    assert!(hit.contains(&3));
    assert!(hit.iter().any(|id| *id == 1 || *id == 2));
}

#[test]
fn test_shard_group_skipped_when_no_member_matches() {
    let mut index = SubscriptionIndex::default();
    index.insert(record(1, Some("shard-a"), log_filter("app-1")));

    let mut hit = Vec::new();
    index.for_each_target("app-1", EventType::CounterEvent, |r| hit.push(r.id));
    assert!(hit.is_empty());

    let mut hit = Vec::new();
    index.for_each_target("app-2", EventType::LogMessage, |r| hit.push(r.id));
    assert!(hit.is_empty());
}

#[test]
fn test_shard_group_filters_members_before_balancing() {
    // One group spanning filter classes: the log-only member must never be
    // picked for a counter, even though its group is reached.
    let mut index = SubscriptionIndex::default();
    index.insert(record(1, Some("shard-a"), log_filter("app-1")));
    index.insert(record(2, Some("shard-a"), app_filter("app-1")));

    for _ in 0..50 {
        let mut hit = Vec::new();
        index.for_each_target("app-1", EventType::CounterEvent, |r| hit.push(r.id));
        assert_eq!(hit, vec![2]);
    }
}

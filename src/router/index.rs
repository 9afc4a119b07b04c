use std::collections::HashMap;
use std::sync::Arc;

use crate::proto::events::EventType;
use crate::proto::subscriptions::filter::Message;
use crate::proto::subscriptions::SubscriptionRequest;
use crate::router::balancer;
use crate::sink::DataSink;

pub(crate) type SubscriberId = u64;

/// A subscription request normalized for match checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StreamFilter {
    /// Matches every envelope.
    Firehose,
    /// Matches every envelope of one application.
    App(Arc<str>),
    /// Matches only the log messages of one application.
    AppLogs(Arc<str>),
}

impl StreamFilter {
    pub(crate) fn from_request(request: &SubscriptionRequest) -> Self {
        match &request.filter {
            None => StreamFilter::Firehose,
            Some(filter) => {
                let app: Arc<str> = filter.app_id.as_str().into();
                match filter.message {
                    Some(Message::Log(_)) => StreamFilter::AppLogs(app),
                    None => StreamFilter::App(app),
                }
            }
        }
    }

    pub(crate) fn matches(
        &self,
        app_id: &str,
        event_type: EventType,
    ) -> bool {
        match self {
            StreamFilter::Firehose => true,
            StreamFilter::App(app) => app.as_ref() == app_id,
            StreamFilter::AppLogs(app) => {
                app.as_ref() == app_id && event_type == EventType::LogMessage
            }
        }
    }
}

/// One registered subscriber. Created at registration, never mutated,
/// removed from the index exactly once.
pub(crate) struct SubscriberRecord {
    pub(crate) id: SubscriberId,
    pub(crate) shard_id: Option<Arc<str>>,
    pub(crate) filter: StreamFilter,
    pub(crate) sink: Arc<dyn DataSink>,
}

/// Members of one shard group, sub-indexed by filter class so dispatch
/// can gather an envelope's matching members without scanning the group.
#[derive(Default)]
struct ShardGroup {
    firehose: Vec<Arc<SubscriberRecord>>,
    streams: HashMap<Arc<str>, Vec<Arc<SubscriberRecord>>>,
}

impl ShardGroup {
    fn insert(
        &mut self,
        record: Arc<SubscriberRecord>,
    ) {
        match &record.filter {
            StreamFilter::Firehose => self.firehose.push(record),
            StreamFilter::App(app) | StreamFilter::AppLogs(app) => {
                let app = Arc::clone(app);
                self.streams.entry(app).or_default().push(record);
            }
        }
    }

    fn remove(
        &mut self,
        id: SubscriberId,
        filter: &StreamFilter,
    ) -> bool {
        match filter {
            StreamFilter::Firehose => remove_by_id(&mut self.firehose, id),
            StreamFilter::App(app) | StreamFilter::AppLogs(app) => {
                let Some(records) = self.streams.get_mut(app) else {
                    return false;
                };
                let removed = remove_by_id(records, id);
                if records.is_empty() {
                    self.streams.remove(app);
                }
                removed
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.firehose.is_empty() && self.streams.is_empty()
    }

    fn member_count(&self) -> usize {
        self.firehose.len() + self.streams.values().map(Vec::len).sum::<usize>()
    }

    /// Collects the members whose own filters select the envelope.
    fn collect_matching<'a>(
        &'a self,
        app_id: &str,
        event_type: EventType,
        out: &mut Vec<&'a Arc<SubscriberRecord>>,
    ) {
        out.extend(self.firehose.iter());
        if let Some(records) = self.streams.get(app_id) {
            out.extend(
                records
                    .iter()
                    .filter(|record| record.filter.matches(app_id, event_type)),
            );
        }
    }
}

/// Registered-subscription counts, for operational visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryCounts {
    /// All registered subscriptions.
    pub total: usize,
    /// Subscriptions that are members of a shard group.
    pub shard_members: usize,
    /// Shard groups with at least one member.
    pub shard_groups: usize,
    /// Non-shard firehose subscriptions.
    pub direct_firehose: usize,
    /// Non-shard app-filtered subscriptions.
    pub direct_streams: usize,
}

/// The subscription index.
///
/// A record lives in exactly one slot: its shard group when the request
/// named a shard id, otherwise one of the direct collections. That
/// placement is what makes at-most-one delivery per dispatch fall out of
/// the layout rather than needing a seen-set on the hot path. The index
/// has interior consistency only under its owner's lock; all methods
/// assume the caller holds it.
#[derive(Default)]
pub(crate) struct SubscriptionIndex {
    shard_groups: HashMap<Arc<str>, ShardGroup>,
    direct_firehose: Vec<Arc<SubscriberRecord>>,
    direct_streams: HashMap<Arc<str>, Vec<Arc<SubscriberRecord>>>,
}

impl SubscriptionIndex {
    /// Inserts a record into the slot its request selects.
    pub(crate) fn insert(
        &mut self,
        record: Arc<SubscriberRecord>,
    ) {
        match record.shard_id.clone() {
            Some(shard_id) => {
                self.shard_groups.entry(shard_id).or_default().insert(record);
            }
            None => match &record.filter {
                StreamFilter::Firehose => self.direct_firehose.push(record),
                StreamFilter::App(app) | StreamFilter::AppLogs(app) => {
                    let app = Arc::clone(app);
                    self.direct_streams.entry(app).or_default().push(record);
                }
            },
        }
    }

    /// Removes a record, pruning emptied slots. Returns false when the
    /// record is already gone.
    pub(crate) fn remove(
        &mut self,
        id: SubscriberId,
        shard_id: Option<&str>,
        filter: &StreamFilter,
    ) -> bool {
        match shard_id {
            Some(shard_id) => {
                let Some(group) = self.shard_groups.get_mut(shard_id) else {
                    return false;
                };
                let removed = group.remove(id, filter);
                if group.is_empty() {
                    self.shard_groups.remove(shard_id);
                }
                removed
            }
            None => match filter {
                StreamFilter::Firehose => remove_by_id(&mut self.direct_firehose, id),
                StreamFilter::App(app) | StreamFilter::AppLogs(app) => {
                    let Some(records) = self.direct_streams.get_mut(app) else {
                        return false;
                    };
                    let removed = remove_by_id(records, id);
                    if records.is_empty() {
                        self.direct_streams.remove(app);
                    }
                    removed
                }
            },
        }
    }

    /// Drops every record. Returns how many were registered.
    pub(crate) fn clear(&mut self) -> usize {
        let count = self.counts().total;
        self.shard_groups.clear();
        self.direct_firehose.clear();
        self.direct_streams.clear();
        count
    }

    /// Visits every subscriber that should receive the envelope: all
    /// matching direct members, then exactly one matching member per
    /// shard group (chosen by the balancer).
    pub(crate) fn for_each_target<F>(
        &self,
        app_id: &str,
        event_type: EventType,
        mut deliver: F,
    ) where
        F: FnMut(&Arc<SubscriberRecord>),
    {
        for record in &self.direct_firehose {
            deliver(record);
        }

        if let Some(records) = self.direct_streams.get(app_id) {
            for record in records {
                if record.filter.matches(app_id, event_type) {
                    deliver(record);
                }
            }
        }

        let mut candidates = Vec::new();
        for (shard_id, group) in &self.shard_groups {
            candidates.clear();
            group.collect_matching(app_id, event_type, &mut candidates);
            if candidates.is_empty() {
                continue;
            }
            deliver(balancer::select(shard_id, &candidates));
        }
    }

    pub(crate) fn counts(&self) -> RegistryCounts {
        let shard_members = self
            .shard_groups
            .values()
            .map(ShardGroup::member_count)
            .sum::<usize>();
        let direct_firehose = self.direct_firehose.len();
        let direct_streams = self.direct_streams.values().map(Vec::len).sum::<usize>();

        RegistryCounts {
            total: shard_members + direct_firehose + direct_streams,
            shard_members,
            shard_groups: self.shard_groups.len(),
            direct_firehose,
            direct_streams,
        }
    }
}

fn remove_by_id(
    records: &mut Vec<Arc<SubscriberRecord>>,
    id: SubscriberId,
) -> bool {
    let before = records.len();
    records.retain(|record| record.id != id);
    records.len() < before
}

use crate::proto::events::log_message::MessageType;
use crate::proto::events::{
    ContainerMetric, CounterEvent, Envelope, Error, EventType, HttpStartStop, LogMessage,
    ValueMetric,
};

/// Builds well-formed envelopes of every event type, with monotonically
/// increasing timestamps so successive envelopes are distinguishable.
pub struct EnvelopeBuilder {
    origin: String,
    timestamp: i64,
}

impl EnvelopeBuilder {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            timestamp: 1_000,
        }
    }

    fn base(
        &mut self,
        event_type: EventType,
    ) -> Envelope {
        self.timestamp += 1;
        Envelope {
            origin: self.origin.clone(),
            event_type: event_type as i32,
            timestamp: Some(self.timestamp),
            ..Default::default()
        }
    }

    pub fn log(
        &mut self,
        app_id: &str,
        message: &str,
    ) -> Envelope {
        let timestamp = self.timestamp + 1;
        let mut envelope = self.base(EventType::LogMessage);
        envelope.log_message = Some(LogMessage {
            message: message.as_bytes().to_vec().into(),
            message_type: MessageType::Out as i32,
            timestamp,
            app_id: Some(app_id.into()),
            source_type: Some("APP".into()),
            source_instance: Some("0".into()),
        });
        envelope
    }

    pub fn counter(
        &mut self,
        name: &str,
        delta: u64,
    ) -> Envelope {
        let mut envelope = self.base(EventType::CounterEvent);
        envelope.counter_event = Some(CounterEvent {
            name: name.into(),
            delta,
            total: None,
        });
        envelope
    }

    pub fn value(
        &mut self,
        name: &str,
        value: f64,
        unit: &str,
    ) -> Envelope {
        let mut envelope = self.base(EventType::ValueMetric);
        envelope.value_metric = Some(ValueMetric {
            name: name.into(),
            value,
            unit: unit.into(),
        });
        envelope
    }

    pub fn container(
        &mut self,
        app_id: &str,
    ) -> Envelope {
        let mut envelope = self.base(EventType::ContainerMetric);
        envelope.container_metric = Some(ContainerMetric {
            application_id: app_id.into(),
            instance_index: 0,
            cpu_percentage: 1.5,
            memory_bytes: 64 << 20,
            disk_bytes: 256 << 20,
        });
        envelope
    }

    pub fn http(
        &mut self,
        app_id: &str,
    ) -> Envelope {
        let mut envelope = self.base(EventType::HttpStartStop);
        envelope.http_start_stop = Some(HttpStartStop {
            application_id: Some(app_id.into()),
            status_code: Some(200),
            ..Default::default()
        });
        envelope
    }

    pub fn error(
        &mut self,
        source: &str,
        code: i32,
        message: &str,
    ) -> Envelope {
        let mut envelope = self.base(EventType::Error);
        envelope.error = Some(Error {
            source: source.into(),
            code,
            message: message.into(),
        });
        envelope
    }

    /// An envelope that never got an event type tag; the router must drop
    /// it.
    pub fn untagged(&mut self) -> Envelope {
        Envelope {
            origin: self.origin.clone(),
            ..Default::default()
        }
    }
}

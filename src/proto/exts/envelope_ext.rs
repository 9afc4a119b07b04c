use crate::proto::events::{Envelope, EventType};

impl Envelope {
    /// Returns the event type, if the raw tag carries a known value.
    pub fn event_type(&self) -> Option<EventType> {
        EventType::try_from(self.event_type).ok()
    }

    /// Returns the application id carried by the payload matching the
    /// envelope's event type, if any.
    ///
    /// Only log messages, container metrics and HTTP events are tied to an
    /// application; the remaining event types are platform-scoped and have
    /// no app id. A payload present under a mismatched tag is ignored.
    pub fn app_id(&self) -> Option<&str> {
        match self.event_type()? {
            EventType::LogMessage => self.log_message.as_ref()?.app_id.as_deref(),
            EventType::ContainerMetric => {
                Some(self.container_metric.as_ref()?.application_id.as_str())
            }
            EventType::HttpStartStop => {
                self.http_start_stop.as_ref()?.application_id.as_deref()
            }
            EventType::ValueMetric | EventType::CounterEvent | EventType::Error => None,
        }
    }

    /// True iff the envelope wraps an application log line.
    pub fn is_log(&self) -> bool {
        self.event_type() == Some(EventType::LogMessage)
    }
}

//! Configuration for router-owned tunables.
//!
//! Follows the usual layering: defaults live in code, deployments override
//! via whatever configuration source the embedding process uses (the
//! router itself reads no files or environment variables).


use serde::Deserialize;
use serde::Serialize;

use crate::errors::{Error, Result};

/// Buffering behavior for channel-backed subscriber sinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Capacity of each subscriber's delivery buffer, in envelopes.
    ///
    /// When a subscriber's transport falls behind and the buffer fills,
    /// further envelopes for that subscriber are dropped and counted.
    /// Larger buffers ride out bursts at the cost of memory per
    /// subscriber.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl SinkConfig {
    /// Validates the sink configuration.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(Error::InvalidConfig(
                "sink buffer_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

fn default_buffer_size() -> usize {
    100
}

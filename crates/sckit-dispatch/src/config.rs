use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};

/// Limits applied by the dispatcher to every incoming call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Maximum size of an encoded call payload.
    pub max_payload_bytes: usize,
    /// Maximum number of key/value pairs in a call payload.
    pub max_payload_entries: usize,
    /// When `true`, payload limits are not enforced.
    pub permissive: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 64 * 1024,
            max_payload_entries: 256,
            permissive: false,
        }
    }
}

impl DispatchConfig {
    /// A configuration with no payload limits, for tooling and tests.
    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Default::default()
        }
    }

    pub(crate) fn check_payload_bytes(&self, actual: usize) -> DispatchResult<()> {
        check_limit(self.permissive, "bytes", self.max_payload_bytes, actual)
    }

    pub(crate) fn check_payload_entries(&self, actual: usize) -> DispatchResult<()> {
        check_limit(self.permissive, "entries", self.max_payload_entries, actual)
    }
}

fn check_limit(permissive: bool, what: &'static str, limit: usize, actual: usize) -> DispatchResult<()> {
    if permissive || actual <= limit {
        Ok(())
    } else {
        Err(DispatchError::PayloadTooLarge { what, limit, actual })
    }
}

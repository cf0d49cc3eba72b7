use serde::{Deserialize, Serialize};

/// Domain event log attached to an aggregate (reserved for future use)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStore {
    _placeholder: (),
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

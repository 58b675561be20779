use serde::{Deserialize, Serialize};

/// Response wrapper used by the backend: `{"data": {"data": <payload>}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Payload<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(value: T) -> Self {
        Self {
            data: Payload { data: value },
        }
    }

    pub fn into_inner(self) -> T {
        self.data.data
    }
}

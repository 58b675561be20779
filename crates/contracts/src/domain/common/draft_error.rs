use thiserror::Error;

/// Rejected form update
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("invalid value `{value}` for field `{field}`")]
    InvalidValue { field: &'static str, value: String },
}

impl DraftError {
    pub fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

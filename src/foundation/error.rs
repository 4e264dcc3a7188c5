pub type SliderResult<T> = Result<T, SliderError>;

/// Errors produced while turning slider settings into script and markup.
///
/// Every error is local to the widget being rendered; nothing is pushed to a
/// [`crate::View`] once an error has been returned.
#[derive(thiserror::Error, Debug)]
pub enum SliderError {
    /// A value in the plugin options cannot be represented in the target literal.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Settings violate a structural rule (bad id, zero size, ...).
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SliderError {
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_json::Error> for SliderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

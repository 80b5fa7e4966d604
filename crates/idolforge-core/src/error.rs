use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CoreError {
    /// True for errors caused by the caller's input rather than by generation itself.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFields(_) | Self::InvalidRequest(_))
    }
}

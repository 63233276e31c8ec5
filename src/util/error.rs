#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Failed to read pseudo-file: {0}")]
    ReadError(String),

    #[error("No usable value in pseudo-file: {0}")]
    ParseError(String),
}

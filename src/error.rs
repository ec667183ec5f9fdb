use thiserror::Error;

// The scaling container and the processors never fail; everything
// in here belongs to the layer that loads settings and drives the demo.
#[derive(Error, Debug)]
pub enum ProcscaleError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Parse error: {message}")]
    Parse { message: String },
    #[error("Logging error: {0}")]
    Logging(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProcscaleError>;

// Helper conversions
impl From<config::ConfigError> for ProcscaleError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

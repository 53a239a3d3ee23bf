use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// A resolution of zero pixels per inch would make `to_real` divide by zero.
    #[error("invalid screen resolution: {0} pixels per inch")]
    InvalidResolution(u32),
    #[error("screen resolution unavailable: {0}")]
    ResolutionUnavailable(String),
}

pub type Result<T, E = ScaleError> = std::result::Result<T, E>;

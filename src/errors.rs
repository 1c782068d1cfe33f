use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown surface: {0}")]
    UnknownSurface(String),

    #[error("Insufficient anchor input: {0}")]
    InsufficientAnchor(String),

    #[error("Degenerate bearing: reference points coincide")]
    DegenerateBearing,
}

use thiserror::Error;

/// Failures that prevent the visual engine from being created.
///
/// Everything past construction degrades silently: lookup misses and refused
/// state transitions are no-ops, not errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no drawing surface available")]
    NoSurface,
    #[error("could not acquire 2d context: {0}")]
    ContextUnavailable(String),
    #[error("missing element #{0}")]
    MissingElement(String),
}

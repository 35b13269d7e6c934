/// Result alias that carries the custom [`VisualizerError`] type.
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Common error type for the core crate.
///
/// The recorders themselves never fail: degenerate inputs produce shorter
/// well-formed step sequences. Errors only arise at the edges, when a
/// caller names an algorithm that does not exist or a trace export hits
/// the filesystem.
#[derive(Debug, thiserror::Error)]
pub enum VisualizerError {
    #[error("unknown algorithm key `{0}`")]
    UnknownAlgorithm(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize trace: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Error taxonomy for stub generation

use thiserror::Error;

/// Errors surfaced while resolving or persisting a module's stubs.
#[derive(Debug, Error)]
pub enum StubError {
    /// The requested extension module is not available. Recoverable: batch
    /// callers log it and continue with the next module.
    #[error("extension module not loaded: {0}")]
    ModuleNotFound(String),

    /// Directory creation or file write failed. Aborts the current
    /// module's generation only; previously written files stay intact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

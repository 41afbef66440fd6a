//! Error types for corpus generation.

use thiserror::Error;

/// Error type for corpus generation.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A fixture asked for an option its definition does not set.
    #[error("fixture '{fixture}': missing option '{option}'")]
    MissingOption {
        /// Fixture file name.
        fixture: String,
        /// Option name.
        option: String,
    },

    /// An option value is outside the range the fixture accepts.
    #[error("fixture '{fixture}': option '{option}' out of range: {message}")]
    OutOfRange {
        /// Fixture file name.
        fixture: String,
        /// Option name.
        option: String,
        /// Error message.
        message: String,
    },

    /// Rendered fixture failed the shared completeness checks, or the
    /// corpus could not be written.
    #[error("codegen error: {0}")]
    Codegen(#[from] stubgen_codegen::CodegenError),

    /// Unknown binding identifier.
    #[error("unknown binding '{0}'")]
    UnknownBinding(String),
}

//! Error types for code generation.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where in a render pass an error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Template being rendered.
    pub template: &'static str,
    /// Declaration being rendered, `None` for the file prologue/epilogue.
    pub decl: Option<String>,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decl {
            Some(decl) => write!(f, "template '{}', declaration '{}'", self.template, decl),
            None => write!(f, "template '{}', file scope", self.template),
        }
    }
}

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IR loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] stubgen_schema::ParseError),

    /// Library failed validation before rendering.
    #[error("schema error: {0}")]
    Validation(#[from] stubgen_schema::SchemaError),

    /// A declaration lacks something its template needs.
    #[error("schema error in declaration '{decl}' (template '{template}', helper '{helper}'): {message}")]
    Schema {
        /// Qualified declaration name.
        decl: String,
        /// Template being rendered.
        template: &'static str,
        /// Helper that found the problem.
        helper: &'static str,
        /// Error message.
        message: String,
    },

    /// A helper was called with an unsupported value or out of order.
    #[error("helper '{helper}' misused at {position}: {message}")]
    HelperMisuse {
        /// Helper name.
        helper: &'static str,
        /// Render position.
        position: Position,
        /// Error message.
        message: String,
    },

    /// A rendered artifact failed its completeness checks.
    #[error("incomplete output for '{file}': {message}")]
    Incomplete {
        /// Artifact file name.
        file: String,
        /// Error message.
        message: String,
    },

    /// Template selection names no known template.
    #[error("unknown template '{name}'")]
    UnknownTemplate {
        /// Requested name.
        name: String,
    },

    /// Output could not be written.
    #[error("IO error writing '{}': {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates a helper misuse error.
    pub fn helper_misuse(
        helper: &'static str,
        position: Position,
        message: impl Into<String>,
    ) -> Self {
        Self::HelperMisuse {
            helper,
            position,
            message: message.into(),
        }
    }

    /// Creates a schema error raised by `helper` at `position`.
    pub fn schema(
        helper: &'static str,
        position: &Position,
        message: impl Into<String>,
    ) -> Self {
        Self::Schema {
            decl: position.decl.clone().unwrap_or_default(),
            template: position.template,
            helper,
            message: message.into(),
        }
    }

    /// Creates an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for loading the intermediate representation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed compound identifier.
    #[error("invalid identifier '{value}': {reason}")]
    InvalidIdentifier {
        /// Offending identifier.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// IO error.
    #[error("IO error reading '{path}': {source}")]
    Io {
        /// File being read.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Duplicate definition.
    #[error("duplicate {kind} '{name}' in '{scope}'")]
    Duplicate {
        /// Kind of definition (declaration, method, parameter).
        kind: String,
        /// Name of the duplicate.
        name: String,
        /// Enclosing library, protocol or method.
        scope: String,
    },

    /// Type reference not present in the library's type table.
    #[error("unresolved type '{type_ref}' referenced by '{referrer}'")]
    UnresolvedType {
        /// The dangling handle.
        type_ref: String,
        /// Declaration or method holding the reference.
        referrer: String,
    },

    /// A name that must be a single identifier is not one.
    #[error("invalid {kind} name '{name}' in '{scope}'")]
    InvalidName {
        /// Kind of name (declaration, scaffold, method, parameter).
        kind: String,
        /// Offending name.
        name: String,
        /// Enclosing library, protocol or method.
        scope: String,
    },

    /// A field required by code generation is missing or empty.
    #[error("declaration '{decl}': missing {field}")]
    MissingField {
        /// Qualified declaration name.
        decl: String,
        /// Description of the missing field.
        field: String,
    },
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(
        kind: impl Into<String>,
        name: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self::Duplicate {
            kind: kind.into(),
            name: name.into(),
            scope: scope.into(),
        }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(
        kind: impl Into<String>,
        name: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self::InvalidName {
            kind: kind.into(),
            name: name.into(),
            scope: scope.into(),
        }
    }

    /// Creates a missing field error.
    pub fn missing(decl: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            decl: decl.into(),
            field: field.into(),
        }
    }
}

impl ParseError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = SchemaError::duplicate("method", "Ping", "fidl.test/Echo");
        assert_eq!(
            err.to_string(),
            "duplicate method 'Ping' in 'fidl.test/Echo'"
        );
    }

    #[test]
    fn test_missing_display() {
        let err = SchemaError::missing("fidl.test/Echo", "wire completer for method 'Ping'");
        assert!(err.to_string().contains("fidl.test/Echo"));
        assert!(err.to_string().contains("wire completer"));
    }
}

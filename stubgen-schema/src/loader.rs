//! Loading the intermediate representation from JSON.
//!
//! The IR is produced by the upstream IDL compiler. Its shape:
//!
//! ```json
//! {
//!   "name": "fidl.test.echo",
//!   "primary_header": "fidl/test/echo/wire.h",
//!   "types": [{ "id": "string", "wire": "::fidl::StringView" }],
//!   "declarations": [
//!     {
//!       "kind": "protocol",
//!       "name": "fidl.test.echo/Echo",
//!       "methods": [{
//!         "name": "EchoString",
//!         "has_request": true,
//!         "has_response": true,
//!         "request_args": [{ "name": "value", "type": "string" }],
//!         "response_args": [{ "name": "response", "type": "string" }],
//!         "wire_completer": "EchoStringCompleter"
//!       }]
//!     }
//!   ]
//! }
//! ```

use crate::error::ParseError;
use crate::ir::Library;
use std::path::Path;

/// Parses a library from IR JSON text.
///
/// # Errors
/// Returns `ParseError::Json` if the text is not a valid IR document.
pub fn parse_library(json: &str) -> Result<Library, ParseError> {
    let library: Library = serde_json::from_str(json)?;
    tracing::debug!(
        "Parsed library '{}' with {} declarations and {} types",
        library.name,
        library.declarations.len(),
        library.types().len()
    );
    Ok(library)
}

/// Reads and parses a library from an IR JSON file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::Json` if its contents are not valid IR.
pub fn load_library(path: &Path) -> Result<Library, ParseError> {
    let json = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_library(&json)
}

//! # stubgen Schema
//!
//! In-memory representation of an IDL library for binding generation.
//!
//! This crate provides:
//! - The schema model (library, declarations, protocols, methods)
//! - Loading the intermediate representation from JSON
//! - Structural validation of the invariants code generation relies on

pub mod error;
pub mod ir;
pub mod loader;
pub mod protocols;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{Declaration, Library};
pub use loader::{load_library, parse_library};
pub use protocols::{Method, Parameter, Protocol};
pub use types::{DeclKind, DeclName, ResolvedType, TypeRef};
pub use validation::validate_library;

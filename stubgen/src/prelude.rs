//! Prelude module for convenient imports.
//!
//! ```ignore
//! use stubgen::prelude::*;
//! ```

// Schema types
pub use stubgen_schema::{
    DeclKind, DeclName, Declaration, Library, Method, Parameter, ParseError, Protocol,
    ResolvedType, SchemaError, TypeRef, load_library, parse_library, validate_library,
};

// Codegen types
pub use stubgen_codegen::{
    Artifact, CodegenError, Generator, GeneratorConfig, Position, RenderContext, Template,
    TemplateSet, WireVariant,
};

// Corpus types
pub use stubgen_corpus::{Binding, Config, ConfigValue, CorpusError, Definition, Registry};

pub use std::path::Path;

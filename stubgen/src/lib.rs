//! # stubgen
//!
//! Binding generator for IDL libraries.
//!
//! stubgen reads the intermediate representation of an IDL library and
//! renders C++ wire-binding artifacts from it: test scaffolds whose
//! methods all fall back to a single `NotImplemented_` hook, and forward
//! declaration headers.
//!
//! ## Features
//!
//! - **Typed templates** - helpers are plain functions checked at compile time
//! - **Deterministic output** - identical input renders byte-identical files
//! - **All-or-nothing writes** - artifacts are rendered and checked in memory first
//! - **Benchmark corpus** - IDL fixtures with per-binding deny lists
//!
//! ## Quick Start
//!
//! ```ignore
//! use stubgen::prelude::*;
//!
//! let library = load_library(Path::new("echo.ir.json"))?;
//! validate_library(&library)?;
//! let templates = TemplateSet::builtin();
//! Generator::new(&library, &templates, GeneratorConfig::default())
//!     .write_all(Path::new("gen"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - IR model, loading and validation
//! - [`codegen`] - Naming, helpers, templates and the render driver
//! - [`corpus`] - Benchmark fixture generation
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod prelude;

/// IR model, loading and validation.
pub mod schema {
    pub use stubgen_schema::*;
}

/// Naming, helpers, templates and the render driver.
pub mod codegen {
    pub use stubgen_codegen::*;
}

/// Benchmark fixture generation.
pub mod corpus {
    pub use stubgen_corpus::*;
}

// Re-export commonly used items at the crate root
pub use stubgen_codegen::{Artifact, CodegenError, Generator, GeneratorConfig, TemplateSet};
pub use stubgen_schema::{Library, load_library, parse_library, validate_library};

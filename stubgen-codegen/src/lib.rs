//! # stubgen Codegen
//!
//! C++ binding generation from IDL libraries.
//!
//! This crate provides:
//! - Namespace and qualified-name resolution
//! - The helper functions templates render through
//! - The template set (test scaffolds, forward declarations)
//! - The render driver that writes complete artifacts or nothing

pub mod cpp;
pub mod error;
pub mod format;
pub mod generator;
pub mod helpers;
pub mod naming;
pub mod output;
pub mod template;

pub use error::{CodegenError, Position};
pub use generator::{Artifact, Generator, GeneratorConfig};
pub use helpers::{RenderContext, WireVariant};
pub use output::write_files;
pub use template::{Template, TemplateSet};

/// Generates every artifact of the built-in template set from IR JSON.
///
/// # Arguments
/// * `json` - IR document
/// * `config` - Generation options
///
/// # Returns
/// The rendered artifacts, in template order.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or rendering fails.
pub fn generate_from_json(
    json: &str,
    config: GeneratorConfig,
) -> Result<Vec<Artifact>, CodegenError> {
    let library = stubgen_schema::parse_library(json)?;
    stubgen_schema::validate_library(&library)?;
    let templates = TemplateSet::builtin();
    Generator::new(&library, &templates, config).render_all()
}

/// Generates every artifact of the built-in template set from an IR file.
///
/// # Arguments
/// * `path` - Path to the IR JSON file
/// * `config` - Generation options
///
/// # Returns
/// The rendered artifacts, in template order.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or rendering fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: GeneratorConfig,
) -> Result<Vec<Artifact>, CodegenError> {
    let library = stubgen_schema::load_library(path)?;
    stubgen_schema::validate_library(&library)?;
    let templates = TemplateSet::builtin();
    Generator::new(&library, &templates, config).render_all()
}

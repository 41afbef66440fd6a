//! Fixture registry.
//!
//! The registry is an explicit table built once by the caller and passed by
//! reference. Rendering for a binding keeps every definition whose deny
//! list does not name that binding and skips files left with none.

use crate::config::{Binding, Config, Definition};
use crate::error::CorpusError;
use crate::fixtures;
use std::path::{Path, PathBuf};
use stubgen_codegen::format::{check_artifact, normalize};
use stubgen_codegen::helpers::{EOF_MARKER, GENERATED_WARNING};
use stubgen_codegen::output::write_files;

/// Library every fixture file declares.
pub const CORPUS_LIBRARY: &str = "benchmarkfidl";

/// Generator signature shared by all fixtures.
pub type FixtureFn = fn(&Config) -> Result<String, CorpusError>;

/// A fixture file and its configured instances.
#[derive(Debug, Clone)]
pub struct FixtureFile {
    /// Output file name.
    pub filename: &'static str,
    /// Generator producing one declaration per definition.
    pub generate: FixtureFn,
    /// Configured instances.
    pub definitions: Vec<Definition>,
}

/// Rendered fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output file name.
    pub file_name: String,
    /// File contents.
    pub contents: String,
}

/// Table of fixture files.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    files: Vec<FixtureFile>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped fixtures.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .register(FixtureFile {
                filename: "float_array.gen.test.fidl",
                generate: fixtures::float_array,
                definitions: vec![
                    Definition::new(Config::new().with("size", 256)).deny(Binding::Rust),
                ],
            })
            .register(FixtureFile {
                filename: "byte_vector.gen.test.fidl",
                generate: fixtures::byte_vector,
                definitions: vec![
                    Definition::new(Config::new().with("size", 16)),
                    Definition::new(Config::new().with("size", 4096)).deny(Binding::Dart),
                ],
            })
            .register(FixtureFile {
                filename: "struct_field.gen.test.fidl",
                generate: fixtures::struct_field,
                definitions: vec![
                    Definition::new(Config::new().with("count", 16)),
                    Definition::new(Config::new().with("count", 256))
                        .deny(Binding::Go)
                        .deny(Binding::Dart),
                ],
            })
    }

    /// Adds a fixture file.
    #[must_use]
    pub fn register(mut self, file: FixtureFile) -> Self {
        self.files.push(file);
        self
    }

    /// Registered files in registration order.
    #[must_use]
    pub fn files(&self) -> &[FixtureFile] {
        &self.files
    }

    /// Renders every file that has at least one definition for `binding`.
    ///
    /// # Errors
    /// Returns the first fixture generation error.
    pub fn render(&self, binding: Binding) -> Result<Vec<GeneratedFile>, CorpusError> {
        let mut rendered = Vec::new();
        for file in &self.files {
            let enabled: Vec<_> = file
                .definitions
                .iter()
                .filter(|d| d.is_enabled_for(binding))
                .collect();
            if enabled.is_empty() {
                tracing::debug!("Skipping {} for {}", file.filename, binding);
                continue;
            }

            let mut output = format!("{GENERATED_WARNING}\n\nlibrary {CORPUS_LIBRARY};\n");
            for definition in enabled {
                let config = definition.config.for_fixture(file.filename);
                output.push('\n');
                output.push_str(&(file.generate)(&config)?);
            }
            output.push('\n');
            output.push_str(EOF_MARKER);
            output.push('\n');

            let contents = normalize(&output);
            check_artifact(file.filename, &contents)?;
            rendered.push(GeneratedFile {
                file_name: file.filename.to_string(),
                contents,
            });
        }
        Ok(rendered)
    }

    /// Renders for `binding` and writes the files to `out_dir`.
    ///
    /// Nothing is written if any fixture fails to render, and a failed
    /// write leaves `out_dir` as it was.
    ///
    /// # Errors
    /// Returns a render error, or a codegen `Io` error naming the path that
    /// failed.
    pub fn write(&self, binding: Binding, out_dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
        let files = self.render(binding)?;
        let pairs: Vec<_> = files
            .iter()
            .map(|f| (f.file_name.as_str(), f.contents.as_str()))
            .collect();
        Ok(write_files(out_dir, &pairs)?)
    }
}

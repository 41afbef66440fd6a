//! Render driver.
//!
//! Walks a library's declarations in order for each selected template,
//! renders every artifact fully in memory, checks it, and only then writes
//! anything to disk.

use crate::error::CodegenError;
use crate::format::{check_artifact, normalize};
use crate::helpers::{RenderContext, WireVariant};
use crate::output::write_files;
use crate::template::{Template, TemplateSet};
use std::path::{Path, PathBuf};
use stubgen_schema::Library;

/// Generation options.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Header to include instead of the library's own primary header.
    pub primary_header: Option<String>,
    /// Wire calling convention used by every artifact of the run.
    pub wire: WireVariant,
    /// Template names to render; empty renders the whole set.
    pub templates: Vec<String>,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Template that produced it.
    pub template: &'static str,
    /// Normalized file contents.
    pub contents: String,
}

/// Drives templates over a library.
pub struct Generator<'a> {
    library: &'a Library,
    templates: &'a TemplateSet,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator.
    #[must_use]
    pub fn new(library: &'a Library, templates: &'a TemplateSet, config: GeneratorConfig) -> Self {
        Self {
            library,
            templates,
            config,
        }
    }

    /// Header included by every artifact.
    #[must_use]
    pub fn primary_header(&self) -> &str {
        self.config
            .primary_header
            .as_deref()
            .unwrap_or(&self.library.primary_header)
    }

    /// Renders one template over the library.
    ///
    /// # Errors
    /// Returns the first helper, schema or completeness error; no partial
    /// output is returned.
    pub fn render(&self, template: &dyn Template) -> Result<Artifact, CodegenError> {
        let mut ctx = RenderContext::new(self.library, template.name(), self.primary_header());
        ctx.use_wire(self.config.wire)?;
        template.render_prologue(&mut ctx)?;

        let mut rendered = 0usize;
        for decl in &self.library.declarations {
            if !template.applies_to(decl.kind()) {
                continue;
            }
            tracing::debug!("Rendering {} {} with {}", decl.kind(), decl.name(), template.name());
            ctx.enter(decl.name());
            template.render_decl(decl, &mut ctx)?;
            ctx.leave();
            rendered += 1;
        }

        ctx.end_of_file()?;
        let file_name = template.file_name(self.library);
        let contents = normalize(&ctx.finish()?);
        check_artifact(&file_name, &contents)?;

        tracing::debug!(
            "Rendered {} ({} declarations, {} bytes)",
            file_name,
            rendered,
            contents.len()
        );
        Ok(Artifact {
            file_name,
            template: template.name(),
            contents,
        })
    }

    /// Renders every selected template.
    ///
    /// # Errors
    /// Returns `UnknownTemplate` for a selection naming no template, or the
    /// first render error.
    pub fn render_all(&self) -> Result<Vec<Artifact>, CodegenError> {
        self.selected()?
            .into_iter()
            .map(|template| self.render(template))
            .collect()
    }

    /// Renders every selected template and writes the results to `out_dir`.
    ///
    /// Nothing is written unless every artifact rendered, and a failed write
    /// leaves `out_dir` as it was. See [`write_files`].
    ///
    /// # Errors
    /// Returns a render error, or `Io` naming the path that failed.
    pub fn write_all(&self, out_dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
        let artifacts = self.render_all()?;
        let files: Vec<_> = artifacts
            .iter()
            .map(|a| (a.file_name.as_str(), a.contents.as_str()))
            .collect();
        write_files(out_dir, &files)
    }

    fn selected(&self) -> Result<Vec<&'a dyn Template>, CodegenError> {
        if self.config.templates.is_empty() {
            return Ok(self.templates.iter().collect());
        }
        self.config
            .templates
            .iter()
            .map(|name| {
                self.templates
                    .get(name)
                    .ok_or_else(|| CodegenError::UnknownTemplate { name: name.clone() })
            })
            .collect()
    }
}

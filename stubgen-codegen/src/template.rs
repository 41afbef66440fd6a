//! Template trait and the template set.

use crate::cpp::{DeclarationsTemplate, TestBaseTemplate};
use crate::error::CodegenError;
use crate::helpers::{GENERATED_WARNING, RenderContext};
use stubgen_schema::{DeclKind, Declaration, Library};

/// A declaration-kind-specific output template.
///
/// The driver calls [`Template::render_prologue`] once, then
/// [`Template::render_decl`] for every declaration whose kind passes
/// [`Template::applies_to`], in library order.
pub trait Template: Send + Sync {
    /// Template name, used in diagnostics and for selection.
    fn name(&self) -> &'static str;

    /// Returns true if the template renders declarations of `kind`.
    fn applies_to(&self, kind: DeclKind) -> bool;

    /// Output file name for `library`.
    fn file_name(&self, library: &Library) -> String;

    /// Renders the file header.
    ///
    /// The default writes the generated-code warning, an include guard and
    /// the primary header include.
    ///
    /// # Errors
    /// Propagates helper errors.
    fn render_prologue(&self, ctx: &mut RenderContext<'_>) -> Result<(), CodegenError> {
        let header = ctx.primary_header();
        ctx.emit(&format!(
            "{GENERATED_WARNING}\n\n#pragma once\n\n#include <{header}>\n"
        ))
    }

    /// Renders one declaration.
    ///
    /// # Errors
    /// Returns an error if the declaration cannot be rendered.
    fn render_decl(
        &self,
        decl: &Declaration,
        ctx: &mut RenderContext<'_>,
    ) -> Result<(), CodegenError>;
}

/// The statically known set of templates.
pub struct TemplateSet {
    templates: Vec<Box<dyn Template>>,
}

impl TemplateSet {
    /// Builds the set of shipped templates.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            templates: vec![Box::new(TestBaseTemplate), Box::new(DeclarationsTemplate)],
        }
    }

    /// Creates a set from explicit templates.
    #[must_use]
    pub fn new(templates: Vec<Box<dyn Template>>) -> Self {
        Self { templates }
    }

    /// Looks up a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Template> {
        self.templates
            .iter()
            .find(|t| t.name() == name)
            .map(|t| &**t)
    }

    /// Templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Template> {
        self.templates.iter().map(|t| &**t)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

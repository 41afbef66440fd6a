//! Helper functions available to templates.
//!
//! A [`RenderContext`] carries the state of one render pass over one
//! artifact: the output buffer, the stack of open namespaces, the active
//! wire calling convention and the current template position. Templates
//! emit text only through it, so namespace balance and the end-of-file
//! marker are enforced in one place.

use crate::error::{CodegenError, Position};
use crate::naming::{Namespace, escape_identifier};
use std::fmt;
use stubgen_schema::{DeclKind, DeclName, Declaration, Library, Method, Parameter, Protocol};

/// Marker emitted as the last line of every complete artifact.
pub const EOF_MARKER: &str = "// EOF";

/// Warning placed at the top of every artifact.
pub const GENERATED_WARNING: &str = "// WARNING: This file is machine generated by stubgen.";

/// Wire calling convention for generated server methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireVariant {
    /// Completer passed by reference, replied to before the method returns.
    #[default]
    Sync,
    /// Completer passed by value so the reply can happen later.
    Async,
}

impl WireVariant {
    /// Parameter type suffix appended to a completer name.
    #[must_use]
    pub const fn completer_suffix(self) -> &'static str {
        match self {
            Self::Sync => "::Sync&",
            Self::Async => "::Async",
        }
    }
}

impl fmt::Display for WireVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => f.write_str("sync"),
            Self::Async => f.write_str("async"),
        }
    }
}

/// Structural equality test, used by templates to branch on kinds.
#[must_use]
pub fn eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// State of one render pass.
#[derive(Debug)]
pub struct RenderContext<'a> {
    library: &'a Library,
    template: &'static str,
    primary_header: &'a str,
    decl: Option<String>,
    output: String,
    open: Vec<String>,
    wire: Option<WireVariant>,
    finished: bool,
}

impl<'a> RenderContext<'a> {
    /// Creates a context for rendering `template` over `library`.
    #[must_use]
    pub fn new(library: &'a Library, template: &'static str, primary_header: &'a str) -> Self {
        Self {
            library,
            template,
            primary_header,
            decl: None,
            output: String::new(),
            open: Vec::new(),
            wire: None,
            finished: false,
        }
    }

    /// Library being rendered.
    #[must_use]
    pub fn library(&self) -> &'a Library {
        self.library
    }

    /// Header the artifact must include.
    #[must_use]
    pub fn primary_header(&self) -> &'a str {
        self.primary_header
    }

    /// Current render position.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            template: self.template,
            decl: self.decl.clone(),
        }
    }

    /// Marks the start of a declaration's block.
    pub fn enter(&mut self, name: &DeclName) {
        self.decl = Some(name.to_string());
    }

    /// Marks the end of the current declaration's block.
    pub fn leave(&mut self) {
        self.decl = None;
    }

    /// Namespaces currently open, outermost first.
    #[must_use]
    pub fn open_namespaces(&self) -> &[String] {
        &self.open
    }

    /// Returns true once [`RenderContext::end_of_file`] has run.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Appends raw text to the artifact.
    ///
    /// # Errors
    /// Returns `HelperMisuse` once the end-of-file marker has been written.
    pub fn emit(&mut self, text: &str) -> Result<(), CodegenError> {
        self.check_open("Emit")?;
        self.output.push_str(text);
        Ok(())
    }

    /// Returns the payload of a protocol declaration.
    ///
    /// # Errors
    /// Returns `HelperMisuse` for any other declaration kind.
    pub fn protocol<'d>(&self, decl: &'d Declaration) -> Result<&'d Protocol, CodegenError> {
        decl.as_protocol().ok_or_else(|| {
            CodegenError::helper_misuse(
                "Protocol",
                self.position(),
                format!("expected a {} declaration, got {}", DeclKind::Protocol, decl.kind()),
            )
        })
    }

    /// Moves the output into `namespace`.
    ///
    /// Closes the open namespaces not shared with `namespace`, innermost
    /// first, then opens the missing ones, outermost first. Whatever is
    /// still open is closed by [`RenderContext::end_of_file`].
    ///
    /// # Errors
    /// Returns `HelperMisuse` after the end of file or for an empty
    /// namespace component.
    pub fn ensure_namespace(&mut self, namespace: &Namespace) -> Result<(), CodegenError> {
        self.check_open("EnsureNamespace")?;
        if namespace.components().iter().any(String::is_empty) {
            return Err(CodegenError::helper_misuse(
                "EnsureNamespace",
                self.position(),
                format!("namespace '{namespace}' has an empty component"),
            ));
        }

        let current = Namespace::new(self.open.iter().cloned());
        let shared = current.common_prefix_len(namespace);
        if shared == self.open.len() && shared == namespace.components().len() {
            return Ok(());
        }

        self.close_to(shared);
        self.output.push('\n');
        for component in &namespace.components()[shared..] {
            self.output.push_str(&format!("namespace {component} {{\n"));
            self.open.push(component.clone());
        }
        Ok(())
    }

    /// Renders a parameter list as `type name, type name`.
    ///
    /// An empty list renders as empty text.
    ///
    /// # Errors
    /// Returns `Schema` if a parameter's type is not in the type table.
    pub fn params(&self, args: &[Parameter]) -> Result<String, CodegenError> {
        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            let ty = self.library.resolve_type(&arg.type_ref).ok_or_else(|| {
                CodegenError::schema(
                    "Params",
                    &self.position(),
                    format!(
                        "parameter '{}' references unresolved type '{}'",
                        arg.name, arg.type_ref
                    ),
                )
            })?;
            rendered.push(format!("{} {}", ty.wire, escape_identifier(&arg.name)));
        }
        Ok(rendered.join(", "))
    }

    /// Selects the wire calling convention for this pass.
    ///
    /// Selecting the already active variant again is a no-op.
    ///
    /// # Errors
    /// Returns `HelperMisuse` if a different variant is already active.
    pub fn use_wire(&mut self, variant: WireVariant) -> Result<(), CodegenError> {
        match self.wire {
            Some(active) if active != variant => Err(CodegenError::helper_misuse(
                "UseWire",
                self.position(),
                format!("wire variant '{active}' already active, cannot switch to '{variant}'"),
            )),
            _ => {
                self.wire = Some(variant);
                Ok(())
            }
        }
    }

    /// Renders the completer parameter type of `method`, e.g.
    /// `EchoStringCompleter::Sync&`.
    ///
    /// # Errors
    /// Returns `HelperMisuse` before [`RenderContext::use_wire`], or
    /// `Schema` if the method has no completer.
    pub fn wire_completer(&self, method: &Method) -> Result<String, CodegenError> {
        let variant = self.wire.ok_or_else(|| {
            CodegenError::helper_misuse(
                "WireCompleter",
                self.position(),
                "no wire variant selected, call UseWire first",
            )
        })?;
        let completer = method.wire_completer().ok_or_else(|| {
            CodegenError::schema(
                "WireCompleter",
                &self.position(),
                format!("method '{}' has no wire completer", method.name),
            )
        })?;
        Ok(format!("{completer}{}", variant.completer_suffix()))
    }

    /// Closes every open namespace and writes the end-of-file marker.
    ///
    /// # Errors
    /// Returns `HelperMisuse` if called twice.
    pub fn end_of_file(&mut self) -> Result<(), CodegenError> {
        self.check_open("EndOfFile")?;
        self.close_to(0);
        self.output.push('\n');
        self.output.push_str(EOF_MARKER);
        self.output.push('\n');
        self.finished = true;
        Ok(())
    }

    /// Consumes the context and returns the rendered text.
    ///
    /// # Errors
    /// Returns `HelperMisuse` if the end-of-file marker was never written.
    pub fn finish(self) -> Result<String, CodegenError> {
        if !self.finished {
            return Err(CodegenError::helper_misuse(
                "EndOfFile",
                self.position(),
                "render pass ended without an end-of-file marker",
            ));
        }
        Ok(self.output)
    }

    fn check_open(&self, helper: &'static str) -> Result<(), CodegenError> {
        if self.finished {
            return Err(CodegenError::helper_misuse(
                helper,
                self.position(),
                "called after the end-of-file marker",
            ));
        }
        Ok(())
    }

    fn close_to(&mut self, depth: usize) {
        if self.open.len() > depth {
            self.output.push('\n');
        }
        while self.open.len() > depth {
            if let Some(component) = self.open.pop() {
                self.output.push_str(&format!("}}  // namespace {component}\n"));
            }
        }
    }
}

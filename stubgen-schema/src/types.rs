//! Schema type definitions.
//!
//! Names, kinds and type handles shared by every declaration in a library.

use crate::error::ParseError;
use serde::Deserialize;
use std::fmt;

/// Declaration kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// Protocol (set of methods).
    Protocol,
    /// Struct type.
    Struct,
    /// Enum type.
    Enum,
    /// Bits type.
    Bits,
    /// Union type.
    Union,
    /// Table type.
    Table,
    /// Constant.
    Const,
}

impl DeclKind {
    /// Returns the IR spelling of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Bits => "bits",
            Self::Union => "union",
            Self::Table => "table",
            Self::Const => "const",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully-qualified declaration name.
///
/// The IR spells names as compound identifiers, `library.name/Decl`. A name
/// with no `/` lives in the root (unnamed) library. `scope` holds extra
/// nesting below the library namespace that only derived names use, e.g.
/// the `testing` scope of generated scaffolds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct DeclName {
    library: String,
    scope: Vec<String>,
    name: String,
}

impl DeclName {
    /// Creates a name in `library` (dotted, may be empty for the root).
    pub fn new(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            scope: Vec::new(),
            name: name.into(),
        }
    }

    /// Parses a compound identifier (`fidl.test.echo/Echo` or `Echo`).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidIdentifier` for empty parts or more than
    /// one separator.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let (library, name) = match value.split_once('/') {
            Some((library, name)) => (library, name),
            None => ("", value),
        };
        if name.is_empty() {
            return Err(ParseError::invalid_identifier(value, "empty declaration name"));
        }
        if name.contains('/') || name.contains('.') {
            return Err(ParseError::invalid_identifier(
                value,
                "declaration name must be a single identifier",
            ));
        }
        if !library.is_empty() && library.split('.').any(str::is_empty) {
            return Err(ParseError::invalid_identifier(value, "empty library component"));
        }
        Ok(Self::new(library, name))
    }

    /// Returns a copy nested one scope deeper with a new local name.
    #[must_use]
    pub fn nested(&self, scope: impl Into<String>, name: impl Into<String>) -> Self {
        let mut nested = self.clone();
        nested.scope.push(scope.into());
        nested.name = name.into();
        nested
    }

    /// Dotted library name; empty for the root library.
    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Library name split into its components.
    pub fn library_components(&self) -> impl Iterator<Item = &str> {
        self.library.split('.').filter(|c| !c.is_empty())
    }

    /// Scopes nested below the library.
    #[must_use]
    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    /// Local (unqualified) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true when the declaration lives in the root library.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.library.is_empty() && self.scope.is_empty()
    }
}

impl TryFrom<String> for DeclName {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for DeclName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.library.is_empty() {
            write!(f, "{}/", self.library)?;
        }
        for scope in &self.scope {
            write!(f, "{scope}::")?;
        }
        f.write_str(&self.name)
    }
}

/// Opaque handle to a type resolved by the upstream compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Creates a handle from its IR identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// IR identifier of the referenced type.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry of a library's type table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolvedType {
    /// IR identifier, the target of `TypeRef`s.
    pub id: String,
    /// Rendered type name in the wire bindings.
    pub wire: String,
}

impl ResolvedType {
    /// Creates a type table entry.
    pub fn new(id: impl Into<String>, wire: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            wire: wire.into(),
        }
    }
}

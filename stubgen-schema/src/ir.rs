//! Intermediate representation of an IDL library.
//!
//! The library is the unit of code generation: an ordered list of
//! declarations plus the table of types their members refer to. It is built
//! once (usually by [`crate::loader`]) and only read afterwards.

use crate::protocols::Protocol;
use crate::types::{DeclKind, DeclName, ResolvedType, TypeRef};
use serde::Deserialize;
use std::collections::HashMap;

/// A named declaration without a payload used by code generation.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedDecl {
    /// Qualified name.
    pub name: DeclName,
}

/// Declaration variants.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    /// Protocol declaration.
    Protocol(Protocol),
    /// Struct declaration.
    Struct(NamedDecl),
    /// Enum declaration.
    Enum(NamedDecl),
    /// Bits declaration.
    Bits(NamedDecl),
    /// Union declaration.
    Union(NamedDecl),
    /// Table declaration.
    Table(NamedDecl),
    /// Constant declaration.
    Const(NamedDecl),
}

impl Declaration {
    /// Creates a payload-free declaration of the given kind.
    ///
    /// Protocols get an empty method list.
    #[must_use]
    pub fn named(kind: DeclKind, name: DeclName) -> Self {
        let decl = NamedDecl { name };
        match kind {
            DeclKind::Protocol => Self::Protocol(Protocol::new(decl.name)),
            DeclKind::Struct => Self::Struct(decl),
            DeclKind::Enum => Self::Enum(decl),
            DeclKind::Bits => Self::Bits(decl),
            DeclKind::Union => Self::Union(decl),
            DeclKind::Table => Self::Table(decl),
            DeclKind::Const => Self::Const(decl),
        }
    }

    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> DeclKind {
        match self {
            Self::Protocol(_) => DeclKind::Protocol,
            Self::Struct(_) => DeclKind::Struct,
            Self::Enum(_) => DeclKind::Enum,
            Self::Bits(_) => DeclKind::Bits,
            Self::Union(_) => DeclKind::Union,
            Self::Table(_) => DeclKind::Table,
            Self::Const(_) => DeclKind::Const,
        }
    }

    /// Returns the qualified name.
    #[must_use]
    pub fn name(&self) -> &DeclName {
        match self {
            Self::Protocol(p) => &p.name,
            Self::Struct(d)
            | Self::Enum(d)
            | Self::Bits(d)
            | Self::Union(d)
            | Self::Table(d)
            | Self::Const(d) => &d.name,
        }
    }

    /// Returns the protocol payload if this is a protocol.
    #[must_use]
    pub const fn as_protocol(&self) -> Option<&Protocol> {
        match self {
            Self::Protocol(p) => Some(p),
            _ => None,
        }
    }
}

/// An IDL library ready for code generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawLibrary")]
pub struct Library {
    /// Dotted library name; empty for the root library.
    pub name: String,
    /// Header every generated artifact includes.
    pub primary_header: String,
    types: Vec<ResolvedType>,
    /// Declarations in input order.
    pub declarations: Vec<Declaration>,
    /// Type lookup map.
    type_map: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct RawLibrary {
    name: String,
    #[serde(default)]
    primary_header: Option<String>,
    #[serde(default)]
    types: Vec<ResolvedType>,
    #[serde(default)]
    declarations: Vec<Declaration>,
}

impl From<RawLibrary> for Library {
    fn from(raw: RawLibrary) -> Self {
        let mut library = Self::new(raw.name);
        if let Some(header) = raw.primary_header {
            library.primary_header = header;
        }
        for ty in raw.types {
            library.add_type(ty);
        }
        library.declarations = raw.declarations;
        library
    }
}

impl Library {
    /// Creates an empty library.
    ///
    /// The primary header defaults to `<library path>/wire.h`, e.g.
    /// `fidl/test/echo/wire.h` for `fidl.test.echo`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let primary_header = default_primary_header(&name);
        Self {
            name,
            primary_header,
            types: Vec::new(),
            declarations: Vec::new(),
            type_map: HashMap::new(),
        }
    }

    /// Adds an entry to the type table, replacing one with the same id.
    pub fn add_type(&mut self, ty: ResolvedType) {
        if let Some(&idx) = self.type_map.get(&ty.id) {
            self.types[idx] = ty;
            return;
        }
        self.type_map.insert(ty.id.clone(), self.types.len());
        self.types.push(ty);
    }

    /// Builder-style variant of [`Library::add_type`].
    #[must_use]
    pub fn with_type(mut self, ty: ResolvedType) -> Self {
        self.add_type(ty);
        self
    }

    /// Appends a declaration.
    pub fn add_declaration(&mut self, decl: Declaration) {
        self.declarations.push(decl);
    }

    /// Builder-style variant of [`Library::add_declaration`].
    #[must_use]
    pub fn with_declaration(mut self, decl: Declaration) -> Self {
        self.add_declaration(decl);
        self
    }

    /// Type table in insertion order.
    #[must_use]
    pub fn types(&self) -> &[ResolvedType] {
        &self.types
    }

    /// Resolves a type handle against the type table.
    #[must_use]
    pub fn resolve_type(&self, type_ref: &TypeRef) -> Option<&ResolvedType> {
        self.type_map
            .get(type_ref.id())
            .and_then(|&idx| self.types.get(idx))
    }

    /// Looks up a declaration by its local name.
    #[must_use]
    pub fn get_decl(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name().name() == name)
    }

    /// Protocol declarations in input order.
    pub fn protocols(&self) -> impl Iterator<Item = &Protocol> {
        self.declarations.iter().filter_map(Declaration::as_protocol)
    }

    /// Library name with `.` replaced by `_`, used in file names.
    #[must_use]
    pub fn file_stem(&self) -> String {
        if self.name.is_empty() {
            "root".to_string()
        } else {
            self.name.replace('.', "_")
        }
    }
}

fn default_primary_header(library: &str) -> String {
    if library.is_empty() {
        "wire.h".to_string()
    } else {
        format!("{}/wire.h", library.replace('.', "/"))
    }
}

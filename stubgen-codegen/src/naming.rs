//! Naming and namespace resolution for the C++ wire bindings.
//!
//! Library `fidl.test.echo` becomes namespace `fidl_test_echo`; scopes
//! nested below the library (such as `testing`) become nested namespaces.
//! Every function here is pure: the same name always yields the same
//! strings.

use std::borrow::Cow;
use std::fmt;
use stubgen_schema::DeclName;

/// C++ keywords and names that generated identifiers must not collide with.
const RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char16_t", "char32_t", "class", "compl", "const", "constexpr",
    "const_cast", "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "return", "short", "signed", "sizeof", "static", "static_assert",
    "static_cast", "struct", "switch", "template", "this", "thread_local", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq", "assert", "errno", "std",
];

/// Appends `_` to identifiers that collide with a reserved word.
#[must_use]
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if RESERVED_WORDS.contains(&name) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}

/// A C++ namespace path, outermost component first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Namespace(Vec<String>);

impl Namespace {
    /// The global namespace.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Creates a namespace from its components.
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(components.into_iter().map(Into::into).collect())
    }

    /// Namespace components, outermost first.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.0
    }

    /// Returns true for the global namespace.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of leading components shared with `other`.
    #[must_use]
    pub fn common_prefix_len(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(&other.0)
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.0 {
            write!(f, "::{component}")?;
        }
        Ok(())
    }
}

/// Namespace a declaration's generated definition lives in.
#[must_use]
pub fn namespace_of(name: &DeclName) -> Namespace {
    let mut components = Vec::with_capacity(1 + name.scope().len());
    if !name.library().is_empty() {
        let library = name.library_components().collect::<Vec<_>>().join("_");
        components.push(escape_identifier(&library).into_owned());
    }
    components.extend(
        name.scope()
            .iter()
            .map(|scope| escape_identifier(scope).into_owned()),
    );
    Namespace(components)
}

/// Absolute reference to a declaration, e.g. `::fidl_test_echo::Echo`.
///
/// Declarations in the global namespace render as `::Echo`.
#[must_use]
pub fn qualified_name(name: &DeclName) -> String {
    format!("{}::{}", namespace_of(name), escape_identifier(name.name()))
}

/// Unqualified, escaped local name of a declaration.
#[must_use]
pub fn local_name(name: &DeclName) -> String {
    escape_identifier(name.name()).into_owned()
}

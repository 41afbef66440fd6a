//! Library validation utilities.
//!
//! The upstream compiler has already checked the schema's semantics. This
//! module only checks the structural invariants code generation depends on:
//! non-empty identifiers, unique names and resolvable type references.

use crate::error::SchemaError;
use crate::ir::Library;
use crate::protocols::{Method, Protocol};
use std::collections::HashSet;

/// Validates a library for code generation.
///
/// # Arguments
/// * `library` - The library to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_library(library: &Library) -> Result<(), SchemaError> {
    validate_declarations(library)?;
    for protocol in library.protocols() {
        validate_protocol(library, protocol)?;
    }
    Ok(())
}

/// Returns true for a single C-style identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Empty names are missing fields; anything else must be an identifier.
fn check_name(kind: &str, name: &str, scope: &str) -> Result<(), SchemaError> {
    if name.is_empty() {
        return Err(SchemaError::missing(scope, format!("{kind} name")));
    }
    if !is_identifier(name) {
        return Err(SchemaError::invalid_name(kind, name, scope));
    }
    Ok(())
}

/// Declaration names must be identifiers and unique within the library.
fn validate_declarations(library: &Library) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for decl in &library.declarations {
        let name = decl.name();
        check_name("declaration", name.name(), &library.name)?;
        if !name.library().is_empty() {
            for component in name.library().split('.') {
                check_name("library", component, &name.to_string())?;
            }
        }
        if !seen.insert(name) {
            return Err(SchemaError::duplicate(
                "declaration",
                decl.name().to_string(),
                &library.name,
            ));
        }
    }
    Ok(())
}

fn validate_protocol(library: &Library, protocol: &Protocol) -> Result<(), SchemaError> {
    let scope = protocol.name.to_string();
    if let Some(test_base) = &protocol.test_base {
        check_name("scaffold", test_base, &scope)?;
    }

    let mut seen = HashSet::new();
    for method in &protocol.methods {
        check_name("method", &method.name, &scope)?;
        if !seen.insert(method.name.as_str()) {
            return Err(SchemaError::duplicate(
                "method",
                &method.name,
                protocol.name.to_string(),
            ));
        }
        validate_method(library, protocol, method)?;
    }
    Ok(())
}

fn validate_method(
    library: &Library,
    protocol: &Protocol,
    method: &Method,
) -> Result<(), SchemaError> {
    if method.has_request && method.wire_completer().is_none() {
        return Err(SchemaError::missing(
            protocol.name.to_string(),
            format!("wire completer for method '{}'", method.name),
        ));
    }

    let referrer = format!("{}.{}", protocol.name, method.name);
    for args in [&method.request_args, &method.response_args] {
        let mut seen = HashSet::new();
        for arg in args {
            check_name("parameter", &arg.name, &referrer)?;
            if !seen.insert(arg.name.as_str()) {
                return Err(SchemaError::duplicate("parameter", &arg.name, &referrer));
            }
            if library.resolve_type(&arg.type_ref).is_none() {
                return Err(SchemaError::UnresolvedType {
                    type_ref: arg.type_ref.to_string(),
                    referrer: referrer.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Declaration;
    use crate::types::{DeclKind, DeclName, ResolvedType, TypeRef};

    fn library_with(protocol: Protocol) -> Library {
        Library::new("fidl.test")
            .with_type(ResolvedType::new("string", "::fidl::StringView"))
            .with_declaration(Declaration::Protocol(protocol))
    }

    fn echo() -> Protocol {
        Protocol::new(DeclName::new("fidl.test", "Echo"))
    }

    #[test]
    fn test_validate_valid_library() {
        let protocol = echo()
            .with_method(
                Method::new("EchoString").with_request_arg("value", TypeRef::new("string")),
            )
            .with_method(Method::event("OnEcho"));
        assert!(validate_library(&library_with(protocol)).is_ok());
    }

    #[test]
    fn test_validate_duplicate_declaration() {
        let library = Library::new("fidl.test")
            .with_declaration(Declaration::named(
                DeclKind::Struct,
                DeclName::new("fidl.test", "A"),
            ))
            .with_declaration(Declaration::named(
                DeclKind::Union,
                DeclName::new("fidl.test", "A"),
            ));
        let err = validate_library(&library).unwrap_err();
        assert!(matches!(err, SchemaError::Duplicate { ref kind, .. } if kind == "declaration"));
    }

    #[test]
    fn test_validate_duplicate_method() {
        let protocol = echo()
            .with_method(Method::new("Ping"))
            .with_method(Method::one_way("Ping"));
        let err = validate_library(&library_with(protocol)).unwrap_err();
        assert!(err.to_string().contains("duplicate method 'Ping'"));
    }

    #[test]
    fn test_validate_duplicate_parameter() {
        let protocol = echo().with_method(
            Method::new("Pair")
                .with_request_arg("a", TypeRef::new("string"))
                .with_request_arg("a", TypeRef::new("string")),
        );
        let err = validate_library(&library_with(protocol)).unwrap_err();
        assert!(matches!(err, SchemaError::Duplicate { ref kind, .. } if kind == "parameter"));
    }

    #[test]
    fn test_validate_unresolved_type() {
        let protocol =
            echo().with_method(Method::new("Add").with_request_arg("a", TypeRef::new("int32")));
        let err = validate_library(&library_with(protocol)).unwrap_err();
        match err {
            SchemaError::UnresolvedType { type_ref, referrer } => {
                assert_eq!(type_ref, "int32");
                assert_eq!(referrer, "fidl.test/Echo.Add");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_missing_completer() {
        let mut method = Method::new("Ping");
        method.wire_completer = None;
        let err = validate_library(&library_with(echo().with_method(method))).unwrap_err();
        assert!(err.to_string().contains("wire completer for method 'Ping'"));
    }

    #[test]
    fn test_validate_empty_test_base() {
        let mut protocol = echo().with_method(Method::new("Ping"));
        protocol.test_base = Some(String::new());
        let err = validate_library(&library_with(protocol)).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { ref field, .. } if field == "scaffold name"));
    }

    #[test]
    fn test_validate_test_base_must_be_single_identifier() {
        let mut protocol = echo();
        protocol.test_base = Some("testing::EchoBase".to_string());
        let err = validate_library(&library_with(protocol)).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName { ref kind, .. } if kind == "scaffold"));
    }

    #[test]
    fn test_validate_empty_parameter_name() {
        let protocol =
            echo().with_method(Method::new("Send").with_request_arg("", TypeRef::new("string")));
        let err = validate_library(&library_with(protocol)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "declaration 'fidl.test/Echo.Send': missing parameter name"
        );
    }

    #[test]
    fn test_validate_empty_declaration_name() {
        let library = Library::new("fidl.test").with_declaration(Declaration::named(
            DeclKind::Struct,
            DeclName::new("fidl.test", ""),
        ));
        let err = validate_library(&library).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { ref field, .. } if field == "declaration name"));
    }

    #[test]
    fn test_validate_bad_library_component() {
        let library = Library::new("fidl.test").with_declaration(Declaration::named(
            DeclKind::Table,
            DeclName::new("fidl..test", "T"),
        ));
        assert!(validate_library(&library).is_err());
    }

    #[test]
    fn test_validate_method_name_with_space() {
        let protocol = echo().with_method(Method::one_way("Do It"));
        let err = validate_library(&library_with(protocol)).unwrap_err();
        assert!(err.to_string().contains("invalid method name 'Do It'"));
    }

    #[test]
    fn test_validate_event_needs_no_completer() {
        let protocol = echo().with_method(Method::event("OnPing"));
        assert!(validate_library(&library_with(protocol)).is_ok());
    }
}

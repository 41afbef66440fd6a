//! Protocol definitions.
//!
//! Protocols, their methods, and method parameters.

use crate::types::{DeclName, TypeRef};
use serde::Deserialize;

/// Protocol declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Protocol {
    /// Qualified protocol name.
    pub name: DeclName,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Local name of the generated scaffold class, if overridden.
    #[serde(default)]
    pub test_base: Option<String>,
}

impl Protocol {
    /// Creates a new protocol with no methods.
    #[must_use]
    pub fn new(name: DeclName) -> Self {
        Self {
            name,
            methods: Vec::new(),
            test_base: None,
        }
    }

    /// Adds a method to the protocol.
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Builder-style variant of [`Protocol::add_method`].
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.add_method(method);
        self
    }

    /// Name of the generated test scaffold.
    ///
    /// Lives in the `testing` scope of the protocol's library and is called
    /// `<Protocol>TestBase` unless the IR names it explicitly.
    #[must_use]
    pub fn test_base(&self) -> DeclName {
        let local = self
            .test_base
            .clone()
            .unwrap_or_else(|| format!("{}TestBase", self.name.name()));
        self.name.nested("testing", local)
    }

    /// Methods that accept requests, in declaration order.
    pub fn request_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(|m| m.has_request)
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Protocol method.
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    /// Method name, unique within its protocol.
    pub name: String,
    /// Whether clients send a request (false for events).
    pub has_request: bool,
    /// Whether the server sends a response.
    #[serde(default)]
    pub has_response: bool,
    /// Request parameters.
    #[serde(default)]
    pub request_args: Vec<Parameter>,
    /// Response parameters.
    #[serde(default)]
    pub response_args: Vec<Parameter>,
    /// Completer type name used in generated server signatures.
    #[serde(default)]
    pub wire_completer: Option<String>,
}

impl Method {
    /// Creates a two-way method with no parameters.
    ///
    /// The completer defaults to `<Name>Completer`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            wire_completer: Some(format!("{name}Completer")),
            name,
            has_request: true,
            has_response: true,
            request_args: Vec::new(),
            response_args: Vec::new(),
        }
    }

    /// Creates a one-way method (request, no response).
    pub fn one_way(name: impl Into<String>) -> Self {
        Self {
            has_response: false,
            ..Self::new(name)
        }
    }

    /// Creates an event (server-initiated, no request).
    pub fn event(name: impl Into<String>) -> Self {
        Self {
            has_request: false,
            wire_completer: None,
            ..Self::new(name)
        }
    }

    /// Adds a request parameter.
    #[must_use]
    pub fn with_request_arg(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        self.request_args.push(Parameter::new(name, type_ref));
        self
    }

    /// Adds a response parameter.
    #[must_use]
    pub fn with_response_arg(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        self.response_args.push(Parameter::new(name, type_ref));
        self
    }

    /// Returns the completer name if one is set and non-empty.
    #[must_use]
    pub fn wire_completer(&self) -> Option<&str> {
        self.wire_completer.as_deref().filter(|c| !c.is_empty())
    }
}

/// Named, typed method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

impl Parameter {
    /// Creates a parameter.
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }
}

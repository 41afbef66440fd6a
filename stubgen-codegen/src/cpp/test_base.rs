//! Test scaffold generation.
//!
//! For every protocol, emits a `<Protocol>TestBase` class deriving from the
//! protocol's server interface. Each request-bearing method gets a virtual
//! override that forwards its own name to the pure virtual
//! `NotImplemented_` hook, so a test only overrides the methods it cares
//! about and every other call reports itself uniformly.

use crate::error::CodegenError;
use crate::helpers::{RenderContext, eq};
use crate::naming::{escape_identifier, local_name, namespace_of, qualified_name};
use crate::template::Template;
use stubgen_schema::{DeclKind, Declaration, Library, Method};

/// Signature of the fallback hook every scaffold declares.
const NOT_IMPLEMENTED_HOOK: &str =
    "virtual void NotImplemented_(const std::string& name, ::fidl::CompleterBase& completer) = 0;";

/// Template producing `<library>_test_base.h`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestBaseTemplate;

impl Template for TestBaseTemplate {
    fn name(&self) -> &'static str {
        "TestBase"
    }

    fn applies_to(&self, kind: DeclKind) -> bool {
        eq(&kind, &DeclKind::Protocol)
    }

    fn file_name(&self, library: &Library) -> String {
        format!("{}_test_base.h", library.file_stem())
    }

    fn render_decl(
        &self,
        decl: &Declaration,
        ctx: &mut RenderContext<'_>,
    ) -> Result<(), CodegenError> {
        let protocol = ctx.protocol(decl)?;
        let test_base = protocol.test_base();
        let class_name = local_name(&test_base);
        let interface = format!("{}::Interface", qualified_name(&protocol.name));

        ctx.ensure_namespace(&namespace_of(&test_base))?;

        let mut output = String::new();
        output.push_str(&format!(
            "\n\nclass {class_name} : public {interface} {{\n"
        ));
        output.push_str("  public:\n");
        output.push_str(&format!("  virtual ~{class_name}() {{ }}\n"));
        output.push_str(&format!("  {NOT_IMPLEMENTED_HOOK}\n\n"));
        output.push_str(&format!("  using Interface = {interface};\n"));

        for method in protocol.request_methods() {
            output.push_str(&render_override(ctx, method)?);
        }

        output.push_str("};\n");
        ctx.emit(&output)
    }
}

/// Renders one overridable method that falls back to `NotImplemented_`.
fn render_override(ctx: &RenderContext<'_>, method: &Method) -> Result<String, CodegenError> {
    let params = ctx.params(&method.request_args)?;
    let separator = if method.request_args.is_empty() { "" } else { ", " };
    let completer = ctx.wire_completer(method)?;

    Ok(format!(
        "\n  virtual void {}({params}{separator}{completer} completer) override {{ NotImplemented_(\"{}\", completer); }}\n",
        escape_identifier(&method.name),
        method.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::WireVariant;
    use stubgen_schema::{DeclName, Protocol, ResolvedType, TypeRef};

    fn render_one(protocol: Protocol) -> Result<String, CodegenError> {
        let library = Library::new("fidl.test.echo")
            .with_type(ResolvedType::new("string", "::fidl::StringView"));
        let decl = Declaration::Protocol(protocol);
        let mut ctx = RenderContext::new(&library, "TestBase", "fidl/test/echo/wire.h");
        ctx.use_wire(WireVariant::Sync)?;
        ctx.enter(decl.name());
        TestBaseTemplate.render_decl(&decl, &mut ctx)?;
        ctx.leave();
        ctx.end_of_file()?;
        ctx.finish()
    }

    fn echo() -> Protocol {
        Protocol::new(DeclName::new("fidl.test.echo", "Echo"))
    }

    #[test]
    fn test_scaffold_class_shape() {
        let out = render_one(
            echo().with_method(
                Method::new("EchoString").with_request_arg("value", TypeRef::new("string")),
            ),
        )
        .expect("render");

        assert!(out.contains("namespace fidl_test_echo {\nnamespace testing {\n"));
        assert!(out.contains(
            "class EchoTestBase : public ::fidl_test_echo::Echo::Interface {"
        ));
        assert!(out.contains("virtual ~EchoTestBase() { }"));
        assert!(out.contains(NOT_IMPLEMENTED_HOOK));
        assert!(out.contains("using Interface = ::fidl_test_echo::Echo::Interface;"));
        assert!(out.contains(
            "virtual void EchoString(::fidl::StringView value, EchoStringCompleter::Sync& completer) override { NotImplemented_(\"EchoString\", completer); }"
        ));
    }

    #[test]
    fn test_methods_without_request_are_skipped() {
        let out = render_one(
            echo()
                .with_method(Method::new("Ping"))
                .with_method(Method::event("OnPing")),
        )
        .expect("render");
        assert_eq!(out.matches(" override ").count(), 1);
        assert!(out.contains("virtual void Ping("));
        assert!(!out.contains("OnPing"));
    }

    #[test]
    fn test_each_method_forwards_its_own_name() {
        let out = render_one(
            echo()
                .with_method(Method::new("First"))
                .with_method(Method::one_way("Second"))
                .with_method(Method::new("Third")),
        )
        .expect("render");
        for name in ["First", "Second", "Third"] {
            let line = out
                .lines()
                .find(|l| l.contains(&format!("virtual void {name}(")))
                .expect("method emitted");
            assert!(line.contains(&format!("NotImplemented_(\"{name}\", completer)")));
        }
        let first = out.find("virtual void First(").expect("first");
        let third = out.find("virtual void Third(").expect("third");
        assert!(first < third);
    }

    #[test]
    fn test_empty_parameters_have_no_separator() {
        let out = render_one(echo().with_method(Method::new("Ping"))).expect("render");
        assert!(out.contains("virtual void Ping(PingCompleter::Sync& completer)"));
        assert!(!out.contains("(, "));
    }

    #[test]
    fn test_keyword_method_name_is_escaped_but_literal_is_not() {
        let out = render_one(echo().with_method(Method::new("delete"))).expect("render");
        assert!(out.contains("virtual void delete_("));
        assert!(out.contains("NotImplemented_(\"delete\", completer)"));
    }

    #[test]
    fn test_unresolved_parameter_type_fails() {
        let err = render_one(
            echo().with_method(Method::new("Add").with_request_arg("a", TypeRef::new("int8"))),
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Schema { ref decl, .. } if decl == "fidl.test.echo/Echo"));
    }

    #[test]
    fn test_non_protocol_declaration_is_misuse() {
        let library = Library::new("fidl.test");
        let decl = Declaration::named(DeclKind::Struct, DeclName::new("fidl.test", "S"));
        let mut ctx = RenderContext::new(&library, "TestBase", "x.h");
        ctx.enter(decl.name());
        let err = TestBaseTemplate.render_decl(&decl, &mut ctx).unwrap_err();
        assert!(matches!(err, CodegenError::HelperMisuse { helper: "Protocol", .. }));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            TestBaseTemplate.file_name(&Library::new("fidl.test.echo")),
            "fidl_test_echo_test_base.h"
        );
    }
}

//! End-to-end generation tests.

use stubgen_codegen::{
    CodegenError, Generator, GeneratorConfig, TemplateSet, generate_from_json,
};
use stubgen_schema::{DeclName, Declaration, Library, Method, Protocol, ResolvedType, TypeRef};

const ECHO_IR: &str = r#"{
    "name": "fidl.test.echo",
    "types": [{ "id": "string", "wire": "::fidl::StringView" }],
    "declarations": [
        {
            "kind": "protocol",
            "name": "fidl.test.echo/Echo",
            "methods": [
                {
                    "name": "EchoString",
                    "has_request": true,
                    "has_response": true,
                    "request_args": [{ "name": "value", "type": "string" }],
                    "response_args": [{ "name": "response", "type": "string" }],
                    "wire_completer": "EchoStringCompleter"
                }
            ]
        }
    ]
}"#;

fn multi_protocol_library() -> Library {
    let mut library = Library::new("fidl.test.multi")
        .with_type(ResolvedType::new("uint32", "uint32_t"));
    for name in ["Zeta", "Alpha", "Mid"] {
        let protocol = Protocol::new(DeclName::new("fidl.test.multi", name))
            .with_method(Method::new(format!("{name}Get")))
            .with_method(Method::event(format!("On{name}")))
            .with_method(
                Method::one_way(format!("{name}Set")).with_request_arg("v", TypeRef::new("uint32")),
            );
        library.add_declaration(Declaration::Protocol(protocol));
    }
    library
}

fn test_base(library: &Library) -> String {
    let set = TemplateSet::builtin();
    Generator::new(library, &set, GeneratorConfig::default())
        .render(set.get("TestBase").expect("registered"))
        .expect("render")
        .contents
}

#[test]
fn test_echo_end_to_end() {
    let artifacts = generate_from_json(ECHO_IR, GeneratorConfig::default()).expect("generate");
    let test_base = artifacts
        .iter()
        .find(|a| a.template == "TestBase")
        .expect("test base artifact");

    let expected = "\
// WARNING: This file is machine generated by stubgen.

#pragma once

#include <fidl/test/echo/wire.h>

namespace fidl_test_echo {
namespace testing {

class EchoTestBase : public ::fidl_test_echo::Echo::Interface {
  public:
  virtual ~EchoTestBase() { }
  virtual void NotImplemented_(const std::string& name, ::fidl::CompleterBase& completer) = 0;

  using Interface = ::fidl_test_echo::Echo::Interface;

  virtual void EchoString(::fidl::StringView value, EchoStringCompleter::Sync& completer) override { NotImplemented_(\"EchoString\", completer); }
};

}  // namespace testing
}  // namespace fidl_test_echo

// EOF
";
    assert_eq!(test_base.contents, expected);
}

#[test]
fn test_rendering_is_deterministic() {
    let library = multi_protocol_library();
    assert_eq!(test_base(&library), test_base(&library));

    let first = generate_from_json(ECHO_IR, GeneratorConfig::default()).expect("generate");
    let second = generate_from_json(ECHO_IR, GeneratorConfig::default()).expect("generate");
    assert_eq!(first, second);
}

#[test]
fn test_declaration_order_is_preserved() {
    let out = test_base(&multi_protocol_library());
    let positions: Vec<_> = ["ZetaTestBase", "AlphaTestBase", "MidTestBase"]
        .iter()
        .map(|name| out.find(&format!("class {name}")).expect("class emitted"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_namespaces_are_balanced() {
    let out = test_base(&multi_protocol_library());
    let mut stack = Vec::new();
    for line in out.lines() {
        if let Some(name) = line.strip_prefix("namespace ").and_then(|l| l.strip_suffix(" {")) {
            stack.push(name.to_string());
        } else if let Some(name) = line.strip_prefix("}  // namespace ") {
            assert_eq!(stack.pop().as_deref(), Some(name));
        }
    }
    assert!(stack.is_empty());
    assert_eq!(out.matches("namespace testing {").count(), 1);
}

#[test]
fn test_method_filtering_and_fallback_names() {
    let out = test_base(&multi_protocol_library());
    for name in ["Zeta", "Alpha", "Mid"] {
        assert!(!out.contains(&format!("On{name}")));
        for method in [format!("{name}Get"), format!("{name}Set")] {
            let line = out
                .lines()
                .find(|l| l.contains(&format!("virtual void {method}(")))
                .expect("override emitted");
            assert!(line.contains(&format!("NotImplemented_(\"{method}\", completer)")));
        }
    }
    assert_eq!(out.matches(" override ").count(), 6);
    assert!(out.contains("virtual void ZetaSet(uint32_t v, ZetaSetCompleter::Sync& completer)"));
    assert!(out.contains("virtual void ZetaGet(ZetaGetCompleter::Sync& completer)"));
}

#[test]
fn test_root_library_has_no_dangling_qualifier() {
    let library = Library::new("").with_declaration(Declaration::Protocol(
        Protocol::new(DeclName::new("", "Echo")).with_method(Method::new("Ping")),
    ));
    let out = test_base(&library);
    assert!(out.contains("class EchoTestBase : public ::Echo::Interface {"));
    assert!(out.contains("namespace testing {"));
    assert!(!out.contains(":::"));
}

#[test]
fn test_write_all_writes_every_artifact() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out_dir = dir.path().join("gen");
    let library = multi_protocol_library();
    let set = TemplateSet::builtin();
    let written = Generator::new(&library, &set, GeneratorConfig::default())
        .write_all(&out_dir)
        .expect("write");

    assert_eq!(written.len(), 2);
    for path in &written {
        let contents = std::fs::read_to_string(path).expect("read back");
        assert!(contents.ends_with("// EOF\n"));
    }
    let leftovers: Vec<_> = std::fs::read_dir(&out_dir)
        .expect("list")
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_failed_render_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out_dir = dir.path().join("gen");
    let library = Library::new("fidl.test").with_declaration(Declaration::Protocol(
        Protocol::new(DeclName::new("fidl.test", "Broken"))
            .with_method(Method::new("Add").with_request_arg("a", TypeRef::new("missing"))),
    ));
    let set = TemplateSet::builtin();
    let err = Generator::new(&library, &set, GeneratorConfig::default())
        .write_all(&out_dir)
        .unwrap_err();

    assert!(matches!(
        err,
        CodegenError::Schema { ref decl, template: "TestBase", helper: "Params", .. }
            if decl == "fidl.test/Broken"
    ));
    assert!(!out_dir.exists());
}

#[test]
fn test_blocked_second_artifact_leaves_output_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out_dir = dir.path().join("gen");
    std::fs::create_dir_all(out_dir.join("fidl_test_echo_decls.h/x")).expect("blocker");
    std::fs::write(out_dir.join("fidl_test_echo_test_base.h"), "previous run\n").expect("seed");

    let library = stubgen_schema::parse_library(ECHO_IR).expect("parse");
    let set = TemplateSet::builtin();
    let err = Generator::new(&library, &set, GeneratorConfig::default())
        .write_all(&out_dir)
        .unwrap_err();

    assert!(matches!(err, CodegenError::Io { ref path, .. } if path.ends_with("fidl_test_echo_decls.h")));
    assert_eq!(
        std::fs::read_to_string(out_dir.join("fidl_test_echo_test_base.h")).expect("read"),
        "previous run\n"
    );
    let mut names: Vec<_> = std::fs::read_dir(&out_dir)
        .expect("list")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["fidl_test_echo_decls.h", "fidl_test_echo_test_base.h"]);
}

#[test]
fn test_empty_scaffold_name_is_rejected() {
    let json = ECHO_IR.replace(
        "\"name\": \"fidl.test.echo/Echo\",",
        "\"name\": \"fidl.test.echo/Echo\", \"test_base\": \"\",",
    );
    assert_ne!(json, ECHO_IR);
    let err = generate_from_json(&json, GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, CodegenError::Validation(_)));
}

#[test]
fn test_invalid_ir_is_rejected_before_rendering() {
    let json = ECHO_IR.replace("\"wire_completer\": \"EchoStringCompleter\"", "\"wire_completer\": \"\"");
    let err = generate_from_json(&json, GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, CodegenError::Validation(_)));
}

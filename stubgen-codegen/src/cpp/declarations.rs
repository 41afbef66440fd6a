//! Forward declaration header generation.

use crate::error::CodegenError;
use crate::helpers::RenderContext;
use crate::naming::{local_name, namespace_of};
use crate::template::Template;
use stubgen_schema::{DeclKind, Declaration, Library};

/// Template producing `<library>_decls.h`, one forward declaration per
/// protocol, struct, union and table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationsTemplate;

impl Template for DeclarationsTemplate {
    fn name(&self) -> &'static str {
        "Declarations"
    }

    fn applies_to(&self, kind: DeclKind) -> bool {
        matches!(
            kind,
            DeclKind::Protocol | DeclKind::Struct | DeclKind::Union | DeclKind::Table
        )
    }

    fn file_name(&self, library: &Library) -> String {
        format!("{}_decls.h", library.file_stem())
    }

    fn render_decl(
        &self,
        decl: &Declaration,
        ctx: &mut RenderContext<'_>,
    ) -> Result<(), CodegenError> {
        let keyword = match decl.kind() {
            DeclKind::Struct => "struct",
            DeclKind::Protocol | DeclKind::Union | DeclKind::Table => "class",
            other => {
                return Err(CodegenError::helper_misuse(
                    "Declarations",
                    ctx.position(),
                    format!("cannot forward-declare a {other}"),
                ));
            }
        };

        ctx.ensure_namespace(&namespace_of(decl.name()))?;
        ctx.emit(&format!("{keyword} {};\n", local_name(decl.name())))
    }
}

//! Declaration indexing.
//!
//! Each doclet the host produces may contribute to its file's
//! `declared_names` (classes and functions) or `assignments` (identifier
//! assignments such as `module.exports = Widget`). Only file-scope and static
//! declarations are indexed; nothing else can be exported.

use crate::doclet::Doclet;
use crate::registry::FileRegistry;
use tracing::trace;

const IDENTIFIER_NODE: &str = "Identifier";

/// Updates the registry from doclets as they are produced.
pub struct DeclarationIndexer<'r> {
    registry: &'r mut FileRegistry,
}

impl<'r> DeclarationIndexer<'r> {
    pub fn new(registry: &'r mut FileRegistry) -> Self {
        Self { registry }
    }

    /// Index one doclet into its owning file's record.
    pub fn index(&mut self, doclet: &Doclet) {
        if !doclet.is_file_or_static_scope() {
            return;
        }
        let file = doclet.file_path();
        let info = self.registry.file_info_mut(&file);
        let code = &doclet.meta.code;

        if matches!(doclet.kind.as_str(), "class" | "function") {
            if doclet.name != doclet.longname {
                if let Some(code_name) = &code.name {
                    info.declared_names
                        .insert(code_name.clone(), doclet.longname.clone());
                }
                info.declared_names
                    .insert(doclet.name.clone(), doclet.longname.clone());
                trace!(
                    name = %doclet.name,
                    longname = %doclet.longname,
                    "declared name"
                );
            }
        } else if code.node_type.as_deref() == Some(IDENTIFIER_NODE)
            && let (Some(target), Some(value)) = (&code.name, code.value_text())
        {
            info.assignments.insert(target.clone(), value.to_string());
            trace!(%target, value, "assignment");
        }
    }
}

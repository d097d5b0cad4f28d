//! Cross-file alias resolution for JSDoc doclets.
//!
//! Documentation entries are generated per file and use whatever local name a
//! file gave an imported symbol. This crate restores global names:
//!
//! - `aliases`: local alias bindings from `@typedef {import(...)}` comments
//!   and `require` statements
//! - `declarations`: declared names and export assignments from doclets
//! - `exports`: per-file export tables
//! - `resolution`: alias -> canonical name
//! - `type_rewriter`: canonical names in doclet type expressions
//!
//! [`DocLinker`] ties the phases to the host's events.

pub mod doclet;
pub use doclet::{CodeMeta, Doclet, DocletMeta, TypeSpec, TypedEntry};

pub mod options;
pub use options::LinkerOptions;

pub mod registry;
pub use registry::{AliasSlot, FileInfo, FileRegistry, WHOLE_MODULE};

pub mod aliases;
pub use aliases::{AliasBinding, AliasExtractor, AliasIdiom};

pub mod declarations;
pub use declarations::DeclarationIndexer;

pub mod exports;
pub use exports::ExportResolver;

pub mod resolution;
pub use resolution::{AliasResolver, ResolutionStats};

pub mod type_rewriter;
pub use type_rewriter::{TypeExpression, TypeRewriter, TypeSyntaxError, parse_type_expression};

pub mod linker;
pub use linker::DocLinker;

pub use doclink_common::LinkError;

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
mod test_fixtures;

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "../tests/aliases_tests.rs"]
mod aliases_tests;

#[cfg(test)]
#[path = "../tests/declarations_tests.rs"]
mod declarations_tests;

#[cfg(test)]
#[path = "../tests/exports_tests.rs"]
mod exports_tests;

#[cfg(test)]
#[path = "../tests/resolution_tests.rs"]
mod resolution_tests;

#[cfg(test)]
#[path = "../tests/type_rewriter_tests.rs"]
mod type_rewriter_tests;

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;

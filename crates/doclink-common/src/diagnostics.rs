//! Fatal diagnostics for the resolution pass.
//!
//! Lookup failures (unknown files, missing exports) are not errors: they end
//! up as failed alias slots and leave names untouched. Only structurally
//! invalid input stops the run.

use std::path::PathBuf;

/// Error that aborts a documentation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// A type expression does not have the `name, name.<generic>` shape.
    #[error("{}:{line}: malformed type expression `{expression}`", .file.display())]
    MalformedType {
        file: PathBuf,
        line: u32,
        expression: String,
    },
    /// Generic arguments are nested deeper than
    /// [`crate::limits::MAX_GENERIC_NESTING_DEPTH`].
    #[error(
        "{}:{line}: type expression `{expression}` nests generics deeper than {depth} levels",
        .file.display()
    )]
    TypeNestingTooDeep {
        file: PathBuf,
        line: u32,
        expression: String,
        depth: usize,
    },
}

impl LinkError {
    /// File the offending doclet was produced from.
    pub fn file(&self) -> &PathBuf {
        match self {
            LinkError::MalformedType { file, .. } | LinkError::TypeNestingTooDeep { file, .. } => {
                file
            }
        }
    }

    /// 1-based line of the offending doclet.
    pub fn line(&self) -> u32 {
        match self {
            LinkError::MalformedType { line, .. } | LinkError::TypeNestingTooDeep { line, .. } => {
                *line
            }
        }
    }
}

//! Per-file resolution records.
//!
//! The registry is owned by the [`crate::DocLinker`] for the duration of one
//! documentation run and handed by reference to each phase.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Key of the export table entry for a module replaced wholesale by one value.
pub const WHOLE_MODULE: &str = "*";

/// Resolution state of a local alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasSlot {
    /// Recorded by the extractor, waiting for the resolution barrier.
    Unresolved {
        target: PathBuf,
        /// Dotted export path; empty means the whole module.
        exported_path: String,
    },
    /// Canonical name of the aliased symbol.
    Resolved(String),
    /// Target file or export not found.
    Failed,
}

impl AliasSlot {
    pub fn is_final(&self) -> bool {
        !matches!(self, AliasSlot::Unresolved { .. })
    }

    pub fn resolved_name(&self) -> Option<&str> {
        match self {
            AliasSlot::Resolved(name) => Some(name),
            _ => None,
        }
    }
}

/// Everything the resolver knows about one source file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub filename: PathBuf,
    /// Local alias name -> resolution slot.
    pub local_aliases: IndexMap<String, AliasSlot>,
    /// Binding name -> canonical name.
    pub declared_names: FxHashMap<String, String>,
    /// Assignment target -> right-hand side, in source order.
    pub assignments: IndexMap<String, String>,
    /// Export path (or [`WHOLE_MODULE`]) -> canonical name.
    pub export_table: IndexMap<String, String>,
    exports_resolved: bool,
}

impl FileInfo {
    pub fn new(filename: PathBuf) -> Self {
        Self {
            filename,
            local_aliases: IndexMap::new(),
            declared_names: FxHashMap::default(),
            assignments: IndexMap::new(),
            export_table: IndexMap::new(),
            exports_resolved: false,
        }
    }

    /// Whether the export table has been derived.
    pub fn exports_resolved(&self) -> bool {
        self.exports_resolved
    }

    pub(crate) fn mark_exports_resolved(&mut self) {
        self.exports_resolved = true;
    }

    /// Canonical replacement for a name used in this file, if any.
    ///
    /// Names declared in the file win over aliases; aliases only count once
    /// resolved.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        if let Some(canonical) = self.declared_names.get(name) {
            return Some(canonical);
        }
        self.local_aliases
            .get(name)
            .and_then(AliasSlot::resolved_name)
    }
}

/// Path -> [`FileInfo`] for every file seen in the run.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: IndexMap<PathBuf, FileInfo>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `path`, creating it on first request.
    pub fn file_info_mut(&mut self, path: &Path) -> &mut FileInfo {
        self.files
            .entry(path.to_path_buf())
            .or_insert_with(|| FileInfo::new(path.to_path_buf()))
    }

    /// Look up a record without creating one.
    pub fn get(&self, path: &Path) -> Option<&FileInfo> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileInfo> {
        self.files.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut FileInfo> {
        self.files.values_mut()
    }
}

//! Alias extraction from raw source text.
//!
//! Three textual idioms bind a local name to something another file exports:
//!
//! ```js
//! /** @typedef {import("./shapes").Circle} Circle */
//! const Point = require('./geom').Point;
//! const {Line, Ray} = require('./geom').primitives;
//! ```
//!
//! Recognition is pattern based and deliberately narrow; anything that does
//! not match one of the patterns is ignored.

use crate::options::LinkerOptions;
use crate::registry::{AliasSlot, FileInfo};
use doclink_common::resolve_specifier;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// `/** @typedef {import("./path").Export.Path} LocalName */`
static TYPEDEF_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"/\*\*\s*(?:\*\s*)?@typedef\s*\{\s*import\(\s*["']([^"']+)["']\s*\)((?:\.[\w$]+)*)\s*\}\s*([\w$]+)\s*\*/"#,
    )
    .unwrap()
});

/// `const Name = require("./path").export.path`
static REQUIRE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\b(?:const|let|var)\s+([\w$]+)\s*=\s*require\(\s*["']([^"']+)["']\s*\)((?:\.[\w$]+)*)"#,
    )
    .unwrap()
});

/// `const {A, B} = require("./path").export.path`
static DESTRUCTURING_REQUIRE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\b(?:const|let|var)\s*\{([^{}]*)\}\s*=\s*require\(\s*["']([^"']+)["']\s*\)((?:\.[\w$]+)*)"#,
    )
    .unwrap()
});

static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][\w$]*$").unwrap());

/// Which textual idiom produced a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasIdiom {
    /// `@typedef {import(...)}` comment.
    TypedefImport,
    /// `const X = require(...)`.
    Require,
    /// `const {X, Y} = require(...)`.
    DestructuringRequire,
}

/// A local name bound to an export of another file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasBinding {
    pub local_name: String,
    /// Resolved, normalized path of the target file.
    pub target: PathBuf,
    /// Dotted export path; empty means the whole module.
    pub exported_path: String,
    pub idiom: AliasIdiom,
}

impl AliasBinding {
    fn into_slot(self) -> (String, AliasSlot) {
        (
            self.local_name,
            AliasSlot::Unresolved {
                target: self.target,
                exported_path: self.exported_path,
            },
        )
    }
}

/// Scans source text for alias bindings.
pub struct AliasExtractor<'a> {
    options: &'a LinkerOptions,
}

impl<'a> AliasExtractor<'a> {
    pub fn new(options: &'a LinkerOptions) -> Self {
        Self { options }
    }

    /// Extract every alias binding from `source`.
    ///
    /// Idioms are scanned in order (typedef imports, simple requires,
    /// destructuring requires), so a later binding of the same local name
    /// wins once recorded. Typedef import blocks are removed from `source`
    /// when stripping is enabled; each removed block leaves its line breaks
    /// behind so later line numbers are unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %filename.display()))]
    pub fn extract(&self, filename: &Path, source: &mut String) -> Vec<AliasBinding> {
        let mut bindings = self.scan_typedef_imports(filename, source);
        if self.options.strip_typedef_imports && !bindings.is_empty() {
            *source = strip_typedef_imports(source);
        }
        bindings.extend(self.scan_requires(filename, source));
        bindings.extend(self.scan_destructuring_requires(filename, source));
        debug!(count = bindings.len(), "extracted alias bindings");
        bindings
    }

    fn scan_typedef_imports(&self, filename: &Path, source: &str) -> Vec<AliasBinding> {
        TYPEDEF_IMPORT_RE
            .captures_iter(source)
            .map(|caps| AliasBinding {
                local_name: caps[3].to_string(),
                target: self.target_path(filename, &caps[1]),
                exported_path: dotted_suffix(&caps[2]),
                idiom: AliasIdiom::TypedefImport,
            })
            .collect()
    }

    fn scan_requires(&self, filename: &Path, source: &str) -> Vec<AliasBinding> {
        REQUIRE_RE
            .captures_iter(source)
            .map(|caps| AliasBinding {
                local_name: caps[1].to_string(),
                target: self.target_path(filename, &caps[2]),
                exported_path: dotted_suffix(&caps[3]),
                idiom: AliasIdiom::Require,
            })
            .collect()
    }

    fn scan_destructuring_requires(&self, filename: &Path, source: &str) -> Vec<AliasBinding> {
        let mut bindings = Vec::new();
        for caps in DESTRUCTURING_REQUIRE_RE.captures_iter(source) {
            let target = self.target_path(filename, &caps[2]);
            let narrowing = dotted_suffix(&caps[3]);
            for entry in caps[1].split(',').map(str::trim) {
                if entry.is_empty() {
                    continue;
                }
                if !IDENTIFIER_RE.is_match(entry) {
                    trace!(entry, "skipping non-bare destructuring entry");
                    continue;
                }
                let exported_path = if narrowing.is_empty() {
                    entry.to_string()
                } else {
                    format!("{narrowing}.{entry}")
                };
                bindings.push(AliasBinding {
                    local_name: entry.to_string(),
                    target: target.clone(),
                    exported_path,
                    idiom: AliasIdiom::DestructuringRequire,
                });
            }
        }
        bindings
    }

    fn target_path(&self, filename: &Path, specifier: &str) -> PathBuf {
        resolve_specifier(filename, specifier, &self.options.default_extension)
    }
}

/// Store extracted bindings as unresolved requests, in extraction order.
pub fn record_aliases(info: &mut FileInfo, bindings: Vec<AliasBinding>) {
    for binding in bindings {
        let (name, slot) = binding.into_slot();
        if let Some(previous) = info.local_aliases.insert(name, slot) {
            trace!(?previous, "alias rebound by a later idiom");
        }
    }
}

fn strip_typedef_imports(source: &str) -> String {
    TYPEDEF_IMPORT_RE
        .replace_all(source, |caps: &Captures<'_>| {
            caps[0].chars().filter(|&c| c == '\n').collect::<String>()
        })
        .into_owned()
}

/// `.a.b` -> `a.b`
fn dotted_suffix(suffix: &str) -> String {
    suffix.strip_prefix('.').unwrap_or(suffix).to_string()
}

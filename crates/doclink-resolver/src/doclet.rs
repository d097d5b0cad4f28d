//! Doclet records as produced by the host documentation engine.
//!
//! The layout follows the jsdoc JSON shape (`meta.code`, `type.names`, ...).
//! Fields the resolver does not look at are kept in `extra` maps so a host
//! can round-trip its records through this crate unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use doclink_common::normalize_path;
use std::path::{Path, PathBuf};

/// One parsed declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doclet {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    /// Canonical, fully-qualified name.
    #[serde(default)]
    pub longname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default)]
    pub meta: DocletMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TypedEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub returns: Vec<TypedEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<TypedEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<TypedEntry>,
    /// Supertype names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub augments: Vec<String>,
    /// The declaration's own type (`@type`, `@typedef`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_spec: Option<TypeSpec>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Source location and code metadata of a doclet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocletMeta {
    /// Directory containing the file.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub lineno: u32,
    #[serde(default)]
    pub code: CodeMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The code construct a doclet was attached to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeMeta {
    /// Binding target, e.g. `Widget` or `module.exports`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Syntax node type of the value, e.g. `Identifier`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A parameter, return value, property or thrown exception.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypedEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_spec: Option<TypeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Type names of an entry; each name is one type expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Doclet {
    /// Create a doclet with the given kind, simple name and canonical name.
    pub fn new(kind: &str, name: &str, longname: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            longname: longname.to_string(),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    /// Set the source location (`meta.path`, `meta.filename`, `meta.lineno`).
    pub fn at(mut self, dir: &str, filename: &str, lineno: u32) -> Self {
        self.meta.path = dir.to_string();
        self.meta.filename = filename.to_string();
        self.meta.lineno = lineno;
        self
    }

    /// Set `meta.code` to a construct binding `name` to a `node_type` value.
    pub fn with_code(mut self, node_type: &str, name: &str, value: Option<&str>) -> Self {
        self.meta.code.node_type = Some(node_type.to_string());
        self.meta.code.name = Some(name.to_string());
        self.meta.code.value = value.map(|v| Value::String(v.to_string()));
        self
    }

    pub fn with_param(mut self, name: &str, type_names: &[&str]) -> Self {
        self.params.push(TypedEntry::new(Some(name), type_names));
        self
    }

    pub fn with_return(mut self, type_names: &[&str]) -> Self {
        self.returns.push(TypedEntry::new(None, type_names));
        self
    }

    pub fn with_property(mut self, name: &str, type_names: &[&str]) -> Self {
        self.properties.push(TypedEntry::new(Some(name), type_names));
        self
    }

    pub fn with_augments(mut self, supertype: &str) -> Self {
        self.augments.push(supertype.to_string());
        self
    }

    /// Absolute path of the file this doclet was produced from.
    pub fn file_path(&self) -> PathBuf {
        normalize_path(&Path::new(&self.meta.path).join(&self.meta.filename))
    }

    /// Whether the declaration can be reached from outside its file.
    pub fn is_file_or_static_scope(&self) -> bool {
        matches!(self.scope.as_deref(), Some("global" | "static"))
    }
}

impl CodeMeta {
    /// The right-hand side as text, when it is a string.
    pub fn value_text(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }
}

impl TypedEntry {
    pub fn new(name: Option<&str>, type_names: &[&str]) -> Self {
        Self {
            type_spec: Some(TypeSpec::new(type_names)),
            name: name.map(str::to_string),
            extra: Map::new(),
        }
    }
}

impl TypeSpec {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            extra: Map::new(),
        }
    }
}

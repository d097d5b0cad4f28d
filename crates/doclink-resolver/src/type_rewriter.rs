//! Type expression rewriting.
//!
//! Doclet type names are written with whatever name the file gave a symbol.
//! After resolution every name is replaced by its canonical form, including
//! names nested inside generic arguments:
//!
//! ```text
//! Array.<Array.<Widget>>        ->  Array.<Array.<pkg.Widget>>
//! Object.<string, Widget>       ->  Object.<string, pkg.Widget>
//! ```
//!
//! Grammar (recursive descent):
//!
//! ```text
//! expr := item ( "," item )*
//! item := name ( ".<" expr ">" )?
//! name := one or more characters other than ',' '<' '>' (trimmed, non-empty)
//! ```

use crate::doclet::Doclet;
use crate::registry::{FileInfo, FileRegistry};
use doclink_common::LinkError;
use doclink_common::limits::MAX_GENERIC_NESTING_DEPTH;
use tracing::trace;

/// Why a type expression could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSyntaxError {
    /// The text does not follow the `name, name.<generic>` grammar.
    Malformed,
    /// Generic arguments nest deeper than the limit.
    TooDeep(usize),
}

/// A comma-separated list of type items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpression<'a> {
    pub items: Vec<TypeItem<'a>>,
}

/// One name with an optional generic argument, plus the whitespace around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeItem<'a> {
    leading: &'a str,
    pub name: &'a str,
    trailing: &'a str,
    pub generic: Option<TypeExpression<'a>>,
    tail: &'a str,
}

/// Parse a type expression such as `Object.<string, Array.<Foo>>`.
pub fn parse_type_expression(text: &str) -> Result<TypeExpression<'_>, TypeSyntaxError> {
    let mut parser = TypeParser { text, pos: 0 };
    let expression = parser.parse_list(0)?;
    if parser.pos != text.len() {
        return Err(TypeSyntaxError::Malformed);
    }
    Ok(expression)
}

struct TypeParser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn parse_list(&mut self, depth: usize) -> Result<TypeExpression<'a>, TypeSyntaxError> {
        let mut items = vec![self.parse_item(depth)?];
        while self.eat(",") {
            items.push(self.parse_item(depth)?);
        }
        Ok(TypeExpression { items })
    }

    fn parse_item(&mut self, depth: usize) -> Result<TypeItem<'a>, TypeSyntaxError> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b',' | b'>' => break,
                b'.' if bytes.get(self.pos + 1) == Some(&b'<') => break,
                b'<' => return Err(TypeSyntaxError::Malformed),
                _ => self.pos += 1,
            }
        }
        let (leading, name, trailing) = split_whitespace(&self.text[start..self.pos]);
        if name.is_empty() {
            return Err(TypeSyntaxError::Malformed);
        }

        let mut generic = None;
        let mut tail = "";
        if self.eat(".<") {
            if depth + 1 > MAX_GENERIC_NESTING_DEPTH {
                return Err(TypeSyntaxError::TooDeep(MAX_GENERIC_NESTING_DEPTH));
            }
            generic = Some(self.parse_list(depth + 1)?);
            if !self.eat(">") {
                return Err(TypeSyntaxError::Malformed);
            }
            let tail_start = self.pos;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            tail = &self.text[tail_start..self.pos];
        }

        Ok(TypeItem {
            leading,
            name,
            trailing,
            generic,
            tail,
        })
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.text[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }
}

/// Split `"  Foo "` into `("  ", "Foo", " ")`.
fn split_whitespace(raw: &str) -> (&str, &str, &str) {
    let name_start = raw.len() - raw.trim_start().len();
    let name_end = raw.trim_end().len().max(name_start);
    (
        &raw[..name_start],
        &raw[name_start..name_end],
        &raw[name_end..],
    )
}

impl TypeExpression<'_> {
    /// Render the expression, replacing each name `lookup` knows about.
    pub fn render_with<'n>(&self, lookup: &impl Fn(&str) -> Option<&'n str>) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(item.leading);
            out.push_str(lookup(item.name).unwrap_or(item.name));
            out.push_str(item.trailing);
            if let Some(generic) = &item.generic {
                out.push_str(".<");
                out.push_str(&generic.render_with(lookup));
                out.push('>');
                out.push_str(item.tail);
            }
        }
        out
    }
}

/// Rewrites the type-bearing fields of doclets to canonical names.
pub struct TypeRewriter<'r> {
    registry: &'r FileRegistry,
}

impl<'r> TypeRewriter<'r> {
    pub fn new(registry: &'r FileRegistry) -> Self {
        Self { registry }
    }

    /// Rewrite `doclet` in place.
    ///
    /// Covers parameter, return, property and exception types, the doclet's
    /// own type, and its supertypes. Every expression is parsed even when the
    /// file has nothing to substitute, so malformed input is always reported.
    pub fn rewrite_doclet(&self, doclet: &mut Doclet) -> Result<(), LinkError> {
        let file = doclet.file_path();
        let info = self.registry.get(&file);
        let line = doclet.meta.lineno;

        let rewrite = |expression: &mut String| -> Result<(), LinkError> {
            match rewrite_expression(info, expression) {
                Ok(rewritten) => {
                    if rewritten != *expression {
                        trace!(from = %expression, to = %rewritten, "rewrote type");
                        *expression = rewritten;
                    }
                    Ok(())
                }
                Err(TypeSyntaxError::Malformed) => Err(LinkError::MalformedType {
                    file: file.clone(),
                    line,
                    expression: expression.clone(),
                }),
                Err(TypeSyntaxError::TooDeep(depth)) => Err(LinkError::TypeNestingTooDeep {
                    file: file.clone(),
                    line,
                    expression: expression.clone(),
                    depth,
                }),
            }
        };

        let entries = doclet
            .params
            .iter_mut()
            .chain(doclet.returns.iter_mut())
            .chain(doclet.properties.iter_mut())
            .chain(doclet.exceptions.iter_mut());
        for entry in entries {
            if let Some(spec) = &mut entry.type_spec {
                for name in &mut spec.names {
                    rewrite(name)?;
                }
            }
        }
        if let Some(spec) = &mut doclet.type_spec {
            for name in &mut spec.names {
                rewrite(name)?;
            }
        }
        for supertype in &mut doclet.augments {
            rewrite(supertype)?;
        }
        Ok(())
    }
}

/// Rewrite one expression using the names known to `info`.
pub fn rewrite_expression(
    info: Option<&FileInfo>,
    expression: &str,
) -> Result<String, TypeSyntaxError> {
    let parsed = parse_type_expression(expression)?;
    Ok(parsed.render_with(&|name: &str| info.and_then(|info| info.canonical_name(name))))
}

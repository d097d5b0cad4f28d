//! Centralized limits for the resolution pass.
//!
//! Type expressions come from source comments and are always finite, but the
//! type rewriter recurses once per generic level, so the depth is capped.

/// Maximum nesting of generic arguments in a single type expression.
///
/// `Array.<Array.<Foo>>` has a nesting depth of 2. Exceeding the limit is
/// reported as [`crate::LinkError::TypeNestingTooDeep`].
///
/// ```text
/// Object.<string, Array.<Map.<string, Set.<Foo>>>>   // depth 3
/// ```
pub const MAX_GENERIC_NESTING_DEPTH: usize = 64;

/// Extension appended to module specifiers that carry none.
pub const DEFAULT_SOURCE_EXTENSION: &str = ".js";

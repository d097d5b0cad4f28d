//! Tracing configuration for debugging resolution runs.
//!
//! Supports three output formats controlled by `DOCLINK_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Which aliases failed to resolve, and why
//! DOCLINK_LOG=doclink_resolver=debug DOCLINK_LOG_FORMAT=tree <host command>
//!
//! # Everything, as JSON
//! DOCLINK_LOG=trace DOCLINK_LOG_FORMAT=json <host command>
//! ```
//!
//! The subscriber is only initialised when `DOCLINK_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read the `DOCLINK_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("DOCLINK_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `DOCLINK_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("DOCLINK_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Returns `true` when a subscriber was installed by this call. Does nothing
/// when neither `DOCLINK_LOG` nor `RUST_LOG` is set, or when the host already
/// installed a global subscriber.
///
/// All output goes to stderr so it never interferes with the host's output.
pub fn init_tracing() -> bool {
    let has_doclink_log = std::env::var("DOCLINK_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_doclink_log && !has_rust_log {
        return false;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

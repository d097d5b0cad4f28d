//! Export table derivation.
//!
//! CommonJS modules build their export surface with plain assignments:
//!
//! ```js
//! module.exports = Widget;          // whole module replaced
//! const api = exports;              // export object re-bound
//! api.Button = Button;              // property attached via the new name
//! exports.Label = Label;            // property attached directly
//! ```
//!
//! The resolver follows the "active export alias" through these assignments
//! and maps each export path to the canonical name of the assigned
//! declaration.

use crate::registry::{FileInfo, FileRegistry, WHOLE_MODULE};
use tracing::{debug, trace};

const MODULE_EXPORTS: &str = "module.exports";
const EXPORTS: &str = "exports";

/// Derives export tables once every file has been indexed.
pub struct ExportResolver;

impl ExportResolver {
    /// Compute the export table of every file in the registry.
    pub fn resolve_all(registry: &mut FileRegistry) {
        for info in registry.iter_mut() {
            Self::resolve_file(info);
        }
    }

    /// Compute `info.export_table`. Runs at most once per file.
    pub fn resolve_file(info: &mut FileInfo) {
        if info.exports_resolved() {
            return;
        }
        let mut active_alias = EXPORTS;

        if let Some(value) = info.assignments.get(MODULE_EXPORTS) {
            active_alias = value.as_str();
            if let Some(canonical) = info.declared_names.get(value) {
                info.export_table
                    .insert(WHOLE_MODULE.to_string(), canonical.clone());
                // The replacing symbol is also reachable by its own binding
                // name: `const {Widget} = require('./widget')`.
                info.export_table.insert(value.clone(), canonical.clone());
            }
        }

        for (target, value) in &info.assignments {
            if value == EXPORTS {
                active_alias = target.as_str();
            }
        }
        trace!(file = %info.filename.display(), active_alias, "export alias");

        let prefix = format!("{active_alias}.");
        for (target, value) in &info.assignments {
            let Some(suffix) = target.strip_prefix(&prefix) else {
                continue;
            };
            match info.declared_names.get(value) {
                Some(canonical) => {
                    info.export_table
                        .insert(suffix.to_string(), canonical.clone());
                }
                None => trace!(%target, %value, "export value has no canonical name"),
            }
        }

        debug!(
            file = %info.filename.display(),
            exports = info.export_table.len(),
            "resolved export table"
        );
        info.mark_exports_resolved();
    }
}

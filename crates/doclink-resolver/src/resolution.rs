//! Alias resolution across files.
//!
//! Runs after every export table is known. Each unresolved alias is looked up
//! in its target file's export table; failures are recorded, never raised.

use crate::registry::{AliasSlot, FileRegistry, WHOLE_MODULE};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome counts of one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub resolved: usize,
    pub failed: usize,
}

/// Finalizes every [`AliasSlot::Unresolved`] slot in the registry.
pub struct AliasResolver;

impl AliasResolver {
    /// Resolve all pending aliases.
    ///
    /// Lookups are computed against the registry as it stands and applied
    /// afterwards, so the result does not depend on file order.
    pub fn resolve_all(registry: &mut FileRegistry) -> ResolutionStats {
        let view: &FileRegistry = registry;
        let mut outcomes: Vec<(PathBuf, String, AliasSlot)> = Vec::new();
        for info in view.iter() {
            for (name, slot) in &info.local_aliases {
                if let AliasSlot::Unresolved {
                    target,
                    exported_path,
                } = slot
                {
                    let outcome = Self::lookup(view, target, exported_path);
                    if outcome == AliasSlot::Failed {
                        debug!(
                            file = %info.filename.display(),
                            alias = %name,
                            target = %target.display(),
                            exported_path = %exported_path,
                            "alias did not resolve"
                        );
                    }
                    outcomes.push((info.filename.clone(), name.clone(), outcome));
                }
            }
        }

        let mut stats = ResolutionStats::default();
        for (file, name, outcome) in outcomes {
            match outcome {
                AliasSlot::Resolved(_) => stats.resolved += 1,
                _ => stats.failed += 1,
            }
            if let Some(slot) = registry.file_info_mut(&file).local_aliases.get_mut(&name) {
                *slot = outcome;
            }
        }
        debug!(
            resolved = stats.resolved,
            failed = stats.failed,
            "alias resolution complete"
        );
        stats
    }

    fn lookup(registry: &FileRegistry, target: &Path, exported_path: &str) -> AliasSlot {
        let Some(target_info) = registry.get(target) else {
            return AliasSlot::Failed;
        };
        let import_name = if exported_path.is_empty() {
            WHOLE_MODULE
        } else {
            exported_path
        };
        match target_info.export_table.get(import_name) {
            Some(canonical) => AliasSlot::Resolved(canonical.clone()),
            None => AliasSlot::Failed,
        }
    }
}

//! Host event surface.
//!
//! The host engine drives a run through three events:
//!
//! 1. [`DocLinker::parse_begin`] for each file, before the host parses it
//! 2. [`DocLinker::new_doclet`] for each declaration the host produces
//! 3. [`DocLinker::processing_complete`] once, with every doclet of the run
//!
//! Events 1 and 2 interleave per file. Event 3 is the resolution barrier:
//! export tables and aliases are only resolved once every file is indexed.

use crate::aliases::{AliasExtractor, record_aliases};
use crate::declarations::DeclarationIndexer;
use crate::doclet::Doclet;
use crate::exports::ExportResolver;
use crate::options::LinkerOptions;
use crate::registry::FileRegistry;
use crate::resolution::{AliasResolver, ResolutionStats};
use crate::type_rewriter::TypeRewriter;
use doclink_common::{LinkError, normalize_path};
use std::path::Path;
use tracing::{debug, info_span};

/// State of one documentation run.
#[derive(Debug, Default)]
pub struct DocLinker {
    options: LinkerOptions,
    registry: FileRegistry,
}

impl DocLinker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LinkerOptions) -> Self {
        Self {
            options,
            registry: FileRegistry::new(),
        }
    }

    pub fn options(&self) -> &LinkerOptions {
        &self.options
    }

    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    /// Source of `filename` is about to be parsed.
    ///
    /// Records the file's alias bindings and may rewrite `source` (typedef
    /// import blocks are stripped).
    pub fn parse_begin(&mut self, filename: &Path, source: &mut String) {
        let filename = normalize_path(filename);
        let bindings = AliasExtractor::new(&self.options).extract(&filename, source);
        record_aliases(self.registry.file_info_mut(&filename), bindings);
    }

    /// The host produced a declaration. The doclet is not modified.
    pub fn new_doclet(&mut self, doclet: &Doclet) {
        DeclarationIndexer::new(&mut self.registry).index(doclet);
    }

    /// Every file has been parsed: resolve exports and aliases, then rewrite
    /// the type names of all `doclets` in place.
    ///
    /// Stops at the first malformed type expression.
    pub fn processing_complete(
        &mut self,
        doclets: &mut [Doclet],
    ) -> Result<ResolutionStats, LinkError> {
        let span = info_span!("processing_complete", files = self.registry.len());
        let _guard = span.enter();

        ExportResolver::resolve_all(&mut self.registry);
        let stats = AliasResolver::resolve_all(&mut self.registry);

        let rewriter = TypeRewriter::new(&self.registry);
        for doclet in doclets.iter_mut() {
            rewriter.rewrite_doclet(doclet)?;
        }
        debug!(doclets = doclets.len(), "rewrote doclet types");
        Ok(stats)
    }
}

//! Fix-all state: the immutable description of one fix-all request.

use std::fmt;
use std::sync::Arc;

use lode_ir::{CancellationToken, DocumentId, Project};
use rustc_hash::FxHashSet;

use super::{
    DiagnosticProvider, DocumentDiagnosticMap, FixAllContext, FixAllScope,
    FixMultipleDiagnosticProvider, ProjectDiagnosticMap,
};
use crate::DiagnosticId;

/// One fix-all request, from which per-run [`FixAllContext`]s are made.
#[derive(Clone)]
pub struct FixAllState {
    scope: FixAllScope,
    project: Project,
    document: Option<DocumentId>,
    diagnostic_ids: FxHashSet<DiagnosticId>,
    equivalence_key: Option<String>,
    provider: Arc<dyn DiagnosticProvider>,
}

impl FixAllState {
    pub fn new(
        scope: FixAllScope,
        project: Project,
        document: Option<DocumentId>,
        diagnostic_ids: FxHashSet<DiagnosticId>,
        equivalence_key: Option<String>,
        provider: Arc<dyn DiagnosticProvider>,
    ) -> Self {
        FixAllState {
            scope,
            project,
            document,
            diagnostic_ids,
            equivalence_key,
            provider,
        }
    }

    /// Fix exactly the diagnostics in `diagnostics`, grouped by document.
    ///
    /// The scope is [`FixAllScope::Custom`] and the ids to fix are the ids
    /// occurring in the map.
    pub fn for_fix_multiple_documents(
        trigger_project: Project,
        diagnostics: DocumentDiagnosticMap,
        equivalence_key: Option<String>,
    ) -> Self {
        let diagnostic_ids = diagnostics.diagnostic_ids();
        let provider = FixMultipleDiagnosticProvider::for_documents(diagnostics);
        Self::new(
            FixAllScope::Custom,
            trigger_project,
            None,
            diagnostic_ids,
            equivalence_key,
            Arc::new(provider),
        )
    }

    /// Fix exactly the diagnostics in `diagnostics`, grouped by project.
    pub fn for_fix_multiple_projects(
        trigger_project: Project,
        diagnostics: ProjectDiagnosticMap,
        equivalence_key: Option<String>,
    ) -> Self {
        let diagnostic_ids = diagnostics.diagnostic_ids();
        let provider = FixMultipleDiagnosticProvider::for_projects(diagnostics);
        Self::new(
            FixAllScope::Custom,
            trigger_project,
            None,
            diagnostic_ids,
            equivalence_key,
            Arc::new(provider),
        )
    }

    pub fn scope(&self) -> FixAllScope {
        self.scope
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn diagnostic_ids(&self) -> &FxHashSet<DiagnosticId> {
        &self.diagnostic_ids
    }

    pub fn is_fix_multiple(&self) -> bool {
        self.provider.is_fix_multiple()
    }

    /// Same request, narrowed or widened to another scope.
    #[must_use]
    pub fn with_scope(
        &self,
        scope: FixAllScope,
        project: Project,
        document: Option<DocumentId>,
    ) -> Self {
        FixAllState {
            scope,
            project,
            document,
            ..self.clone()
        }
    }

    pub fn create_context(&self, cancel: CancellationToken) -> FixAllContext {
        FixAllContext {
            scope: self.scope,
            project: self.project.clone(),
            document: self.document,
            diagnostic_ids: self.diagnostic_ids.clone(),
            equivalence_key: self.equivalence_key.clone(),
            provider: Arc::clone(&self.provider),
            cancel,
        }
    }
}

impl fmt::Debug for FixAllState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixAllState")
            .field("scope", &self.scope)
            .field("project", &self.project.id())
            .field("document", &self.document)
            .field("diagnostic_ids", &self.diagnostic_ids)
            .field("equivalence_key", &self.equivalence_key)
            .finish_non_exhaustive()
    }
}

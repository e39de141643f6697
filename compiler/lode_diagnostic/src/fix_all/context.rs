//! The context a fix-all operation runs in.

use std::fmt;
use std::sync::Arc;

use lode_ir::{CancellationToken, Cancelled, DocumentId, Project, ProjectId};
use rustc_hash::FxHashSet;

use super::{DiagnosticProvider, DocumentDiagnosticMap, ProjectDiagnosticMap};
use crate::{Diagnostic, DiagnosticId};

/// How far a fix-all operation reaches.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FixAllScope {
    /// The triggering document only.
    Document,
    /// Every document of the triggering project.
    Project,
    /// Every project in the workspace.
    Solution,
    /// An explicit set chosen by the user (fix multiple).
    Custom,
}

/// Everything a fix-all provider needs to gather and fix diagnostics.
///
/// Built by [`FixAllState::create_context`](super::FixAllState::create_context).
/// Queries check the cancellation token on entry and then filter the
/// provider's answer down to the diagnostic ids being fixed.
#[derive(Clone)]
pub struct FixAllContext {
    pub(super) scope: FixAllScope,
    pub(super) project: Project,
    pub(super) document: Option<DocumentId>,
    pub(super) diagnostic_ids: FxHashSet<DiagnosticId>,
    pub(super) equivalence_key: Option<String>,
    pub(super) provider: Arc<dyn DiagnosticProvider>,
    pub(super) cancel: CancellationToken,
}

impl FixAllContext {
    pub fn scope(&self) -> FixAllScope {
        self.scope
    }

    /// The project the operation was triggered from.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The document the operation was triggered from, if any.
    pub fn document(&self) -> Option<DocumentId> {
        self.document
    }

    pub fn diagnostic_ids(&self) -> &FxHashSet<DiagnosticId> {
        &self.diagnostic_ids
    }

    /// Identifies which code action variant is applied to every fix.
    pub fn equivalence_key(&self) -> Option<&str> {
        self.equivalence_key.as_deref()
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn provider(&self) -> &dyn DiagnosticProvider {
        &*self.provider
    }

    pub fn is_fix_multiple(&self) -> bool {
        self.provider.is_fix_multiple()
    }

    /// Per-document diagnostics to fix, as reported by the provider.
    pub fn document_diagnostics_to_fix(&self) -> Result<DocumentDiagnosticMap, Cancelled> {
        self.cancel.check()?;
        self.provider.document_diagnostics_to_fix(self)
    }

    /// Per-project diagnostics to fix, as reported by the provider.
    pub fn project_diagnostics_to_fix(&self) -> Result<ProjectDiagnosticMap, Cancelled> {
        self.cancel.check()?;
        self.provider.project_diagnostics_to_fix(self)
    }

    /// Diagnostics in `document` whose id is being fixed.
    pub fn document_diagnostics(
        &self,
        document: DocumentId,
    ) -> Result<Vec<Diagnostic>, Cancelled> {
        self.cancel.check()?;
        let diagnostics = self.provider.document_diagnostics(document, &self.cancel)?;
        Ok(self.filter(diagnostics.iter()))
    }

    /// Project-level diagnostics for `project` whose id is being fixed.
    pub fn project_diagnostics(
        &self,
        project: ProjectId,
    ) -> Result<Vec<Diagnostic>, Cancelled> {
        self.cancel.check()?;
        let diagnostics = self.provider.project_diagnostics(project, &self.cancel)?;
        Ok(self.filter(diagnostics.iter()))
    }

    /// All diagnostics for `project` whose id is being fixed.
    pub fn all_diagnostics(&self, project: &Project) -> Result<Vec<Diagnostic>, Cancelled> {
        self.cancel.check()?;
        let diagnostics = self.provider.all_diagnostics(project, &self.cancel)?;
        Ok(self.filter(diagnostics.iter()))
    }

    fn filter<'a>(
        &self,
        diagnostics: impl Iterator<Item = &'a Diagnostic>,
    ) -> Vec<Diagnostic> {
        diagnostics
            .filter(|diagnostic| self.diagnostic_ids.contains(&diagnostic.id))
            .cloned()
            .collect()
    }
}

impl fmt::Debug for FixAllContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixAllContext")
            .field("scope", &self.scope)
            .field("project", &self.project.id())
            .field("document", &self.document)
            .field("diagnostic_ids", &self.diagnostic_ids)
            .field("fix_multiple", &self.provider.is_fix_multiple())
            .finish_non_exhaustive()
    }
}

//! Provider over a pre-collected diagnostic set.
//!
//! Used when the user picks several diagnostics (e.g. in an error list)
//! and asks to fix them in one batch. The set is known up front, so no
//! query here re-runs analysis.

use std::sync::Arc;

use lode_ir::{CancellationToken, Cancelled, DocumentId, Project, ProjectId};
use tracing::{debug, trace};

use super::{DiagnosticProvider, DocumentDiagnosticMap, FixAllContext, ProjectDiagnosticMap};
use crate::Diagnostic;

/// Read-only [`DiagnosticProvider`] over exactly one populated map.
///
/// Constructed either by document or by project; the other map is empty
/// for the provider's whole lifetime. Cancellation tokens are accepted for
/// signature parity with live providers but never polled: every answer is
/// a lookup into data that already exists.
#[derive(Clone, Debug)]
pub struct FixMultipleDiagnosticProvider {
    document_diagnostics: DocumentDiagnosticMap,
    project_diagnostics: ProjectDiagnosticMap,
}

impl FixMultipleDiagnosticProvider {
    /// Provider over diagnostics grouped by document.
    pub fn for_documents(diagnostics: DocumentDiagnosticMap) -> Self {
        debug!(
            documents = diagnostics.len(),
            diagnostics = diagnostics.diagnostic_count(),
            "fix-multiple provider over documents"
        );
        FixMultipleDiagnosticProvider {
            document_diagnostics: diagnostics,
            project_diagnostics: ProjectDiagnosticMap::empty(),
        }
    }

    /// Provider over diagnostics grouped by project.
    pub fn for_projects(diagnostics: ProjectDiagnosticMap) -> Self {
        debug!(
            projects = diagnostics.len(),
            diagnostics = diagnostics.diagnostic_count(),
            "fix-multiple provider over projects"
        );
        FixMultipleDiagnosticProvider {
            document_diagnostics: DocumentDiagnosticMap::empty(),
            project_diagnostics: diagnostics,
        }
    }

    pub fn document_map(&self) -> &DocumentDiagnosticMap {
        &self.document_diagnostics
    }

    pub fn project_map(&self) -> &ProjectDiagnosticMap {
        &self.project_diagnostics
    }
}

impl DiagnosticProvider for FixMultipleDiagnosticProvider {
    fn is_fix_multiple(&self) -> bool {
        true
    }

    fn document_diagnostics_to_fix(
        &self,
        _context: &FixAllContext,
    ) -> Result<DocumentDiagnosticMap, Cancelled> {
        Ok(self.document_diagnostics.clone())
    }

    fn project_diagnostics_to_fix(
        &self,
        _context: &FixAllContext,
    ) -> Result<ProjectDiagnosticMap, Cancelled> {
        Ok(self.project_diagnostics.clone())
    }

    fn all_diagnostics(
        &self,
        project: &Project,
        _cancel: &CancellationToken,
    ) -> Result<Vec<Diagnostic>, Cancelled> {
        let mut all = Vec::new();
        if !self.document_diagnostics.is_empty() {
            for document in project.documents() {
                all.extend_from_slice(self.document_diagnostics.get(document));
            }
        }
        all.extend_from_slice(self.project_diagnostics.get(&project.id()));

        trace!(project = ?project.id(), count = all.len(), "all diagnostics");
        Ok(all)
    }

    fn document_diagnostics(
        &self,
        document: DocumentId,
        _cancel: &CancellationToken,
    ) -> Result<Arc<[Diagnostic]>, Cancelled> {
        Ok(self
            .document_diagnostics
            .entry(&document)
            .map_or_else(|| Arc::from(Vec::new()), Arc::clone))
    }

    fn project_diagnostics(
        &self,
        project: ProjectId,
        _cancel: &CancellationToken,
    ) -> Result<Arc<[Diagnostic]>, Cancelled> {
        Ok(self
            .project_diagnostics
            .entry(&project)
            .map_or_else(|| Arc::from(Vec::new()), Arc::clone))
    }
}

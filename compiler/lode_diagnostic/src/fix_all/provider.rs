//! The diagnostic provider seam used by fix-all operations.

use std::sync::Arc;

use lode_ir::{CancellationToken, Cancelled, DocumentId, Project, ProjectId};

use super::{DocumentDiagnosticMap, FixAllContext, ProjectDiagnosticMap};
use crate::Diagnostic;

/// Supplies the diagnostics a fix-all operation should fix.
///
/// A live provider recomputes diagnostics through the analysis engine;
/// [`FixMultipleDiagnosticProvider`](super::FixMultipleDiagnosticProvider)
/// answers from a set collected up front. Every query takes a
/// cancellation token so the two are interchangeable.
pub trait DiagnosticProvider: Send + Sync {
    /// `true` for providers backed by a pre-collected diagnostic set.
    fn is_fix_multiple(&self) -> bool {
        false
    }

    /// Diagnostics to fix, grouped by document, for `context`.
    fn document_diagnostics_to_fix(
        &self,
        context: &FixAllContext,
    ) -> Result<DocumentDiagnosticMap, Cancelled>;

    /// Diagnostics to fix, grouped by project, for `context`.
    fn project_diagnostics_to_fix(
        &self,
        context: &FixAllContext,
    ) -> Result<ProjectDiagnosticMap, Cancelled>;

    /// Every diagnostic for `project`: its documents' diagnostics in the
    /// project's document order, then the project-level ones.
    fn all_diagnostics(
        &self,
        project: &Project,
        cancel: &CancellationToken,
    ) -> Result<Vec<Diagnostic>, Cancelled>;

    /// Diagnostics reported in `document`.
    fn document_diagnostics(
        &self,
        document: DocumentId,
        cancel: &CancellationToken,
    ) -> Result<Arc<[Diagnostic]>, Cancelled>;

    /// Project-level diagnostics (not tied to a document) for `project`.
    fn project_diagnostics(
        &self,
        project: ProjectId,
        cancel: &CancellationToken,
    ) -> Result<Arc<[Diagnostic]>, Cancelled>;
}

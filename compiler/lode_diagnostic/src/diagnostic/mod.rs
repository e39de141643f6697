//! Core diagnostic types.
//!
//! Defines [`Diagnostic`], [`DiagnosticId`], [`Location`], and [`Severity`].
//! Diagnostics are produced by analyzers outside this crate; here they are
//! plain immutable values that fix-all machinery groups and hands back.

use std::fmt;

use lode_ir::{DocumentId, ProjectId, Span};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Not shown to the user; only drives code fixes and refactorings.
    Hidden,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Hidden => write!(f, "hidden"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Identifier of the rule that reported a diagnostic (e.g. `IDE0050`).
///
/// Code fixes and fix-all operations select diagnostics by id.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticId(String);

impl DiagnosticId {
    pub fn new(id: impl Into<String>) -> Self {
        DiagnosticId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiagnosticId {
    fn from(id: &str) -> Self {
        DiagnosticId::new(id)
    }
}

/// Where a diagnostic applies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// Not tied to any source (e.g. a workspace-level configuration issue).
    #[default]
    None,
    /// A span within a document.
    Document { document: DocumentId, span: Span },
    /// A project as a whole (e.g. a missing reference).
    Project(ProjectId),
}

/// One reported issue.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Rule identifier.
    pub id: DiagnosticId,
    /// Severity level.
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// Where the issue was reported.
    pub location: Location,
}

impl Diagnostic {
    /// Create a diagnostic with no message or location yet.
    pub fn new(id: impl Into<DiagnosticId>, severity: Severity) -> Self {
        Diagnostic {
            id: id.into(),
            severity,
            message: String::new(),
            location: Location::None,
        }
    }

    pub fn hidden(id: impl Into<DiagnosticId>) -> Self {
        Self::new(id, Severity::Hidden)
    }

    pub fn warning(id: impl Into<DiagnosticId>) -> Self {
        Self::new(id, Severity::Warning)
    }

    pub fn error(id: impl Into<DiagnosticId>) -> Self {
        Self::new(id, Severity::Error)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Place the diagnostic at `span` in `document`.
    pub fn in_document(mut self, document: DocumentId, span: Span) -> Self {
        self.location = Location::Document { document, span };
        self
    }

    /// Attach the diagnostic to a project as a whole.
    pub fn in_project(mut self, project: ProjectId) -> Self {
        self.location = Location::Project(project);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The document this diagnostic was reported in, if any.
    pub fn document(&self) -> Option<DocumentId> {
        match self.location {
            Location::Document { document, .. } => Some(document),
            Location::None | Location::Project(_) => None,
        }
    }

    /// The source span, for document diagnostics.
    pub fn span(&self) -> Option<Span> {
        match self.location {
            Location::Document { span, .. } => Some(span),
            Location::None | Location::Project(_) => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

#[cfg(test)]
mod tests;

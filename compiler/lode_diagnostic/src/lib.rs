//! Diagnostics for the Lode analysis platform.
//!
//! - [`Diagnostic`]: an immutable reported issue, with rule id, severity,
//!   message, and location
//! - [`fix_all`]: the provider seam through which fix-all operations
//!   obtain the diagnostics they fix, including the read-only
//!   fix-multiple provider over a pre-collected set
//!
//! Diagnostics are computed by analyzers elsewhere; nothing in this crate
//! runs analysis.

mod diagnostic;
pub mod fix_all;

pub use diagnostic::{Diagnostic, DiagnosticId, Location, Severity};
pub use fix_all::{
    DiagnosticMap, DiagnosticProvider, DocumentDiagnosticMap, FixAllContext, FixAllScope,
    FixAllState, FixMultipleDiagnosticProvider, ProjectDiagnosticMap,
};

//! Fix-all support.
//!
//! A fix-all operation applies one code fix to many diagnostics at once.
//! It asks a [`DiagnosticProvider`] which diagnostics to fix:
//! - live providers recompute them for a [`FixAllScope`]
//! - [`FixMultipleDiagnosticProvider`] answers from diagnostics the user
//!   already picked, without running analysis again
//!
//! [`FixAllState`] describes one request; [`FixAllContext`] is what the
//! fix-all engine holds while running it.

mod context;
mod fix_multiple;
mod map;
mod provider;
mod state;

pub use context::{FixAllContext, FixAllScope};
pub use fix_multiple::FixMultipleDiagnosticProvider;
pub use map::{DiagnosticMap, DocumentDiagnosticMap, ProjectDiagnosticMap};
pub use provider::DiagnosticProvider;
pub use state::FixAllState;

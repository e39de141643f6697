//! Lode IR - syntax and workspace snapshot types
//!
//! This crate contains the data structures the analysis services work on:
//! - Spans for source locations
//! - `SyntaxKind`, a closed tag for every token and node
//! - `SyntaxTree`, an arena of immutable nodes and tokens with parent
//!   back-references, and `TreeBuilder` to construct one
//! - `Document` and `Project` snapshots
//! - `CancellationToken` shared by all queries
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes refer to each other by `NodeId(u32)`,
//!   never by owning pointers; parent links are plain indices
//! - **Immutable Snapshots**: nothing is mutated after construction, so
//!   concurrent readers need no coordination

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod builder;
mod cancel;
mod document;
mod kind;
mod span;
mod tree;

pub use builder::{BuildError, TreeBuilder};
pub use cancel::{CancellationToken, Cancelled};
pub use document::{Document, DocumentId, Project, ProjectId};
pub use kind::SyntaxKind;
pub use span::{Span, SpanError};
pub use tree::{
    Ancestors, NodeId, SyntaxElement, SyntaxNode, SyntaxNodeOrToken, SyntaxToken, SyntaxTree,
    TokenAtOffset, TokenId,
};

//! Lode Refactor - selection resolution for refactorings and code fixes
//!
//! Refactorings and code fixes operate on a syntax node. This crate turns
//! the editor's selection (a caret or a range) into that node:
//! - [`trim_selection`] strips surrounding whitespace from a selection
//! - [`SelectionResolver`] walks the tree from the selection outward and
//!   returns the first node a caller's predicate accepts
//! - [`extract`] holds redirection rules applied to each candidate before
//!   the predicate, such as
//!   [`extract_node_from_declaration_and_assignment`]
//!
//! Resolution is a synchronous read-only query over an immutable
//! [`Document`](lode_ir::Document); concurrent callers need no
//! coordination.

pub mod extract;
mod logging;
mod resolver;
mod selection;

#[cfg(test)]
mod fixtures;

pub use extract::{extract_node_from_declaration_and_assignment, identity};
pub use logging::{init_tracing, log_subscriber, LOG_ENV};
pub use resolver::{
    try_get_selected_node, try_get_selected_node_of_kind, try_get_selected_node_of_kind_with,
    ResolverOptions, SelectionResolver, TouchPreference,
};
pub use selection::trim_selection;

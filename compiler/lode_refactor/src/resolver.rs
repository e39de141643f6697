//! Selection resolution.
//!
//! Maps an editor selection onto the syntax node a refactoring or code fix
//! should operate on. Every candidate is first passed through the caller's
//! extraction rule; the extracted node is what the predicate sees and what
//! is returned.
//!
//! # Resolution order
//!
//! The selection is trimmed of surrounding whitespace first. Then:
//!
//! - **Caret**: the tokens touching the caret are the anchors (the token
//!   containing it, or the two tokens meeting at it, ordered by
//!   [`TouchPreference`]). Each anchor's direct parent is tried, together
//!   with the further ancestors that start or end exactly at the caret.
//!   Only then are the anchors' full ancestor chains walked, in the same
//!   order. A caret inside trivia starts from the node covering it.
//! - **Range**: the smallest node covering the selection is tried, then its
//!   ancestors. A selection that is exactly a node's span therefore yields
//!   that node before any larger one.
//!
//! Each walk ends at the root. A node is inspected at most once.

use lode_ir::{
    CancellationToken, Cancelled, Document, NodeId, Span, SyntaxKind, SyntaxNode, SyntaxToken,
    SyntaxTree, TokenAtOffset,
};
use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::{identity, trim_selection};

/// Which token anchors a caret sitting between two tokens.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TouchPreference {
    /// The token starting at the caret is tried first.
    #[default]
    PreferRight,
    /// The token ending at the caret is tried first.
    PreferLeft,
}

/// Configuration for selection resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverOptions {
    /// Anchor order when a caret touches two tokens.
    pub touch_preference: TouchPreference,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            touch_preference: TouchPreference::PreferRight,
        }
    }
}

/// Resolves selections to syntax nodes.
#[derive(Clone, Debug, Default)]
pub struct SelectionResolver {
    options: ResolverOptions,
}

impl SelectionResolver {
    pub fn new(options: ResolverOptions) -> Self {
        SelectionResolver { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// The node selected by `selection`, after `extract`, that `predicate`
    /// accepts.
    ///
    /// `Ok(None)` means no node on the walk was accepted. The only error
    /// is cancellation, checked before resolution starts.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(document = document.id().raw(), selection = %selection)
    )]
    pub fn resolve<'a>(
        &self,
        document: &'a Document,
        selection: Span,
        extract: impl Fn(SyntaxNode<'a>) -> SyntaxNode<'a>,
        predicate: impl Fn(SyntaxNode<'a>) -> bool,
        cancel: &CancellationToken,
    ) -> Result<Option<SyntaxNode<'a>>, Cancelled> {
        cancel.check()?;

        let tree = document.tree();
        let trimmed = trim_selection(document.text(), selection);
        let mut search = Search {
            extract: &extract,
            predicate: &predicate,
            seen: FxHashSet::default(),
        };

        let found = if trimmed.is_empty() {
            self.resolve_caret(tree, trimmed.start, &mut search)
        } else {
            search.walk(tree.covering_node(trimmed).ancestors_and_self())
        };

        match found {
            Some(node) => debug!(?node, %trimmed, "selected node"),
            None => debug!(%trimmed, inspected = search.seen.len(), "no selected node"),
        }
        Ok(found)
    }

    /// The selected node whose kind is one of `kinds`.
    pub fn resolve_kind<'a>(
        &self,
        document: &'a Document,
        selection: Span,
        kinds: &[SyntaxKind],
        cancel: &CancellationToken,
    ) -> Result<Option<SyntaxNode<'a>>, Cancelled> {
        self.resolve_kind_with(document, selection, kinds, identity, cancel)
    }

    /// The selected node, after `extract`, whose kind is one of `kinds`.
    pub fn resolve_kind_with<'a>(
        &self,
        document: &'a Document,
        selection: Span,
        kinds: &[SyntaxKind],
        extract: impl Fn(SyntaxNode<'a>) -> SyntaxNode<'a>,
        cancel: &CancellationToken,
    ) -> Result<Option<SyntaxNode<'a>>, Cancelled> {
        self.resolve(
            document,
            selection,
            extract,
            |node| kinds.contains(&node.kind()),
            cancel,
        )
    }

    fn resolve_caret<'a>(
        &self,
        tree: &'a SyntaxTree,
        offset: u32,
        search: &mut Search<'_, 'a>,
    ) -> Option<SyntaxNode<'a>> {
        let anchors = self.anchors(tree.token_at_offset(offset));
        if anchors.is_empty() {
            trace!(offset, "caret in trivia");
            return search.walk(tree.covering_node(Span::point(offset)).ancestors_and_self());
        }

        // Direct parents, extended by ancestors flush with the caret.
        for token in &anchors {
            let mut ancestors = token.ancestors();
            let parent = ancestors.next();
            let flush = ancestors.take_while(|node| node.span().is_boundary(offset));
            if let Some(found) = search.walk(parent.into_iter().chain(flush)) {
                return Some(found);
            }
        }

        for token in &anchors {
            if let Some(found) = search.walk(token.ancestors()) {
                return Some(found);
            }
        }
        None
    }

    fn anchors<'a>(&self, at: TokenAtOffset<'a>) -> SmallVec<[SyntaxToken<'a>; 2]> {
        match at {
            TokenAtOffset::None => SmallVec::new(),
            TokenAtOffset::Single(token) => smallvec![token],
            TokenAtOffset::Between(left, right) => match self.options.touch_preference {
                TouchPreference::PreferRight => smallvec![right, left],
                TouchPreference::PreferLeft => smallvec![left, right],
            },
        }
    }
}

/// Walk state shared by every phase of one resolution.
struct Search<'f, 'a> {
    extract: &'f dyn Fn(SyntaxNode<'a>) -> SyntaxNode<'a>,
    predicate: &'f dyn Fn(SyntaxNode<'a>) -> bool,
    seen: FxHashSet<NodeId>,
}

impl<'a> Search<'_, 'a> {
    fn walk(&mut self, mut nodes: impl Iterator<Item = SyntaxNode<'a>>) -> Option<SyntaxNode<'a>> {
        nodes.find_map(|node| self.inspect(node))
    }

    fn inspect(&mut self, node: SyntaxNode<'a>) -> Option<SyntaxNode<'a>> {
        if !self.seen.insert(node.id()) {
            return None;
        }
        let candidate = (self.extract)(node);
        let accepted = (self.predicate)(candidate);
        trace!(?node, ?candidate, accepted, "inspect");
        accepted.then_some(candidate)
    }
}

/// Resolve `selection` with the default [`ResolverOptions`].
///
/// See [`SelectionResolver::resolve`].
pub fn try_get_selected_node<'a>(
    document: &'a Document,
    selection: Span,
    extract: impl Fn(SyntaxNode<'a>) -> SyntaxNode<'a>,
    predicate: impl Fn(SyntaxNode<'a>) -> bool,
    cancel: &CancellationToken,
) -> Result<Option<SyntaxNode<'a>>, Cancelled> {
    SelectionResolver::default().resolve(document, selection, extract, predicate, cancel)
}

/// The selected node whose kind is one of `kinds`, without extraction.
pub fn try_get_selected_node_of_kind<'a>(
    document: &'a Document,
    selection: Span,
    kinds: &[SyntaxKind],
    cancel: &CancellationToken,
) -> Result<Option<SyntaxNode<'a>>, Cancelled> {
    SelectionResolver::default().resolve_kind(document, selection, kinds, cancel)
}

/// The selected node, after `extract`, whose kind is one of `kinds`.
pub fn try_get_selected_node_of_kind_with<'a>(
    document: &'a Document,
    selection: Span,
    kinds: &[SyntaxKind],
    extract: impl Fn(SyntaxNode<'a>) -> SyntaxNode<'a>,
    cancel: &CancellationToken,
) -> Result<Option<SyntaxNode<'a>>, Cancelled> {
    SelectionResolver::default().resolve_kind_with(document, selection, kinds, extract, cancel)
}

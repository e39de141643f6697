//! Immutable syntax trees.
//!
//! Nodes and tokens live in two flat arenas owned by [`SyntaxTree`] and are
//! addressed by [`NodeId`] / [`TokenId`]. Each node owns its ordered child
//! handles; the parent handle is a plain back-reference used for upward
//! traversal only. Nothing is mutated after [`TreeBuilder`](crate::TreeBuilder)
//! hands the tree out.
//!
//! Tokens are stored in document order, which makes offset lookup a binary
//! search.

use std::fmt;

use smallvec::SmallVec;

use crate::{Span, SyntaxKind};

/// Index into the node arena of a [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The root is always the first node started.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Index into the token arena of a [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TokenId(u32);

impl TokenId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        TokenId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}

/// Child handle: either a nested node or a token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SyntaxElement {
    Node(NodeId),
    Token(TokenId),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[SyntaxElement; 4]>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TokenData {
    pub(crate) kind: SyntaxKind,
    pub(crate) span: Span,
    pub(crate) parent: NodeId,
}

/// Arena-backed immutable syntax tree.
///
/// Construct with [`TreeBuilder`](crate::TreeBuilder); inspect through the
/// borrowed [`SyntaxNode`] and [`SyntaxToken`] views.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    tokens: Vec<TokenData>,
}

impl SyntaxTree {
    /// Builder invariant: `nodes` is non-empty, `nodes[0]` is the only
    /// parentless node, and `tokens` is sorted by non-overlapping span.
    pub(crate) fn from_parts(nodes: Vec<NodeData>, tokens: Vec<TokenData>) -> Self {
        debug_assert!(!nodes.is_empty());
        SyntaxTree { nodes, tokens }
    }

    #[inline]
    pub fn root(&self) -> SyntaxNode<'_> {
        self.node(NodeId::ROOT)
    }

    /// View a node by handle.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> SyntaxNode<'_> {
        assert!(id.index() < self.nodes.len(), "{id:?} is not in this tree");
        SyntaxNode { tree: self, id }
    }

    /// View a token by handle.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[inline]
    pub fn token(&self, id: TokenId) -> SyntaxToken<'_> {
        assert!(id.index() < self.tokens.len(), "{id:?} is not in this tree");
        SyntaxToken { tree: self, id }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = SyntaxToken<'_>> + '_ {
        (0..self.tokens.len()).map(move |index| SyntaxToken {
            tree: self,
            id: TokenId(index as u32),
        })
    }

    /// Find the token(s) at `offset`.
    ///
    /// A token that contains the offset or starts at it is returned alone,
    /// unless another token ends exactly at the offset, in which case both
    /// are returned as `Between(left, right)`. A token that only ends at
    /// the offset is returned as `Single`.
    pub fn token_at_offset(&self, offset: u32) -> TokenAtOffset<'_> {
        let index = self.tokens.partition_point(|t| t.span.end < offset);
        let Some(first) = self.tokens.get(index) else {
            return TokenAtOffset::None;
        };
        if first.span.start > offset {
            return TokenAtOffset::None;
        }

        let first_view = self.token(TokenId(index as u32));
        if first.span.end != offset {
            return TokenAtOffset::Single(first_view);
        }

        // `first` ends at the offset; look for a neighbour starting there.
        match self.tokens.get(index + 1) {
            Some(next) if next.span.start == offset => TokenAtOffset::Between(
                first_view,
                self.token(TokenId(index as u32 + 1)),
            ),
            _ => TokenAtOffset::Single(first_view),
        }
    }

    /// Smallest node whose span fully contains `span`.
    ///
    /// Falls back to the root when the root itself does not contain `span`.
    pub fn covering_node(&self, span: Span) -> SyntaxNode<'_> {
        let mut current = self.root();
        'descend: loop {
            for child in current.child_nodes() {
                if child.span().contains_span(span) {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    #[inline]
    fn node_data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    #[inline]
    fn token_data(&self, id: TokenId) -> &TokenData {
        &self.tokens[id.index()]
    }
}

/// Result of [`SyntaxTree::token_at_offset`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenAtOffset<'a> {
    None,
    Single(SyntaxToken<'a>),
    /// The offset sits between a token ending there and one starting there.
    Between(SyntaxToken<'a>, SyntaxToken<'a>),
}

impl<'a> TokenAtOffset<'a> {
    /// Token to the left of a boundary, or the single token.
    pub fn left_biased(self) -> Option<SyntaxToken<'a>> {
        match self {
            TokenAtOffset::None => None,
            TokenAtOffset::Single(token) | TokenAtOffset::Between(token, _) => Some(token),
        }
    }

    /// Token to the right of a boundary, or the single token.
    pub fn right_biased(self) -> Option<SyntaxToken<'a>> {
        match self {
            TokenAtOffset::None => None,
            TokenAtOffset::Single(token) | TokenAtOffset::Between(_, token) => Some(token),
        }
    }
}

/// Borrowed view of a node.
#[derive(Copy, Clone)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> SyntaxNode<'a> {
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn tree(self) -> &'a SyntaxTree {
        self.tree
    }

    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.tree.node_data(self.id).kind
    }

    #[inline]
    pub fn span(self) -> Span {
        self.tree.node_data(self.id).span
    }

    pub fn parent(self) -> Option<SyntaxNode<'a>> {
        self.tree
            .node_data(self.id)
            .parent
            .map(|id| SyntaxNode { tree: self.tree, id })
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self.tree.node_data(self.id).parent.is_none()
    }

    /// Ancestors from the parent outward. The root is the last item.
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors {
            tree: self.tree,
            next: self.tree.node_data(self.id).parent,
        }
    }

    /// This node followed by its ancestors.
    pub fn ancestors_and_self(self) -> Ancestors<'a> {
        Ancestors {
            tree: self.tree,
            next: Some(self.id),
        }
    }

    pub fn children(self) -> impl Iterator<Item = SyntaxNodeOrToken<'a>> + 'a {
        let tree = self.tree;
        tree.node_data(self.id)
            .children
            .iter()
            .map(move |&element| match element {
                SyntaxElement::Node(id) => SyntaxNodeOrToken::Node(SyntaxNode { tree, id }),
                SyntaxElement::Token(id) => SyntaxNodeOrToken::Token(SyntaxToken { tree, id }),
            })
    }

    pub fn child_nodes(self) -> impl Iterator<Item = SyntaxNode<'a>> + 'a {
        self.children().filter_map(SyntaxNodeOrToken::into_node)
    }

    pub fn child_tokens(self) -> impl Iterator<Item = SyntaxToken<'a>> + 'a {
        self.children().filter_map(SyntaxNodeOrToken::into_token)
    }

    /// First direct child node of `kind`.
    pub fn child_of_kind(self, kind: SyntaxKind) -> Option<SyntaxNode<'a>> {
        self.child_nodes().find(|child| child.kind() == kind)
    }

    pub fn first_token(self) -> Option<SyntaxToken<'a>> {
        self.children().find_map(|child| match child {
            SyntaxNodeOrToken::Token(token) => Some(token),
            SyntaxNodeOrToken::Node(node) => node.first_token(),
        })
    }

    pub fn last_token(self) -> Option<SyntaxToken<'a>> {
        let children: SmallVec<[SyntaxNodeOrToken<'a>; 8]> = self.children().collect();
        children.into_iter().rev().find_map(|child| match child {
            SyntaxNodeOrToken::Token(token) => Some(token),
            SyntaxNodeOrToken::Node(node) => node.last_token(),
        })
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.span())
    }
}

/// Borrowed view of a token.
#[derive(Copy, Clone)]
pub struct SyntaxToken<'a> {
    tree: &'a SyntaxTree,
    id: TokenId,
}

impl<'a> SyntaxToken<'a> {
    #[inline]
    pub fn id(self) -> TokenId {
        self.id
    }

    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.tree.token_data(self.id).kind
    }

    #[inline]
    pub fn span(self) -> Span {
        self.tree.token_data(self.id).span
    }

    /// Every token has exactly one direct parent node.
    #[inline]
    pub fn parent(self) -> SyntaxNode<'a> {
        SyntaxNode {
            tree: self.tree,
            id: self.tree.token_data(self.id).parent,
        }
    }

    /// Ancestors starting with the direct parent.
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors {
            tree: self.tree,
            next: Some(self.tree.token_data(self.id).parent),
        }
    }
}

impl PartialEq for SyntaxToken<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxToken<'_> {}

impl fmt::Debug for SyntaxToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.span())
    }
}

/// A child element view.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SyntaxNodeOrToken<'a> {
    Node(SyntaxNode<'a>),
    Token(SyntaxToken<'a>),
}

impl<'a> SyntaxNodeOrToken<'a> {
    pub fn kind(self) -> SyntaxKind {
        match self {
            SyntaxNodeOrToken::Node(node) => node.kind(),
            SyntaxNodeOrToken::Token(token) => token.kind(),
        }
    }

    pub fn span(self) -> Span {
        match self {
            SyntaxNodeOrToken::Node(node) => node.span(),
            SyntaxNodeOrToken::Token(token) => token.span(),
        }
    }

    pub fn into_node(self) -> Option<SyntaxNode<'a>> {
        match self {
            SyntaxNodeOrToken::Node(node) => Some(node),
            SyntaxNodeOrToken::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<SyntaxToken<'a>> {
        match self {
            SyntaxNodeOrToken::Token(token) => Some(token),
            SyntaxNodeOrToken::Node(_) => None,
        }
    }
}

/// Upward walk over parent back-references. Ends after the root.
#[derive(Clone)]
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = SyntaxNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.node_data(id).parent;
        Some(SyntaxNode {
            tree: self.tree,
            id,
        })
    }
}

impl std::iter::FusedIterator for Ancestors<'_> {}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NodeId, SyntaxElement, TokenId};
    crate::static_assert_size!(NodeId, 4);
    crate::static_assert_size!(TokenId, 4);
    crate::static_assert_size!(SyntaxElement, 8);
}

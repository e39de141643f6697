//! Tree construction.
//!
//! An external parser (or a test) describes an already-parsed tree as a
//! sequence of `start_node` / `token` / `trivia` / `finish_node` events.
//! The builder accumulates the source text alongside, so the offsets of
//! the resulting tree always agree with the text it is paired with.

use smallvec::SmallVec;

use crate::tree::{NodeData, SyntaxElement, TokenData};
use crate::{NodeId, Span, SpanError, SyntaxKind, SyntaxTree, TokenId};

/// Misuse of the [`TreeBuilder`] event protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("`finish_node` called with no open node")]
    UnbalancedFinish,
    #[error("{0} node(s) still open when the tree was finished")]
    UnclosedNodes(usize),
    #[error("no root node was started")]
    NoRoot,
    #[error("a second root node was started after the first was finished")]
    MultipleRoots,
    #[error("token or trivia emitted outside of any node")]
    ElementOutsideNode,
    #[error("`{0}` is a node kind, not a token kind")]
    NotATokenKind(SyntaxKind),
    #[error("`{0}` is a token kind, not a node kind")]
    NotANodeKind(SyntaxKind),
    #[error("token of kind `{0}` has empty text")]
    EmptyToken(SyntaxKind),
    #[error("source text too large: {0}")]
    SourceTooLarge(#[from] SpanError),
}

/// Event-driven builder for [`SyntaxTree`].
///
/// Errors are sticky: the first protocol violation is remembered and
/// reported by [`TreeBuilder::finish`], so call sites can chain events
/// without checking each one.
///
/// ```text
/// let mut b = TreeBuilder::new();
/// b.start_node(SyntaxKind::ExpressionStatement);
/// b.start_node(SyntaxKind::IdentifierName);
/// b.token(SyntaxKind::Ident, "x");
/// b.finish_node();
/// b.token(SyntaxKind::Semicolon, ";");
/// b.finish_node();
/// let (text, tree) = b.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    text: String,
    nodes: Vec<NodeData>,
    tokens: Vec<TokenData>,
    /// Open nodes, innermost last, with the offset at which each started.
    open: Vec<(NodeId, u32)>,
    root_finished: bool,
    error: Option<BuildError>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a node. The first node opened becomes the root.
    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if !kind.is_node() {
            return self.fail(BuildError::NotANodeKind(kind));
        }
        if self.root_finished {
            return self.fail(BuildError::MultipleRoots);
        }
        let offset = match self.offset() {
            Ok(offset) => offset,
            Err(e) => return self.fail(e.into()),
        };

        let id = NodeId::new(self.nodes.len() as u32);
        let parent = self.open.last().map(|&(parent, _)| parent);
        if let Some(parent) = parent {
            self.nodes[parent.index()]
                .children
                .push(SyntaxElement::Node(id));
        }
        self.nodes.push(NodeData {
            kind,
            span: Span::point(offset),
            parent,
            children: SmallVec::new(),
        });
        self.open.push((id, offset));
        self
    }

    /// Append a token to the innermost open node.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if !kind.is_token() {
            return self.fail(BuildError::NotATokenKind(kind));
        }
        if text.is_empty() {
            return self.fail(BuildError::EmptyToken(kind));
        }
        let Some(&(parent, _)) = self.open.last() else {
            return self.fail(BuildError::ElementOutsideNode);
        };

        let start = self.text.len();
        self.text.push_str(text);
        let span = match Span::try_from_range(start..self.text.len()) {
            Ok(span) => span,
            Err(e) => return self.fail(e.into()),
        };

        let id = TokenId::new(self.tokens.len() as u32);
        self.tokens.push(TokenData { kind, span, parent });
        self.nodes[parent.index()]
            .children
            .push(SyntaxElement::Token(id));
        self
    }

    /// Append whitespace or comments. Trivia advances offsets but is not
    /// part of any node or token span.
    pub fn trivia(&mut self, text: &str) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if self.open.is_empty() {
            return self.fail(BuildError::ElementOutsideNode);
        }
        self.text.push_str(text);
        self
    }

    /// Close the innermost open node and fix its span.
    pub fn finish_node(&mut self) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let Some((id, started_at)) = self.open.pop() else {
            return self.fail(BuildError::UnbalancedFinish);
        };

        let data = &self.nodes[id.index()];
        let mut covered: Option<Span> = None;
        for child in &data.children {
            let span = match *child {
                SyntaxElement::Node(node) => self.nodes[node.index()].span,
                SyntaxElement::Token(token) => self.tokens[token.index()].span,
            };
            covered = Some(covered.map_or(span, |acc| acc.merge(span)));
        }
        self.nodes[id.index()].span = covered.unwrap_or(Span::point(started_at));

        if self.open.is_empty() {
            self.root_finished = true;
        }
        self
    }

    /// Finish building, returning the accumulated text and the tree.
    pub fn finish(self) -> Result<(String, SyntaxTree), BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.open.is_empty() {
            return Err(BuildError::UnclosedNodes(self.open.len()));
        }
        if self.nodes.is_empty() {
            return Err(BuildError::NoRoot);
        }
        Ok((self.text, SyntaxTree::from_parts(self.nodes, self.tokens)))
    }

    fn offset(&self) -> Result<u32, SpanError> {
        u32::try_from(self.text.len()).map_err(|_| SpanError::StartTooLarge(self.text.len()))
    }

    fn fail(&mut self, error: BuildError) -> &mut Self {
        self.error.get_or_insert(error);
        self
    }
}

#[cfg(test)]
mod tests;

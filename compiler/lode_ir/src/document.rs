//! Document and project snapshots.
//!
//! Both are immutable values handed to analysis code by the host
//! workspace. Cloning is cheap: text and tree are shared.

use std::fmt;
use std::sync::Arc;

use crate::{BuildError, Span, SyntaxTree, TreeBuilder};

/// Stable identifier of a document within a workspace.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DocumentId(u32);

impl DocumentId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        DocumentId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

/// Stable identifier of a project within a workspace.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ProjectId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectId({})", self.0)
    }
}

/// Source text paired with its syntax tree.
#[derive(Clone, Debug)]
pub struct Document {
    id: DocumentId,
    text: Arc<str>,
    tree: Arc<SyntaxTree>,
}

impl Document {
    /// Pair text with a tree built for it.
    ///
    /// The caller guarantees the tree's offsets refer to `text`.
    pub fn new(id: DocumentId, text: impl Into<Arc<str>>, tree: impl Into<Arc<SyntaxTree>>) -> Self {
        Document {
            id,
            text: text.into(),
            tree: tree.into(),
        }
    }

    /// Build the tree and text together through a [`TreeBuilder`].
    pub fn build(
        id: DocumentId,
        events: impl FnOnce(&mut TreeBuilder),
    ) -> Result<Self, BuildError> {
        let mut builder = TreeBuilder::new();
        events(&mut builder);
        let (text, tree) = builder.finish()?;
        Ok(Document::new(id, text, tree))
    }

    #[inline]
    pub fn id(&self) -> DocumentId {
        self.id
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Text covered by `span`, or `None` if the span is out of bounds or
    /// splits a character.
    pub fn text_of(&self, span: Span) -> Option<&str> {
        self.text.get(span.to_range())
    }
}

/// A project: a named, ordered set of documents.
///
/// Document order is the project's canonical enumeration order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    id: ProjectId,
    name: Arc<str>,
    documents: Arc<[DocumentId]>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        name: impl Into<Arc<str>>,
        documents: impl IntoIterator<Item = DocumentId>,
    ) -> Self {
        Project {
            id,
            name: name.into(),
            documents: documents.into_iter().collect(),
        }
    }

    #[inline]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documents in canonical order.
    #[inline]
    pub fn documents(&self) -> &[DocumentId] {
        &self.documents
    }

    pub fn contains(&self, document: DocumentId) -> bool {
        self.documents.contains(&document)
    }
}

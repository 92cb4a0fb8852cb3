//! # Document Model: An Owned, Read-Only Markup Tree
//!
//! This module defines the in-memory tree the search layer runs against:
//! [`Document`], its nodes ([`NodeData`], addressed by [`NodeId`]) and the
//! borrowed handle [`NodeRef`] used for navigation.
//!
//! ## Ownership
//!
//! The tree is owned top-down by the [`Document`], which stores every node in a
//! single arena (`Vec<NodeData>`). Children are ordered lists of ids; the parent
//! link is a plain `Option<NodeId>` used for lookup only. Nothing in a node owns
//! another node, so there are no reference cycles and no interior mutability.
//!
//! ## Invariants
//!
//! - Slot `0` is always the document node. It has no parent.
//! - Every other node has exactly one parent, and appears exactly once in that
//!   parent's `children`. Pre-order traversal from slot `0` therefore visits each
//!   node exactly once, in document order.
//! - Once built, a document is never mutated. The only way to construct one is
//!   [`DocumentBuilder`] (or [`Document::parse_str`] with the `xml` feature),
//!   which upholds the invariants above.
//!
//! ## Node Kinds
//!
//! | Kind | `name` | `value` | attributes |
//! |------|--------|---------|------------|
//! | `Document` | empty | empty | none |
//! | `Element` | qualified tag name | empty | ordered `(name, value)` pairs |
//! | `Text` | empty | literal text | none |
//! | `Other` | empty | comment text, or `target value` of a PI | none |
//!
//! Names are qualified as written (`x:class`, not `class`), and namespace
//! declarations are ordinary attributes (`xmlns`, `xmlns:x`).

use serde::{Deserialize, Serialize};

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The document node of every [`Document`].
    pub const DOCUMENT: NodeId = NodeId(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Document,
    Element,
    Text,
    /// Comments, processing instructions and anything else that is neither
    /// an element nor text.
    Other,
}

/// A `(name, value)` pair attached to an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub kind: NodeKind,
    pub name: String,
    pub value: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: String::new(),
            value: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// A parsed markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only the document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document)],
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: NodeId::DOCUMENT,
        }
    }

    /// The first element in document order, if any.
    pub fn root_element(&self) -> Option<NodeRef<'_>> {
        self.root().children().find(|child| child.kind() == NodeKind::Element)
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { doc: self, id })
    }

    /// Number of nodes, including the document node.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document is empty when it holds nothing but the document node.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

/// A borrowed handle to a node in a [`Document`].
///
/// Handles are `Copy` and only valid for the lifetime of the document they
/// were obtained from. Two handles are equal when they point at the same slot
/// of the same document.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn data(self) -> &'a NodeData {
        self.doc.data(self.id)
    }

    pub fn kind(self) -> NodeKind {
        self.data().kind
    }

    /// Tag name for elements, empty otherwise.
    pub fn name(self) -> &'a str {
        &self.data().name
    }

    /// Literal value for text and other nodes, empty for elements.
    pub fn value(self) -> &'a str {
        &self.data().value
    }

    pub fn attributes(self) -> &'a [Attribute] {
        &self.data().attributes
    }

    /// Looks up the value of the first attribute called `name`.
    pub fn attribute(self, name: &str) -> Option<&'a str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| NodeRef { doc: self.doc, id })
    }

    pub fn children(self) -> Children<'a> {
        Children {
            doc: self.doc,
            ids: self.data().children.iter(),
        }
    }

    pub fn has_children(self) -> bool {
        !self.data().children.is_empty()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.doc, other.doc)
    }
}

impl Eq for NodeRef<'_> {}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.data();
        match data.kind {
            NodeKind::Element => write!(f, "Element({}, <{}>)", self.id.0, data.name),
            NodeKind::Text => write!(f, "Text({}, {:?})", self.id.0, data.value),
            kind => write!(f, "{:?}({})", kind, self.id.0),
        }
    }
}

/// Ordered iterator over a node's children.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    doc: &'a Document,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| NodeRef { doc: self.doc, id })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| NodeRef { doc: self.doc, id })
    }
}

impl ExactSizeIterator for Children<'_> {}

/// Builds a [`Document`] in document order.
///
/// Nodes are appended to the innermost open element (or to the document node
/// when no element is open). Elements stay open until [`end`](Self::end) is
/// called; [`build`](Self::build) closes anything still open.
///
/// ```
/// use rwsxml::model::DocumentBuilder;
///
/// let doc = DocumentBuilder::new()
///     .element("span", [("class", "ctrlstate")])
///     .text("motoron")
///     .end()
///     .build();
/// assert_eq!(doc.len(), 3);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    doc: Document,
    open: Vec<NodeId>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            open: vec![NodeId::DOCUMENT],
        }
    }

    /// Opens a new element with the given attributes, kept in the given order.
    pub fn element<I, K, V>(mut self, name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = NodeData::new(NodeKind::Element);
        data.name = name.into();
        data.attributes = attributes
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value))
            .collect();
        let id = self.append(data);
        self.open.push(id);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        let mut data = NodeData::new(NodeKind::Text);
        data.value = text.into();
        self.append(data);
        self
    }

    pub fn other(mut self, content: impl Into<String>) -> Self {
        let mut data = NodeData::new(NodeKind::Other);
        data.value = content.into();
        self.append(data);
        self
    }

    /// Closes the innermost open element. The document node is never closed.
    pub fn end(mut self) -> Self {
        if self.open.len() > 1 {
            self.open.pop();
        }
        self
    }

    pub fn build(self) -> Document {
        self.doc
    }

    fn append(&mut self, mut data: NodeData) -> NodeId {
        let parent = self.open.last().copied().unwrap_or(NodeId::DOCUMENT);
        let id = NodeId(self.doc.nodes.len());
        data.parent = Some(parent);
        self.doc.nodes.push(data);
        self.doc.nodes[parent.0].children.push(id);
        id
    }
}

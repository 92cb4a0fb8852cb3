//! # Searching a Document by Attribute
//!
//! Two questions get asked of every RWS response:
//!
//! 1. **Which elements carry `(name, value)`?** → [`find_nodes`]
//!    Used to enumerate list entries (signals, tasks, modules, ...).
//! 2. **What is the text of the first node carrying `(name, value)`?** →
//!    [`find_text_content`] / [`find_text_content_in`]
//!    Used to read a single scalar (controller state, operation mode, ...).
//!
//! Both are driven by [`node_has_attribute`] and work over any [`XmlNode`]
//! tree. Neither can fail: an absent document, an absent node or a predicate
//! that matches nothing all produce an empty result.
//!
//! ## Text Resolution
//!
//! Attributes live on elements, so a text node "has" an attribute through its
//! parent. Text resolution is a depth-first, leftmost-first search for the
//! first text node whose **immediate** parent satisfies the predicate. The
//! search stops at the first hit; later matches are never visited.
//!
//! A matching text node whose text is empty ends the scan of its siblings but
//! does not count as a hit: the search resumes with the next sibling of the
//! parent element. Callers cannot tell "not found" from "found, but empty";
//! both come back as `""`.
//!
//! ## Traversal
//!
//! All traversals use an explicit stack instead of recursion, so document
//! depth is bounded only by memory.

use crate::attributes::{node_has_attribute, XmlAttribute};
use crate::model::{Document, NodeRef};
use crate::tree::{descendants, XmlNode};

/// Collects every element at or below `document` that carries `attribute`,
/// in document order.
pub fn find_nodes<'a, N: XmlNode<'a>>(document: Option<N>, attribute: &XmlAttribute) -> Vec<N> {
    let Some(document) = document else {
        return Vec::new();
    };

    let nodes: Vec<N> = descendants(document)
        .filter(|node| node.is_element() && node_has_attribute(Some(*node), attribute))
        .collect();

    tracing::debug!(%attribute, found = nodes.len(), "find_nodes");
    nodes
}

/// Finds the first text content in `document` whose parent element carries
/// `attribute`.
///
/// The search runs from the first element in document order (the root
/// element). Returns an empty string when nothing matches.
pub fn find_text_content<'a, N: XmlNode<'a>>(
    document: Option<N>,
    attribute: &XmlAttribute,
) -> String {
    let Some(document) = document else {
        return String::new();
    };

    let root_element = descendants(document).find(|node| node.is_element());
    find_text_content_in(root_element, attribute)
}

/// Finds the first text content at or below `node` whose parent element
/// carries `attribute`.
///
/// If `node` is itself a matching text node its own text is returned.
pub fn find_text_content_in<'a, N: XmlNode<'a>>(
    node: Option<N>,
    attribute: &XmlAttribute,
) -> String {
    let Some(node) = node else {
        return String::new();
    };

    let text = resolve_text(node, attribute).unwrap_or_default();
    tracing::debug!(%attribute, found = !text.is_empty(), "find_text_content");
    text.to_string()
}

/// The text of `node` if it is a text node whose parent carries `attribute`.
fn own_text<'a, N: XmlNode<'a>>(node: N, attribute: &XmlAttribute) -> Option<&'a str> {
    if node.is_text() && node_has_attribute(node.parent(), attribute) {
        Some(node.text().unwrap_or_default())
    } else {
        None
    }
}

/// Depth-first search with first-match-wins semantics.
///
/// Each stack frame is an element whose children are being scanned. A frame
/// finishes (and its parent continues with the next sibling) when its
/// children run out, or when a text child matches with empty text. A
/// non-empty match ends the whole search.
fn resolve_text<'a, N: XmlNode<'a>>(node: N, attribute: &XmlAttribute) -> Option<&'a str> {
    if let Some(text) = own_text(node, attribute) {
        return Some(text);
    }

    let mut stack = vec![(node, node.children())];

    while let Some((current, children)) = stack.last_mut() {
        let current = *current;
        let Some(child) = children.next() else {
            stack.pop();
            continue;
        };

        if child.is_text() && node_has_attribute(Some(current), attribute) {
            let text = child.text().unwrap_or_default();
            if !text.is_empty() {
                return Some(text);
            }
            stack.pop();
            continue;
        }

        match own_text(child, attribute) {
            Some(text) if !text.is_empty() => return Some(text),
            Some(_) => {}
            None => stack.push((child, child.children())),
        }
    }

    None
}

impl Document {
    /// [`find_nodes`] over this document.
    pub fn find_nodes(&self, attribute: &XmlAttribute) -> Vec<NodeRef<'_>> {
        find_nodes(Some(self.root()), attribute)
    }

    /// [`find_text_content`] over this document.
    pub fn find_text_content(&self, attribute: &XmlAttribute) -> String {
        find_text_content(Some(self.root()), attribute)
    }
}

//! # Tree Abstraction
//!
//! The search layer does not care how a document is stored. It only needs to
//! know, for any node: its kind, its attributes in order, its children in
//! order, its parent, and (for text nodes) its literal text. [`XmlNode`]
//! captures exactly that.
//!
//! Two implementations ship with the crate:
//!
//! - [`NodeRef`]: the owned arena tree from [`crate::model`].
//! - `roxmltree::Node` (feature `xml`): a borrowed parse, searched in place.
//!
//! Node handles are small `Copy` values whose lifetime `'a` is tied to the
//! tree they point into. Text and values borrow from that tree; names borrow
//! when the tree keeps them as written.

use crate::model::{Attribute, Children, Document, DocumentBuilder, NodeKind, NodeRef};
use std::borrow::Cow;

/// A read-only handle to a node in some markup tree.
///
/// Element and attribute names are qualified as written in the source
/// (`x:class`). A representation that only keeps local names and namespace
/// URIs has to assemble them, which is why names are `Cow`.
pub trait XmlNode<'a>: Copy {
    /// Attribute `(name, value)` pairs in stored order.
    type Attributes: Iterator<Item = (Cow<'a, str>, &'a str)>;
    /// Children in document order.
    type Children: DoubleEndedIterator<Item = Self>;

    fn kind(self) -> NodeKind;

    /// Qualified tag name for elements, empty for every other kind.
    fn name(self) -> Cow<'a, str>;

    fn attributes(self) -> Self::Attributes;

    fn children(self) -> Self::Children;

    fn parent(self) -> Option<Self>;

    /// Literal text of a text node; `None` for any other kind.
    fn text(self) -> Option<&'a str>;

    /// Raw content of text and other (comment, PI) nodes; empty for
    /// elements and documents.
    fn content(self) -> Cow<'a, str>;

    fn is_element(self) -> bool {
        self.kind() == NodeKind::Element
    }

    fn is_text(self) -> bool {
        self.kind() == NodeKind::Text
    }

    fn has_attributes(self) -> bool {
        self.attributes().next().is_some()
    }

    fn has_children(self) -> bool {
        self.children().next().is_some()
    }
}

fn attribute_pair(attr: &Attribute) -> (Cow<'_, str>, &str) {
    (Cow::Borrowed(&attr.name), &attr.value)
}

impl<'a> XmlNode<'a> for NodeRef<'a> {
    type Attributes = std::iter::Map<
        std::slice::Iter<'a, Attribute>,
        fn(&'a Attribute) -> (Cow<'a, str>, &'a str),
    >;
    type Children = Children<'a>;

    fn kind(self) -> NodeKind {
        NodeRef::kind(self)
    }

    fn name(self) -> Cow<'a, str> {
        Cow::Borrowed(NodeRef::name(self))
    }

    fn attributes(self) -> Self::Attributes {
        NodeRef::attributes(self)
            .iter()
            .map(attribute_pair as fn(&'a Attribute) -> (Cow<'a, str>, &'a str))
    }

    fn children(self) -> Self::Children {
        NodeRef::children(self)
    }

    fn parent(self) -> Option<Self> {
        NodeRef::parent(self)
    }

    fn text(self) -> Option<&'a str> {
        (NodeRef::kind(self) == NodeKind::Text).then(|| NodeRef::value(self))
    }

    fn content(self) -> Cow<'a, str> {
        Cow::Borrowed(NodeRef::value(self))
    }

    fn has_children(self) -> bool {
        NodeRef::has_children(self)
    }
}

/// Pre-order iterator over a node and all of its descendants.
///
/// Uses an explicit stack, so arbitrarily deep trees do not grow the call
/// stack. Children are pushed in reverse so the leftmost child is popped first.
#[derive(Debug, Clone)]
pub struct Descendants<N> {
    stack: Vec<N>,
}

impl<'a, N: XmlNode<'a>> Iterator for Descendants<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

/// Visits `node` and everything below it in document order.
pub fn descendants<'a, N: XmlNode<'a>>(node: N) -> Descendants<N> {
    Descendants { stack: vec![node] }
}

impl Document {
    /// Copies any [`XmlNode`] tree into an owned document.
    ///
    /// A `Document`-kind source contributes its children; any other source node
    /// becomes the single top-level child of the new document. Comments and
    /// processing instructions are kept as `Other` nodes with their content.
    pub fn from_tree<'a, N: XmlNode<'a>>(source: N) -> Document {
        enum Step<N> {
            Enter(N),
            Leave,
        }

        let mut builder = DocumentBuilder::new();
        let mut stack: Vec<Step<N>> = if source.kind() == NodeKind::Document {
            source.children().rev().map(Step::Enter).collect()
        } else {
            vec![Step::Enter(source)]
        };

        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Leave => {
                    builder = builder.end();
                    continue;
                }
                Step::Enter(node) => node,
            };

            match node.kind() {
                NodeKind::Element => {
                    builder = builder.element(node.name(), node.attributes());
                    stack.push(Step::Leave);
                    stack.extend(node.children().rev().map(Step::Enter));
                }
                NodeKind::Text => builder = builder.text(node.text().unwrap_or_default()),
                // A nested document node carries nothing of its own.
                NodeKind::Document => stack.extend(node.children().rev().map(Step::Enter)),
                NodeKind::Other => builder = builder.other(node.content()),
            }
        }

        builder.build()
    }
}

#[cfg(feature = "xml")]
pub use xml::XmlAttributes;

#[cfg(feature = "xml")]
mod xml {
    use super::XmlNode;
    use crate::error::Result;
    use crate::model::{Document, NodeKind};
    use roxmltree::{
        Attribute, Attributes, Children, Namespace, NamespaceIter, Node, NodeType,
        ParsingOptions,
    };
    use std::borrow::Cow;
    use std::ops::Range;
    use std::path::Path;

    /// The qualified name exactly as it appears at `range` of the source.
    ///
    /// Nodes expanded from entities carry ranges into the entity text, so the
    /// slice is only trusted when it ends with `local`.
    fn source_qname<'input>(
        input: &'input str,
        range: Range<usize>,
        local: &str,
    ) -> Option<&'input str> {
        let qname = input.get(range)?;
        let matches = qname == local
            || qname
                .strip_suffix(local)
                .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with(':'));
        matches.then_some(qname)
    }

    fn qualify<'a>(prefix: Option<&str>, local: &'a str) -> Cow<'a, str> {
        match prefix {
            Some(prefix) if !prefix.is_empty() => Cow::Owned(format!("{prefix}:{local}")),
            _ => Cow::Borrowed(local),
        }
    }

    fn element_name<'a, 'input: 'a>(node: Node<'a, 'input>) -> Cow<'a, str> {
        let tag = Node::tag_name(&node);
        let local = tag.name();
        let input = Node::document(&node).input_text();

        // The element range starts at `<`; the qname runs up to the first
        // whitespace, `/` or `>`.
        let range = Node::range(&node);
        let written = input.get(range.start + 1..range.end).and_then(|rest| {
            let len = rest.find(|c: char| c.is_whitespace() || c == '/' || c == '>')?;
            source_qname(input, range.start + 1..range.start + 1 + len, local)
        });

        match written {
            Some(qname) => Cow::Borrowed(qname),
            None => {
                let prefix = tag.namespace().and_then(|uri| Node::lookup_prefix(&node, uri));
                qualify(prefix, local)
            }
        }
    }

    fn attribute_name<'a, 'input: 'a>(
        node: Node<'a, 'input>,
        attr: &Attribute<'a, 'input>,
    ) -> Cow<'a, str> {
        let local = attr.name();
        let input = Node::document(&node).input_text();
        if let Some(qname) = source_qname(input, attr.range_qname(), local) {
            return Cow::Borrowed(qname);
        }

        // Attributes are never in the default namespace, so only a named
        // binding can supply the prefix.
        let prefix = attr.namespace().and_then(|uri| {
            Node::namespaces(&node)
                .find(|ns| ns.uri() == uri && ns.name().is_some())
                .and_then(Namespace::name)
                .or_else(|| Node::lookup_prefix(&node, uri))
        });
        qualify(prefix, local)
    }

    fn declaration_name<'a>(ns: &Namespace<'a>) -> Cow<'a, str> {
        match ns.name() {
            Some(prefix) => Cow::Owned(format!("xmlns:{prefix}")),
            None => Cow::Borrowed("xmlns"),
        }
    }

    /// Whether `ns` is declared on `node` itself rather than inherited.
    fn declared_on(node: Node<'_, '_>, ns: &Namespace<'_>) -> bool {
        !Node::parent(&node).is_some_and(|parent| {
            Node::namespaces(&parent)
                .any(|outer| outer.name() == ns.name() && outer.uri() == ns.uri())
        })
    }

    /// Namespace declarations of an element followed by its attributes.
    pub struct XmlAttributes<'a, 'input> {
        node: Node<'a, 'input>,
        declarations: NamespaceIter<'a, 'input>,
        attributes: Attributes<'a, 'input>,
    }

    impl<'a, 'input: 'a> Iterator for XmlAttributes<'a, 'input> {
        type Item = (Cow<'a, str>, &'a str);

        fn next(&mut self) -> Option<Self::Item> {
            let node = self.node;
            if let Some(ns) = self.declarations.by_ref().find(|ns| declared_on(node, ns)) {
                return Some((declaration_name(ns), ns.uri()));
            }
            let attr = self.attributes.next()?;
            Some((attribute_name(node, &attr), attr.value()))
        }
    }

    // roxmltree's inherent methods share names with the trait's, so every
    // call below is spelled out to avoid recursing into the trait.
    impl<'a, 'input: 'a> XmlNode<'a> for Node<'a, 'input> {
        type Attributes = XmlAttributes<'a, 'input>;
        type Children = Children<'a, 'input>;

        fn kind(self) -> NodeKind {
            match Node::node_type(&self) {
                NodeType::Root => NodeKind::Document,
                NodeType::Element => NodeKind::Element,
                NodeType::Text => NodeKind::Text,
                NodeType::Comment | NodeType::PI => NodeKind::Other,
            }
        }

        fn name(self) -> Cow<'a, str> {
            if Node::is_element(&self) {
                element_name(self)
            } else {
                Cow::Borrowed("")
            }
        }

        fn attributes(self) -> Self::Attributes {
            XmlAttributes {
                node: self,
                declarations: Node::namespaces(&self),
                attributes: Node::attributes(&self),
            }
        }

        fn children(self) -> Self::Children {
            Node::children(&self)
        }

        fn parent(self) -> Option<Self> {
            Node::parent(&self)
        }

        fn text(self) -> Option<&'a str> {
            if Node::is_text(&self) {
                Node::text(&self)
            } else {
                None
            }
        }

        fn content(self) -> Cow<'a, str> {
            match Node::node_type(&self) {
                NodeType::Text | NodeType::Comment => {
                    Cow::Borrowed(Node::text(&self).unwrap_or_default())
                }
                NodeType::PI => match Node::pi(&self) {
                    Some(pi) => match pi.value {
                        Some(value) => Cow::Owned(format!("{} {}", pi.target, value)),
                        None => Cow::Borrowed(pi.target),
                    },
                    None => Cow::Borrowed(""),
                },
                NodeType::Root | NodeType::Element => Cow::Borrowed(""),
            }
        }
    }

    impl Document {
        /// Parses XML text into an owned document.
        ///
        /// A DOCTYPE is accepted; entities it declares are expanded.
        pub fn parse_str(text: &str) -> Result<Document> {
            let options = ParsingOptions {
                allow_dtd: true,
                ..ParsingOptions::default()
            };
            let parsed = roxmltree::Document::parse_with_options(text, options)?;
            let document = Document::from_tree(parsed.root());
            tracing::debug!(nodes = document.len(), "parsed XML document");
            Ok(document)
        }

        pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
            let text = std::fs::read_to_string(path)?;
            Self::parse_str(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentBuilder;

    fn nested() -> Document {
        DocumentBuilder::new()
            .element("a", [("id", "1")])
            .element("b", [("id", "2")])
            .text("x")
            .end()
            .element("c", [("id", "3")])
            .element("d", [("id", "4")])
            .end()
            .end()
            .end()
            .element("e", [("id", "5")])
            .build()
    }

    #[test]
    fn descendants_visit_in_document_order() {
        let doc = nested();
        let order: Vec<String> = descendants(doc.root())
            .map(|n| match XmlNode::kind(n) {
                NodeKind::Element => XmlNode::name(n).to_string(),
                NodeKind::Text => format!("#{}", XmlNode::text(n).unwrap()),
                _ => "/".to_string(),
            })
            .collect();
        assert_eq!(order, vec!["/", "a", "b", "#x", "c", "d", "e"]);
    }

    #[test]
    fn descendants_survive_deep_nesting() {
        let mut builder = DocumentBuilder::new();
        for _ in 0..100_000 {
            builder = builder.element("n", Vec::<(&str, &str)>::new());
        }
        let doc = builder.text("bottom").build();
        assert_eq!(descendants(doc.root()).count(), 100_002);
    }

    #[test]
    fn text_is_only_reported_for_text_nodes() {
        let doc = nested();
        let a = doc.root_element().unwrap();
        assert_eq!(XmlNode::text(a), None);
        let x = descendants(doc.root()).find(|n| n.is_text()).unwrap();
        assert_eq!(XmlNode::text(x), Some("x"));
    }

    #[test]
    fn has_attributes_reflects_attribute_list() {
        let doc = nested();
        assert!(!doc.root().has_attributes());
        assert!(doc.root_element().unwrap().has_attributes());
    }

    #[test]
    fn from_tree_copies_structure() {
        let doc = nested();
        let copy = Document::from_tree(doc.root());
        assert_eq!(copy, doc);
    }

    #[test]
    fn from_tree_on_element_makes_it_the_root() {
        let doc = nested();
        let c = descendants(doc.root())
            .find(|n| n.attribute("id") == Some("3"))
            .unwrap();
        let copy = Document::from_tree(c);
        let root = copy.root_element().unwrap();
        assert_eq!(root.name(), "c");
        assert_eq!(root.children().count(), 1);
        assert_eq!(copy.len(), 3);
    }

    #[cfg(feature = "xml")]
    mod xml {
        use super::*;

        #[test]
        fn roxmltree_nodes_expose_the_same_shape() {
            let text = r#"<ul class="list"><li class="a" title="t">one</li><!-- c --><li class="a">two</li></ul>"#;
            let parsed = roxmltree::Document::parse(text).unwrap();
            let ul = parsed.root_element();

            assert!(XmlNode::is_element(ul));
            assert_eq!(XmlNode::name(ul), "ul");
            let kinds: Vec<_> = XmlNode::children(ul).map(XmlNode::kind).collect();
            assert_eq!(
                kinds,
                vec![NodeKind::Element, NodeKind::Other, NodeKind::Element]
            );

            let li = XmlNode::children(ul).next().unwrap();
            let attrs: Vec<_> = XmlNode::attributes(li)
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            assert_eq!(attrs, vec!["class=a", "title=t"]);
            assert_eq!(XmlNode::text(li), None);
            let text_node = XmlNode::children(li).next().unwrap();
            assert_eq!(XmlNode::text(text_node), Some("one"));
            assert_eq!(XmlNode::parent(text_node), Some(li));
        }

        #[test]
        fn parse_str_builds_arena_document() {
            let doc = Document::parse_str(r#"<a k="v"><b>hi</b></a>"#).unwrap();
            let a = doc.root_element().unwrap();
            assert_eq!(a.name(), "a");
            assert_eq!(a.attribute("k"), Some("v"));
            let b = a.children().next().unwrap();
            assert_eq!(b.children().next().unwrap().value(), "hi");
        }

        fn attribute_names(node: NodeRef<'_>) -> Vec<&str> {
            node.attributes().iter().map(|a| a.name.as_str()).collect()
        }

        #[test]
        fn prefixed_names_stay_qualified() {
            let doc = Document::parse_str(
                r#"<html xmlns="http://www.w3.org/1999/xhtml" xmlns:x="urn:x"><x:item x:class="ctrlstate" class="name">motoron</x:item></html>"#,
            )
            .unwrap();
            let html = doc.root_element().unwrap();
            let item = html.children().next().unwrap();

            assert_eq!(item.name(), "x:item");
            assert_eq!(item.attribute("x:class"), Some("ctrlstate"));
            assert_eq!(item.attribute("class"), Some("name"));
            assert_eq!(attribute_names(item), vec!["x:class", "class"]);
        }

        #[test]
        fn namespace_declarations_are_attributes_of_their_element() {
            let doc = Document::parse_str(
                r#"<html xmlns="http://www.w3.org/1999/xhtml" xmlns:x="urn:x"><span xmlns:y="urn:y">a</span></html>"#,
            )
            .unwrap();
            let html = doc.root_element().unwrap();
            let span = html.children().next().unwrap();

            assert_eq!(html.attribute("xmlns"), Some("http://www.w3.org/1999/xhtml"));
            assert_eq!(html.attribute("xmlns:x"), Some("urn:x"));
            assert_eq!(attribute_names(span), vec!["xmlns:y"]);
        }

        #[test]
        fn entity_expanded_elements_keep_prefixes() {
            let doc = Document::parse_str(
                r#"<!DOCTYPE r [<!ENTITY e "<x:b x:k='v'/>">]><r xmlns:x="urn:x">&e;</r>"#,
            )
            .unwrap();
            let b = descendants(doc.root())
                .find(|n| n.kind() == NodeKind::Element && n.name() != "r")
                .unwrap();
            assert_eq!(b.name(), "x:b");
            assert_eq!(b.attribute("x:k"), Some("v"));
        }

        #[test]
        fn comments_and_instructions_keep_their_content() {
            let doc =
                Document::parse_str("<a><!-- note --><?render fast?><?bare?></a>").unwrap();
            let values: Vec<_> = doc
                .root_element()
                .unwrap()
                .children()
                .map(|n| (n.kind(), n.value()))
                .collect();
            assert_eq!(
                values,
                vec![
                    (NodeKind::Other, " note "),
                    (NodeKind::Other, "render fast"),
                    (NodeKind::Other, "bare"),
                ]
            );
        }

        #[test]
        fn parse_str_accepts_doctype() {
            let doc = Document::parse_str(
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"><html/>"#,
            )
            .unwrap();
            assert_eq!(doc.root_element().unwrap().name(), "html");
        }

        #[test]
        fn parse_str_reports_malformed_input() {
            let err = Document::parse_str("<a><b></a>").unwrap_err();
            assert!(matches!(err, crate::error::RwsError::Parse(_)));
        }
    }
}

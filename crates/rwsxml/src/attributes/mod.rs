//! # Attribute Predicates
//!
//! RWS responses are XHTML documents whose interesting parts are tagged with
//! attributes rather than found at fixed paths: the controller state lives in
//! whatever element carries `class="ctrlstate"`, each I/O signal is an element
//! with `class="ios-signal"`, and so on. Searching is therefore always driven by
//! an attribute `(name, value)` pair.
//!
//! - [`XmlAttribute`]: the immutable `(name, value)` predicate
//! - [`node_has_attribute`]: the presence test every search is built on
//!
//! ## The Wildcard Predicate
//!
//! A predicate whose name and value are both empty matches **every** node,
//! including an absent one. The check happens before the node is looked at.
//! Callers rely on this to mean "any node", so it is kept as is.
//!
//! ```
//! use rwsxml::attributes::{node_has_attribute, XmlAttribute};
//! use rwsxml::model::NodeRef;
//!
//! assert!(node_has_attribute::<NodeRef>(None, &XmlAttribute::default()));
//! ```

mod matching;
mod predicate;

pub use matching::node_has_attribute;
pub use predicate::XmlAttribute;

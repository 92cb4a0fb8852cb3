//! # rwsxml Architecture
//!
//! rwsxml answers two questions about Robot Web Services (RWS) responses that
//! have already been fetched and parsed:
//!
//! - *Which elements carry a given attribute `(name, value)`?*
//! - *What is the first text associated with such an element?*
//!
//! Fetching, authentication and the higher-level robot operations (state
//! queries, I/O signals, program control) belong to callers. This crate is the
//! search layer they share, plus the constant tables they draw predicates from.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Callers (rwsxml-cli, robot clients)                        │
//! │  - Fetch and parse responses                                │
//! │  - Pick predicates from `constants`                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Search Layer (search.rs, attributes/)                      │
//! │  - find_nodes, find_text_content                            │
//! │  - Pure functions; empty result means "not found"           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tree Layer (tree.rs, model.rs)                             │
//! │  - XmlNode trait over any tree representation               │
//! │  - Owned arena Document, roxmltree adapter (feature `xml`)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Failure in the Search Layer
//!
//! Search functions take a possibly-absent document or node and always return
//! a value. Absent input, empty trees and unmatched predicates all collapse to
//! an empty `Vec` or `""`. Errors ([`error::RwsError`]) only arise around the
//! search layer: parsing text, reading files, loading configuration.
//!
//! ## Concurrency
//!
//! Searches hold no state between calls and never mutate the tree, so any
//! number of threads may search the same [`model::Document`] at once.
//!
//! ## Module Overview
//!
//! - [`search`]: Node finder and text content resolver
//! - [`attributes`]: Attribute predicate and presence test
//! - [`tree`]: The `XmlNode` abstraction and traversal helpers
//! - [`model`]: Owned document tree and builder
//! - [`tribool`]: Three-valued boolean
//! - [`constants`]: Controller and RWS identifier tables
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod attributes;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod search;
pub mod tree;
pub mod tribool;

pub use attributes::{node_has_attribute, XmlAttribute};
pub use model::{Document, DocumentBuilder, NodeKind, NodeRef};
pub use search::{find_nodes, find_text_content, find_text_content_in};
pub use tree::XmlNode;
pub use tribool::TriBool;

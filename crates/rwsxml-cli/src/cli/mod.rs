//! # CLI Behavior
//!
//! This is one client of the rwsxml library. The CLI is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Queries
//!
//! A query is an attribute value plus an optional attribute name:
//!
//! - `rwsxml nodes response.xml ios-signal` lists every element with
//!   `class="ios-signal"`.
//! - `rwsxml text response.xml ctrlstate` prints the controller state.
//! - `rwsxml text response.xml main --name id` matches on `id` instead.
//!
//! The name defaults to the configured `attribute_name` (`class` unless
//! changed). A file of `-` reads the response from stdin.
//!
//! ## Not Found Is Not an Error
//!
//! An unmatched query prints nothing (or `[]` / `""` in JSON mode) and exits 0.
//! Only unreadable input, malformed XML and bad configuration exit non-zero.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (plain, styled, JSON)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;

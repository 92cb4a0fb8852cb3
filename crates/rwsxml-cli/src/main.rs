//! # rwsxml CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/rwsxml/`: Core library with the tree abstraction, attribute search and constants
//! - `crates/rwsxml-cli/`: This CLI tool, depends on the `rwsxml` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/rwsxml-cli/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config, logging, input and dispatch (commands.rs)        │
//! │  - Text and JSON output (render.rs)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/rwsxml/)                                   │
//! │  - Document::parse_str, find_nodes, find_text_content       │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to the code plus integration tests over
//!   captured RWS responses.
//! - **Rendering**: unit tests feed node lists into `render.rs` and compare
//!   the plain output.
//! - **Binary**: end-to-end tests in `tests/` run the built `rwsxml` against
//!   temporary files and stdin.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

//! # Block Highlighter Demo
//!
//! Runs the highlighter against a generated in-memory world and logs what it finds.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    block_highlighter::run();
}

//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece geometry, blocking and promotion
//! - `board.rs` - Board queries, check detection and rendering
//! - `proptest.rs` - Property-based tests

mod board;

//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Raw attacks and legal move generation
//! - `status.rs` - Check, checkmate and stalemate detection
//! - `san.rs` - Move notation
//! - `apply.rs` - Move application
//! - `edge_cases.rs` - Rules that are deliberately absent
//! - `proptest.rs` - Property-based tests

mod apply;
mod status;

use crate::board::Square;

/// Parse algebraic square names in tests
pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("bad square in test")
}

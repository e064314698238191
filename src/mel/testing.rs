//! Testing utilities for AST assertions
//!
//! A fluent API for asserting on tree structure, so parser tests read like
//! the tree they expect:
//!
//! ```text
//! let program = parse("Console.ReadLine(x);").unwrap();
//!
//! assert_node(&program)
//!     .child_count(1)
//!     .child(0, |call| {
//!         call.label("Console").child(0, |input| {
//!             input.label("ReadLine").child_labels(&["x"]);
//!         });
//!     });
//! ```

mod assertions;

pub use assertions::{assert_node, NodeAssertion};

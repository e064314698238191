//! # mel
//!
//! A parser for mel, a small C#-like teaching language, and a viewer for the
//! syntax trees it produces.
//!
//! ```text
//! use mel::mel::parsing::parse;
//!
//! let program = parse("Console.WriteLine(12 + 6);")?;
//! for line in program.render_tree() {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Testing
//!
//! Tree assertions for tests live in the [testing module](mel::testing).

pub mod mel;

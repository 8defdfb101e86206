//! Source file parsers.
//!
//! - `js`: JS/TS/JSX/TSX parser (uses swc for AST generation)
//!
//! Stylesheet parsing lives in `crate::core::stylesheet`, next to the fact
//! extraction that is its only consumer.

pub mod js;

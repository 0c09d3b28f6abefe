//! SSML node tree
//!
//! Owned tree representation of a parsed document: a closed sum type of
//! text and element nodes, built once by the parser and read-only
//! afterwards.

pub mod node;

pub use node::{Element, Node};

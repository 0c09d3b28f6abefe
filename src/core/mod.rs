//! Core parsing primitives
//!
//! The fundamental building blocks for SSML parsing:
//! - Scanner: memchr-accelerated delimiter detection
//! - Parser: recursive-descent document parsing
//! - Attributes: tag-content attribute tokenizing
//! - Entities: markup escape decoding/encoding with Cow

pub mod attributes;
pub mod entities;
pub mod parser;
pub mod scanner;

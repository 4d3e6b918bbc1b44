#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! ## API Reference

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod language;
mod literal;
mod request;
mod template;

pub use language::Language;
pub use request::{HttpMethod, SnippetRequest, UnknownMethod};
pub use template::{generate, generate_all, render, unsupported_placeholder};

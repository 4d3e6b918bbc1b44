#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! ## API Reference

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod config;
mod error;
mod request;

pub use catalog::{Catalog, Endpoint, ResponseShape};
pub use config::{ProjectConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use request::Snippet;

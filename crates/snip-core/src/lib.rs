//! Core types and traits for the snip short-code engine.
//!
//! This crate provides the vocabulary shared by the encoder and the
//! collision resolver: the short code itself, the generation
//! configuration, and the identifier store contract.

pub mod config;
pub mod error;
pub mod shortcode;
pub mod store;

pub use config::GenerationConfig;
pub use error::{ConfigError, StoreError};
pub use shortcode::ShortCode;
pub use store::IdentifierStore;

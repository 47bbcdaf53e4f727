//! Collision-resolving short-code generation.
//!
//! This crate orchestrates an [`Encoder`] against an
//! [`IdentifierStore`]: candidates that already exist in the store are
//! regenerated under deterministic input perturbation, bounded by a
//! configured retry budget.
//!
//! [`Encoder`]: snip_generator::Encoder
//! [`IdentifierStore`]: snip_core::IdentifierStore

pub mod error;
pub mod memory;
pub mod resolver;

pub use error::{GenerationError, Result};
pub use memory::InMemoryStore;
pub use resolver::CollisionResolver;

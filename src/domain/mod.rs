//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `interview` - The guided setup interview engine

pub mod foundation;
pub mod interview;

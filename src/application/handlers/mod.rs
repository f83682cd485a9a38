//! Use case handlers.

pub mod interview;

//! Shared building blocks

pub mod errors;
pub mod types;

//! Serialization and deserialization utilities for item stacks.

pub mod record;
pub mod json;

//! Shared types for assistant operations.

pub mod ask;

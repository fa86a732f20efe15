//! Provider traits for assistant integrations.

pub mod assistant;

//! Care assistant abstraction layer for question answering providers.
//!
//! This crate provides the trait-based abstraction behind the "ask the
//! assistant" feature on the insights screen: a single question goes out, a
//! single block of answer text comes back.
//!
//! The design is provider-agnostic, enabling applications to swap between
//! different text-generation services without changing application code. The
//! concrete HTTP client lives with the application's gateway layer.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::ask::{Answer, AskRequest};

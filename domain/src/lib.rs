//! This module re-exports various items from the `entity_api` crate.
//!
//! The purpose of this re-export is to ensure that consumers of the `domain` crate do not need to
//! directly depend on the `entity_api` crate. By re-exporting these items, we provide a clear and
//! consistent interface for reading fixture-backed records within the domain layer, while the
//! underlying implementation details remain in the `entity_api` crate.
pub use entity_api::{
    care_tasks, consent_status, consents, insights, roles, screens, task_status, users, CareStore,
    Id,
};

pub mod care_task;
pub mod consent;
pub mod error;
pub mod insight;
pub mod screen;
pub mod user;

pub mod gateway;

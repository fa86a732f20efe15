use uuid::Uuid;

// Core entities
pub mod care_tasks;
pub mod consent_status;
pub mod consents;
pub mod insights;
pub mod roles;
pub mod screens;
pub mod task_status;
pub mod users;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status of a care task. Fixture data sets these once; there is no
/// transition logic anywhere in this service.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Scheduled but not yet due
    #[default]
    Pending,
    /// Due today
    Due,
    /// Past its due date without completion
    Overdue,
    /// Done
    Completed,
    /// Deferred by the patient
    Snoozed,
}

impl TaskStatus {
    /// Every status other than `Completed` counts as open. The care plan
    /// screen filters on this, so open and completed must partition the
    /// full task set.
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(fmt, "pending"),
            TaskStatus::Due => write!(fmt, "due"),
            TaskStatus::Overdue => write!(fmt, "overdue"),
            TaskStatus::Completed => write!(fmt, "completed"),
            TaskStatus::Snoozed => write!(fmt, "snoozed"),
        }
    }
}

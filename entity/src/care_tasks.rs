//! Care plan task records.

use crate::task_status::TaskStatus;
use crate::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::care_tasks::Model)]
pub struct Model {
    #[schema(value_type = Uuid)]
    pub id: Id,

    pub title: String,

    pub description: String,

    /// Calendar day the task is due; the app shows no time component
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,

    pub status: TaskStatus,
}

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::{SortOrder, WithSortDefaults};
use domain::care_task::{self, TaskQuery};
use domain::task_status::TaskStatus;

/// Sortable fields for care tasks
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = "due_date")]
pub(crate) enum SortField {
    #[serde(rename = "due_date")]
    DueDate,
    #[serde(rename = "title")]
    Title,
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    /// Keep only tasks whose status matches exactly
    pub(crate) status: Option<TaskStatus>,
    /// `true` keeps everything not yet completed, `false` keeps the completed set
    pub(crate) open: Option<bool>,
    pub(crate) sort_by: Option<SortField>,
    pub(crate) sort_order: Option<SortOrder>,
}

impl WithSortDefaults for IndexParams {
    type SortField = SortField;
}

impl IndexParams {
    /// Translates the query string parameters into the domain's task query.
    pub(crate) fn into_task_query(self) -> TaskQuery {
        TaskQuery {
            status: self.status,
            open: self.open,
            sort_by: self.sort_by.map(|field| match field {
                SortField::DueDate => care_task::SortField::DueDate,
                SortField::Title => care_task::SortField::Title,
            }),
            sort_order: self.sort_order.map(|order| match order {
                SortOrder::Asc => care_task::SortOrder::Ascending,
                SortOrder::Desc => care_task::SortOrder::Descending,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_task_query_maps_every_field() {
        let params = IndexParams {
            status: Some(TaskStatus::Snoozed),
            open: Some(true),
            sort_by: Some(SortField::DueDate),
            sort_order: Some(SortOrder::Desc),
        };

        let query = params.into_task_query();

        assert_eq!(query.status, Some(TaskStatus::Snoozed));
        assert_eq!(query.open, Some(true));
        assert_eq!(query.sort_by, Some(care_task::SortField::DueDate));
        assert_eq!(query.sort_order, Some(care_task::SortOrder::Descending));
    }

    #[test]
    fn into_task_query_leaves_absent_filters_unset() {
        let params = IndexParams {
            status: None,
            open: None,
            sort_by: None,
            sort_order: None,
        };

        let query = params.into_task_query();

        assert_eq!(query.status, None);
        assert_eq!(query.open, None);
        assert_eq!(query.sort_by, None);
        assert_eq!(query.sort_order, None);
    }
}

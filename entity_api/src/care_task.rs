use crate::error::{EntityApiErrorKind, Error};
use crate::store::CareStore;
use entity::task_status::TaskStatus;
use entity::{care_tasks::Model, Id};
use std::sync::Arc;

use log::debug;

/// Fields the care task list can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortField {
    DueDate,
    Title,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Narrowing and ordering options for a care task listing.
///
/// `status` matches one status exactly. `open` selects the completed set
/// (`false`) or its complement (`true`); the two halves always partition the
/// full collection. Both filters may be combined.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub open: Option<bool>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

pub async fn find_all(store: &CareStore) -> Arc<Vec<Model>> {
    store.care_tasks()
}

pub async fn find_by_id(store: &CareStore, id: Id) -> Result<Model, Error> {
    let tasks = store.care_tasks();
    debug!("Finding care task with id {id} among {} records", tasks.len());

    tasks
        .iter()
        .find(|task| task.id == id)
        .cloned()
        .ok_or_else(|| Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        })
}

pub async fn find_by(store: &CareStore, query: TaskQuery) -> Vec<Model> {
    let tasks = store.care_tasks();

    let mut selected: Vec<Model> = tasks
        .iter()
        .filter(|task| match query.status {
            Some(status) => task.status == status,
            None => true,
        })
        .filter(|task| match query.open {
            Some(open) => task.status.is_completed() != open,
            None => true,
        })
        .cloned()
        .collect();

    if let Some(field) = query.sort_by {
        let order = query.sort_order.unwrap_or(SortOrder::Ascending);
        selected.sort_by(|a, b| {
            let ordering = match field {
                SortField::DueDate => a.due_date.cmp(&b.due_date),
                SortField::Title => a.title.cmp(&b.title),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    debug!(
        "Care task query {:?} selected {} of {} records",
        query,
        selected.len(),
        tasks.len()
    );

    selected
}

pub use entity_api::care_task::{find_all, find_by, find_by_id, SortField, SortOrder, TaskQuery};

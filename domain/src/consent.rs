pub use entity_api::consent::{find_all, find_by_id};

pub use entity_api::user::{find_all, find_by_role, find_by_role_str};

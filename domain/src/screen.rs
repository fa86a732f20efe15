pub use entity_api::screen::{find_by_role, find_by_role_str};

use crate::error::{EntityApiErrorKind, Error};
use crate::role_parse_str;
use crate::store::CareStore;
use entity::roles::Role;
use entity::users::Model;
use std::sync::Arc;

use log::debug;

pub async fn find_all(store: &CareStore) -> Arc<Vec<Model>> {
    store.users()
}

/// Looks up the sample user acting as the given role. The store seeds one
/// user per role, so a typed lookup always succeeds; the error path exists
/// for symmetry with the other finders.
pub async fn find_by_role(store: &CareStore, role: Role) -> Result<Model, Error> {
    let users = store.users();
    debug!("Finding user for role {role} among {} records", users.len());

    users
        .iter()
        .find(|user| user.role == role)
        .cloned()
        .ok_or_else(|| Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        })
}

/// Parses a raw role string (e.g. from a query parameter) and resolves the
/// acting user for it. Unknown role names are an invalid query term, not a
/// missing record.
pub async fn find_by_role_str(store: &CareStore, role_str: &str) -> Result<Model, Error> {
    let role = role_parse_str(role_str)?;
    find_by_role(store, role).await
}

use std::str::FromStr;

pub use entity::{care_tasks, consent_status, consents, insights, roles, screens, task_status, users, Id};

pub mod care_task;
pub mod consent;
pub mod error;
pub mod insight;
pub mod screen;
pub mod store;
pub mod user;

pub use store::{seed_store, CareStore};

pub(crate) fn role_parse_str(role_str: &str) -> Result<roles::Role, error::Error> {
    roles::Role::from_str(role_str).map_err(|_| error::Error {
        source: None,
        error_kind: error::EntityApiErrorKind::InvalidQueryTerm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn role_parse_str_parses_valid_role() {
        let role = role_parse_str("coordinator").unwrap();
        assert_eq!(role, roles::Role::Coordinator);
    }

    #[tokio::test]
    async fn role_parse_str_returns_error_for_invalid_role() {
        let result = role_parse_str("wizard");
        assert!(result.is_err());
    }
}

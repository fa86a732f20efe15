use crate::error::Error;
use crate::role_parse_str;
use crate::store::CareStore;
use entity::roles::Role;
use entity::screens::Model;
use std::sync::Arc;

use log::debug;

/// The screens a role's home menu offers, in display order.
pub async fn find_by_role(store: &CareStore, role: Role) -> Arc<Vec<Model>> {
    let screens = store.screens_for(role);
    debug!("Role {role} resolves to {} screen(s)", screens.len());

    screens
}

/// Parses a raw role string (e.g. from a path segment) before resolving its
/// screen set.
pub async fn find_by_role_str(store: &CareStore, role_str: &str) -> Result<Arc<Vec<Model>>, Error> {
    let role = role_parse_str(role_str)?;
    Ok(find_by_role(store, role).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityApiErrorKind;
    use crate::store::seed_store;
    use entity::screens::ScreenId;

    #[tokio::test]
    async fn patient_and_clinician_choose_between_two_screens() {
        let store = seed_store();

        assert_eq!(find_by_role(&store, Role::Patient).await.len(), 2);
        assert_eq!(find_by_role(&store, Role::Clinician).await.len(), 2);
    }

    #[tokio::test]
    async fn coordinator_and_admin_land_on_a_single_screen() {
        let store = seed_store();

        assert_eq!(find_by_role(&store, Role::Coordinator).await.len(), 1);
        assert_eq!(find_by_role(&store, Role::Admin).await.len(), 1);
    }

    #[tokio::test]
    async fn patient_screens_are_care_plan_then_insights() {
        let store = seed_store();

        let screens = find_by_role(&store, Role::Patient).await;

        assert_eq!(screens[0].id, ScreenId::CarePlan);
        assert_eq!(screens[1].id, ScreenId::Insights);
    }

    #[tokio::test]
    async fn find_by_role_str_rejects_unknown_roles() {
        let store = seed_store();

        let result = find_by_role_str(&store, "director").await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::InvalidQueryTerm
        );
    }

    #[tokio::test]
    async fn repeated_lookups_return_the_same_screen_collection() {
        let store = seed_store();

        let first = find_by_role(&store, Role::Admin).await;
        let second = find_by_role(&store, Role::Admin).await;

        assert!(Arc::ptr_eq(&first, &second));
    }
}

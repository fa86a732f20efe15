use crate::error::{EntityApiErrorKind, Error};
use crate::store::CareStore;
use entity::{insights::Model, Id};
use std::sync::Arc;

use log::debug;

pub async fn find_all(store: &CareStore) -> Arc<Vec<Model>> {
    store.insights()
}

pub async fn find_by_id(store: &CareStore, id: Id) -> Result<Model, Error> {
    let insights = store.insights();
    debug!("Finding insight with id {id} among {} records", insights.len());

    insights
        .iter()
        .find(|insight| insight.id == id)
        .cloned()
        .ok_or_else(|| Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_store;

    #[tokio::test]
    async fn find_all_returns_the_seeded_insights() {
        let store = seed_store();

        let all = find_all(&store).await;

        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|i| !i.reason.is_empty()));
    }

    #[tokio::test]
    async fn find_by_id_returns_record_not_found_for_unknown_id() {
        let store = seed_store();

        let result = find_by_id(&store, Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }

    #[tokio::test]
    async fn seeded_insights_include_optional_fields_both_ways() {
        let store = seed_store();
        let all = find_all(&store).await;

        assert!(all.iter().any(|i| i.evidence.is_some()));
        assert!(all.iter().any(|i| i.evidence.is_none()));
        assert!(all.iter().any(|i| i.action.is_some()));
        assert!(all.iter().any(|i| i.action.is_none()));
    }
}

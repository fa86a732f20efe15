use crate::error::{EntityApiErrorKind, Error};
use crate::store::CareStore;
use entity::{consents::Model, Id};
use std::sync::Arc;

use log::debug;

pub async fn find_all(store: &CareStore) -> Arc<Vec<Model>> {
    store.consents()
}

pub async fn find_by_id(store: &CareStore, id: Id) -> Result<Model, Error> {
    let consents = store.consents();
    debug!("Finding consent with id {id} among {} records", consents.len());

    consents
        .iter()
        .find(|consent| consent.id == id)
        .cloned()
        .ok_or_else(|| Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        })
}

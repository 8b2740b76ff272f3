//! Collection resource service, including root-folder linking.

use crate::core::store::{AppStore, remove_collection, set_collections, upsert_collection};
use crate::services::api::{ApiClient, ApiError};
use readloom_api_models::{Collection, CollectionInput};
use serde::Serialize;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

const BASE: &str = "/api/collections";

#[derive(Serialize)]
struct LinkRootFoldersBody<'a> {
    root_folder_ids: &'a [i64],
}

/// CRUD over `/api/collections`, writing results through the library cache.
#[derive(Clone)]
pub struct CollectionsService {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
}

impl CollectionsService {
    /// Service bound to one gateway client and the shared store.
    #[must_use]
    pub fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) -> Self {
        Self { client, dispatch }
    }

    /// Fetch all collections and replace the cached list.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_all(&self, params: &[(&str, &str)]) -> Result<Vec<Collection>, ApiError> {
        let collections: Vec<Collection> = self.client.get(BASE, params).await?;
        let cached = collections.clone();
        self.dispatch
            .reduce_mut(|store| set_collections(&mut store.library, cached));
        Ok(collections)
    }

    /// Fetch one collection and merge it into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_by_id(&self, id: i64) -> Result<Collection, ApiError> {
        let collection: Collection = self.client.get(&format!("{BASE}/{id}"), &[]).await?;
        let cached = collection.clone();
        self.dispatch
            .reduce_mut(|store| upsert_collection(&mut store.library, cached));
        Ok(collection)
    }

    /// Create a collection and merge the server's record into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn create(&self, input: &CollectionInput) -> Result<Collection, ApiError> {
        let collection: Collection = self.client.post(BASE, input).await?;
        let cached = collection.clone();
        self.dispatch
            .reduce_mut(|store| upsert_collection(&mut store.library, cached));
        Ok(collection)
    }

    /// Update a collection; the server's record wins in the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn update(&self, id: i64, input: &CollectionInput) -> Result<Collection, ApiError> {
        let collection: Collection = self.client.put(&format!("{BASE}/{id}"), input).await?;
        let cached = collection.clone();
        self.dispatch
            .reduce_mut(|store| upsert_collection(&mut store.library, cached));
        Ok(collection)
    }

    /// Delete a collection and drop it from the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self.client.delete(&format!("{BASE}/{id}")).await?;
        self.dispatch
            .reduce_mut(|store| remove_collection(&mut store.library, id));
        Ok(())
    }

    /// Link root folders to a collection; the server returns the updated
    /// collection record.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn link_root_folders(
        &self,
        id: i64,
        root_folder_ids: &[i64],
    ) -> Result<Collection, ApiError> {
        let collection: Collection = self
            .client
            .post(
                &format!("{BASE}/{id}/rootfolders"),
                &LinkRootFoldersBody { root_folder_ids },
            )
            .await?;
        let cached = collection.clone();
        self.dispatch
            .reduce_mut(|store| upsert_collection(&mut store.library, cached));
        Ok(collection)
    }

    /// Unlink one root folder from a collection.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn unlink_root_folder(
        &self,
        id: i64,
        root_folder_id: i64,
    ) -> Result<Collection, ApiError> {
        let collection: Collection = self
            .client
            .delete(&format!("{BASE}/{id}/rootfolders/{root_folder_id}"))
            .await?;
        let cached = collection.clone();
        self.dispatch
            .reduce_mut(|store| upsert_collection(&mut store.library, cached));
        Ok(collection)
    }
}

//! Root folder resource service and the server-side folder browser.

use crate::core::store::{AppStore, remove_root_folder, set_root_folders, upsert_root_folder};
use crate::services::api::{ApiClient, ApiError};
use readloom_api_models::{RootFolder, RootFolderInput};
use serde::Deserialize;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

const BASE: &str = "/api/rootfolders";

/// One directory listing page from the folder browser endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FolderListing {
    /// Directory that was listed.
    pub path: String,
    /// Parent directory, absent at the filesystem root.
    #[serde(default)]
    pub parent: Option<String>,
    /// Child directories, as absolute paths.
    #[serde(default)]
    pub folders: Vec<String>,
}

/// CRUD over `/api/rootfolders`, writing results through the library cache.
#[derive(Clone)]
pub struct RootFoldersService {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
}

impl RootFoldersService {
    /// Service bound to one gateway client and the shared store.
    #[must_use]
    pub fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) -> Self {
        Self { client, dispatch }
    }

    /// Fetch all root folders and replace the cached list.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_all(&self, params: &[(&str, &str)]) -> Result<Vec<RootFolder>, ApiError> {
        let folders: Vec<RootFolder> = self.client.get(BASE, params).await?;
        let cached = folders.clone();
        self.dispatch
            .reduce_mut(|store| set_root_folders(&mut store.library, cached));
        Ok(folders)
    }

    /// Fetch one root folder and merge it into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_by_id(&self, id: i64) -> Result<RootFolder, ApiError> {
        let folder: RootFolder = self.client.get(&format!("{BASE}/{id}"), &[]).await?;
        let cached = folder.clone();
        self.dispatch
            .reduce_mut(|store| upsert_root_folder(&mut store.library, cached));
        Ok(folder)
    }

    /// Create a root folder and merge the server's record into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn create(&self, input: &RootFolderInput) -> Result<RootFolder, ApiError> {
        let folder: RootFolder = self.client.post(BASE, input).await?;
        let cached = folder.clone();
        self.dispatch
            .reduce_mut(|store| upsert_root_folder(&mut store.library, cached));
        Ok(folder)
    }

    /// Update a root folder; the server's record wins in the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn update(&self, id: i64, input: &RootFolderInput) -> Result<RootFolder, ApiError> {
        let folder: RootFolder = self.client.put(&format!("{BASE}/{id}"), input).await?;
        let cached = folder.clone();
        self.dispatch
            .reduce_mut(|store| upsert_root_folder(&mut store.library, cached));
        Ok(folder)
    }

    /// Delete a root folder and drop it from the cache. The backend rejects
    /// the delete with a 409 while series still live under the folder.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self.client.delete(&format!("{BASE}/{id}")).await?;
        self.dispatch
            .reduce_mut(|store| remove_root_folder(&mut store.library, id));
        Ok(())
    }

    /// List the directories under `path` on the backend host. An empty path
    /// lists the backend's default starting directory.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn browse(&self, path: &str) -> Result<FolderListing, ApiError> {
        let pair = [("path", path)];
        let params: &[(&str, &str)] = if path.is_empty() { &[] } else { &pair };
        self.client.get("/api/filesystem/browse", params).await
    }
}

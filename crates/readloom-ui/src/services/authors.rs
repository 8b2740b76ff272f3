//! Author resource service.

use crate::core::store::{AppStore, remove_author, set_authors, upsert_author};
use crate::services::api::{ApiClient, ApiError};
use readloom_api_models::{Author, AuthorInput};
use std::rc::Rc;
use yewdux::prelude::Dispatch;

const BASE: &str = "/api/authors";

/// CRUD over `/api/authors`, writing results through the library cache.
#[derive(Clone)]
pub struct AuthorsService {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
}

impl AuthorsService {
    /// Service bound to one gateway client and the shared store.
    #[must_use]
    pub fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) -> Self {
        Self { client, dispatch }
    }

    /// Fetch all authors, optionally filtered, and replace the cached list.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_all(&self, params: &[(&str, &str)]) -> Result<Vec<Author>, ApiError> {
        let authors: Vec<Author> = self.client.get(BASE, params).await?;
        let cached = authors.clone();
        self.dispatch
            .reduce_mut(|store| set_authors(&mut store.library, cached));
        Ok(authors)
    }

    /// Fetch one author and merge it into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_by_id(&self, id: i64) -> Result<Author, ApiError> {
        let author: Author = self.client.get(&format!("{BASE}/{id}"), &[]).await?;
        let cached = author.clone();
        self.dispatch
            .reduce_mut(|store| upsert_author(&mut store.library, cached));
        Ok(author)
    }

    /// Create an author and merge the server's record into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn create(&self, input: &AuthorInput) -> Result<Author, ApiError> {
        let author: Author = self.client.post(BASE, input).await?;
        let cached = author.clone();
        self.dispatch
            .reduce_mut(|store| upsert_author(&mut store.library, cached));
        Ok(author)
    }

    /// Update an author; the server's record wins in the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn update(&self, id: i64, input: &AuthorInput) -> Result<Author, ApiError> {
        let author: Author = self.client.put(&format!("{BASE}/{id}"), input).await?;
        let cached = author.clone();
        self.dispatch
            .reduce_mut(|store| upsert_author(&mut store.library, cached));
        Ok(author)
    }

    /// Delete an author and drop it from the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self.client.delete(&format!("{BASE}/{id}")).await?;
        self.dispatch
            .reduce_mut(|store| remove_author(&mut store.library, id));
        Ok(())
    }
}

//! Series resource service, including the nested volume and chapter
//! collections the series/volume/chapter modals edit.

use crate::core::store::{AppStore, remove_series, set_series, upsert_series};
use crate::services::api::{ApiClient, ApiError};
use readloom_api_models::{Chapter, ChapterInput, Series, SeriesInput, Volume, VolumeInput};
use std::rc::Rc;
use yewdux::prelude::Dispatch;

const BASE: &str = "/api/series";

/// CRUD over `/api/series`, writing results through the library cache.
#[derive(Clone)]
pub struct SeriesService {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
}

impl SeriesService {
    /// Service bound to one gateway client and the shared store.
    #[must_use]
    pub fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) -> Self {
        Self { client, dispatch }
    }

    /// Fetch all series, optionally filtered, and replace the cached list.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_all(&self, params: &[(&str, &str)]) -> Result<Vec<Series>, ApiError> {
        let series: Vec<Series> = self.client.get(BASE, params).await?;
        let cached = series.clone();
        self.dispatch
            .reduce_mut(|store| set_series(&mut store.library, cached));
        Ok(series)
    }

    /// Fetch one series and merge it into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_by_id(&self, id: i64) -> Result<Series, ApiError> {
        let series: Series = self.client.get(&format!("{BASE}/{id}"), &[]).await?;
        let cached = series.clone();
        self.dispatch
            .reduce_mut(|store| upsert_series(&mut store.library, cached));
        Ok(series)
    }

    /// Create a series and merge the server's record into the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn create(&self, input: &SeriesInput) -> Result<Series, ApiError> {
        let series: Series = self.client.post(BASE, input).await?;
        let cached = series.clone();
        self.dispatch
            .reduce_mut(|store| upsert_series(&mut store.library, cached));
        Ok(series)
    }

    /// Update a series; the server's record wins in the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn update(&self, id: i64, input: &SeriesInput) -> Result<Series, ApiError> {
        let series: Series = self.client.put(&format!("{BASE}/{id}"), input).await?;
        let cached = series.clone();
        self.dispatch
            .reduce_mut(|store| upsert_series(&mut store.library, cached));
        Ok(series)
    }

    /// Delete a series and drop it from the cache.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self.client.delete(&format!("{BASE}/{id}")).await?;
        self.dispatch
            .reduce_mut(|store| remove_series(&mut store.library, id));
        Ok(())
    }

    /// Fetch the volumes of a series, in shelf order.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn volumes(&self, series_id: i64) -> Result<Vec<Volume>, ApiError> {
        self.client
            .get(&format!("{BASE}/{series_id}/volumes"), &[])
            .await
    }

    /// Add a volume to a series.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn create_volume(
        &self,
        series_id: i64,
        input: &VolumeInput,
    ) -> Result<Volume, ApiError> {
        let volume = self
            .client
            .post(&format!("{BASE}/{series_id}/volumes"), input)
            .await?;
        self.refresh_counts(series_id).await;
        Ok(volume)
    }

    /// Update one volume of a series.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn update_volume(
        &self,
        series_id: i64,
        volume_id: i64,
        input: &VolumeInput,
    ) -> Result<Volume, ApiError> {
        self.client
            .put(&format!("{BASE}/{series_id}/volumes/{volume_id}"), input)
            .await
    }

    /// Remove one volume of a series.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn delete_volume(&self, series_id: i64, volume_id: i64) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self
            .client
            .delete(&format!("{BASE}/{series_id}/volumes/{volume_id}"))
            .await?;
        self.refresh_counts(series_id).await;
        Ok(())
    }

    /// Fetch the chapters of a series, in reading order.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn chapters(&self, series_id: i64) -> Result<Vec<Chapter>, ApiError> {
        self.client
            .get(&format!("{BASE}/{series_id}/chapters"), &[])
            .await
    }

    /// Add a chapter to a series.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn create_chapter(
        &self,
        series_id: i64,
        input: &ChapterInput,
    ) -> Result<Chapter, ApiError> {
        let chapter = self
            .client
            .post(&format!("{BASE}/{series_id}/chapters"), input)
            .await?;
        self.refresh_counts(series_id).await;
        Ok(chapter)
    }

    /// Update one chapter of a series.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn update_chapter(
        &self,
        series_id: i64,
        chapter_id: i64,
        input: &ChapterInput,
    ) -> Result<Chapter, ApiError> {
        self.client
            .put(&format!("{BASE}/{series_id}/chapters/{chapter_id}"), input)
            .await
    }

    /// Remove one chapter of a series.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn delete_chapter(&self, series_id: i64, chapter_id: i64) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self
            .client
            .delete(&format!("{BASE}/{series_id}/chapters/{chapter_id}"))
            .await?;
        self.refresh_counts(series_id).await;
        Ok(())
    }

    // Nested mutations change the parent's volume/chapter counts. Refresh is
    // best effort: the mutation already succeeded, and a fetch failure was
    // logged by the gateway.
    async fn refresh_counts(&self, series_id: i64) {
        if let Ok(series) = self
            .client
            .get::<Series>(&format!("{BASE}/{series_id}"), &[])
            .await
        {
            self.dispatch
                .reduce_mut(|store| upsert_series(&mut store.library, series));
        }
    }
}

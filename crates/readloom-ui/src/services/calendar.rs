//! Release calendar service.

use crate::core::store::{AppStore, remove_calendar_event, set_calendar, upsert_calendar_event};
use crate::services::api::{ApiClient, ApiError};
use readloom_api_models::{CalendarEvent, CalendarEventInput};
use std::rc::Rc;
use yewdux::prelude::Dispatch;

const BASE: &str = "/api/calendar";

/// CRUD over `/api/calendar`, writing results through the library cache.
#[derive(Clone)]
pub struct CalendarService {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
}

impl CalendarService {
    /// Service bound to one gateway client and the shared store.
    #[must_use]
    pub fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) -> Self {
        Self { client, dispatch }
    }

    /// Fetch the events in a window (`start`/`end` date params) and replace
    /// the cached window.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_all(&self, params: &[(&str, &str)]) -> Result<Vec<CalendarEvent>, ApiError> {
        let events: Vec<CalendarEvent> = self.client.get(BASE, params).await?;
        let cached = events.clone();
        self.dispatch
            .reduce_mut(|store| set_calendar(&mut store.library, cached));
        Ok(events)
    }

    /// Fetch one event and merge it into the cached window.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn get_by_id(&self, id: i64) -> Result<CalendarEvent, ApiError> {
        let event: CalendarEvent = self.client.get(&format!("{BASE}/{id}"), &[]).await?;
        let cached = event.clone();
        self.dispatch
            .reduce_mut(|store| upsert_calendar_event(&mut store.library, cached));
        Ok(event)
    }

    /// Create a manual event and merge it into the cached window.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn create(&self, input: &CalendarEventInput) -> Result<CalendarEvent, ApiError> {
        let event: CalendarEvent = self.client.post(BASE, input).await?;
        let cached = event.clone();
        self.dispatch
            .reduce_mut(|store| upsert_calendar_event(&mut store.library, cached));
        Ok(event)
    }

    /// Update an event; the server's record wins in the cached window.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn update(
        &self,
        id: i64,
        input: &CalendarEventInput,
    ) -> Result<CalendarEvent, ApiError> {
        let event: CalendarEvent = self.client.put(&format!("{BASE}/{id}"), input).await?;
        let cached = event.clone();
        self.dispatch
            .reduce_mut(|store| upsert_calendar_event(&mut store.library, cached));
        Ok(event)
    }

    /// Delete an event and drop it from the cached window.
    ///
    /// # Errors
    /// Propagates the gateway's normalized [`ApiError`].
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self.client.delete(&format!("{BASE}/{id}")).await?;
        self.dispatch
            .reduce_mut(|store| remove_calendar_event(&mut store.library, id));
        Ok(())
    }
}

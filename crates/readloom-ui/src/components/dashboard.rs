//! Dashboard page: library totals, recent series, and upcoming releases.

use crate::app::api::ApiCtx;
use crate::core::store::AppStore;
use crate::models::{LibraryOverview, overview_from_parts};
use crate::services::authors::AuthorsService;
use crate::services::calendar::CalendarService;
use crate::services::series::SeriesService;
use chrono::Days;
use readloom_api_models::{CalendarEvent, Series};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

/// How far ahead the upcoming-releases fetch looks, in days.
const UPCOMING_WINDOW_DAYS: u64 = 60;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let Some(api) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let overview = use_state(LibraryOverview::default);

    {
        let overview = overview.clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                let series_svc = SeriesService::new(api.client.clone(), dispatch.clone());
                let authors_svc = AuthorsService::new(api.client.clone(), dispatch.clone());
                let calendar_svc = CalendarService::new(api.client.clone(), dispatch.clone());
                spawn_local(async move {
                    let today = chrono::Local::now().date_naive();
                    let horizon = today
                        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
                        .unwrap_or(today);
                    let start = today.to_string();
                    let end = horizon.to_string();

                    // The three fetches are independent; the overview flips to
                    // loaded only after all of them settle.
                    let (series, authors, events) = futures::join!(
                        series_svc.get_all(&[]),
                        authors_svc.get_all(&[]),
                        calendar_svc.get_all(&[("start", start.as_str()), ("end", end.as_str())]),
                    );

                    let series = series.unwrap_or_else(|err| {
                        dispatch.reduce_mut(|store| store.toasts.error(err.message()));
                        Vec::new()
                    });
                    let authors = authors.unwrap_or_else(|err| {
                        dispatch.reduce_mut(|store| store.toasts.error(err.message()));
                        Vec::new()
                    });
                    let events = events.unwrap_or_else(|err| {
                        dispatch.reduce_mut(|store| store.toasts.error(err.message()));
                        Vec::new()
                    });

                    overview.set(overview_from_parts(&series, &authors, &events, today));
                });
                || ()
            },
            (),
        );
    }

    if !overview.loaded {
        return html! { <div class="page-loading">{"Loading library…"}</div> };
    }

    html! {
        <div class="dashboard">
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-value">{overview.series_count}</span>
                    <span class="stat-label">{"Series"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{overview.author_count}</span>
                    <span class="stat-label">{"Authors"}</span>
                </div>
            </div>
            <section class="dashboard-section">
                <h2>{"Recently updated"}</h2>
                {if overview.recent_series.is_empty() {
                    html! { <p class="muted">{"Nothing here yet. Add a series from the library page."}</p> }
                } else {
                    html! {
                        <ul class="recent-list">
                            {for overview.recent_series.iter().map(recent_row)}
                        </ul>
                    }
                }}
            </section>
            <section class="dashboard-section">
                <h2>{"Upcoming releases"}</h2>
                {if overview.upcoming.is_empty() {
                    html! { <p class="muted">{"No releases in the next two months."}</p> }
                } else {
                    html! {
                        <ul class="upcoming-list">
                            {for overview.upcoming.iter().map(upcoming_row)}
                        </ul>
                    }
                }}
            </section>
        </div>
    }
}

fn recent_row(series: &Series) -> Html {
    html! {
        <li key={series.id.to_string()} class="recent-row">
            <span class="title">{series.shelf_title().to_string()}</span>
            <span class="muted">{series.media_type.label()}</span>
        </li>
    }
}

fn upcoming_row(event: &CalendarEvent) -> Html {
    html! {
        <li key={event.id.to_string()} class="upcoming-row">
            <span class="date">{event.event_date.to_string()}</span>
            <span class="title">{event.title.clone()}</span>
        </li>
    }
}

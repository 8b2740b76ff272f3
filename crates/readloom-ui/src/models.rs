//! View models derived from API data.

use chrono::NaiveDate;
use readloom_api_models::{Author, CalendarEvent, Series};

/// How many recently-updated series the dashboard shows.
pub const RECENT_SERIES_LIMIT: usize = 6;

/// How many upcoming releases the dashboard shows.
pub const UPCOMING_LIMIT: usize = 8;

/// Aggregated dashboard state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LibraryOverview {
    /// Total series in the library.
    pub series_count: usize,
    /// Total authors in the library.
    pub author_count: usize,
    /// Most recently updated series, newest first.
    pub recent_series: Vec<Series>,
    /// Releases dated today or later, soonest first.
    pub upcoming: Vec<CalendarEvent>,
    /// Whether the initial fetches have finished.
    pub loaded: bool,
}

/// Fold the three dashboard fetches into one view model. Pure so the
/// selection and ordering rules are host-testable.
#[must_use]
pub fn overview_from_parts(
    series: &[Series],
    authors: &[Author],
    events: &[CalendarEvent],
    today: NaiveDate,
) -> LibraryOverview {
    let mut recent: Vec<Series> = series.to_vec();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
    recent.truncate(RECENT_SERIES_LIMIT);

    let mut upcoming: Vec<CalendarEvent> = events
        .iter()
        .filter(|event| event.event_date >= today)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.event_date.cmp(&b.event_date).then(a.id.cmp(&b.id)));
    upcoming.truncate(UPCOMING_LIMIT);

    LibraryOverview {
        series_count: series.len(),
        author_count: authors.len(),
        recent_series: recent,
        upcoming,
        loaded: true,
    }
}

#[cfg(test)]
mod tests {
    use super::{RECENT_SERIES_LIMIT, overview_from_parts};
    use chrono::NaiveDate;
    use readloom_api_models::{
        CalendarEvent, CalendarEventKind, MediaType, Series, SeriesStatus,
    };

    fn series(id: i64, updated: Option<&str>) -> Series {
        Series {
            id,
            title: format!("series-{id}"),
            sort_title: None,
            description: None,
            author: None,
            publisher: None,
            media_type: MediaType::Manga,
            status: SeriesStatus::Ongoing,
            cover_url: None,
            volume_count: 0,
            chapter_count: 0,
            collection_ids: Vec::new(),
            created_at: None,
            updated_at: updated.map(|value| {
                format!("{value}T12:00:00Z").parse().expect("timestamp")
            }),
        }
    }

    fn event(id: i64, date: &str) -> CalendarEvent {
        CalendarEvent {
            id,
            series_id: 1,
            title: format!("event-{id}"),
            event_date: date.parse().expect("date"),
            kind: CalendarEventKind::VolumeRelease,
        }
    }

    #[test]
    fn recent_series_are_newest_first_and_capped() {
        let all: Vec<Series> = (1..=10)
            .map(|id| series(id, Some(if id == 7 { "2026-08-20" } else { "2026-01-01" })))
            .collect();
        let overview = overview_from_parts(
            &all,
            &[],
            &[],
            NaiveDate::from_ymd_opt(2026, 8, 29).expect("date"),
        );
        assert_eq!(overview.series_count, 10);
        assert_eq!(overview.recent_series.len(), RECENT_SERIES_LIMIT);
        assert_eq!(overview.recent_series[0].id, 7);
        assert!(overview.loaded);
    }

    #[test]
    fn upcoming_keeps_today_and_later_sorted() {
        let events = [
            event(1, "2026-08-28"),
            event(2, "2026-09-15"),
            event(3, "2026-08-29"),
            event(4, "2026-09-01"),
        ];
        let overview = overview_from_parts(
            &[],
            &[],
            &events,
            NaiveDate::from_ymd_opt(2026, 8, 29).expect("date"),
        );
        let ids: Vec<i64> = overview.upcoming.iter().map(|e| e.id).collect();
        assert_eq!(ids, [3, 4, 2]);
    }
}

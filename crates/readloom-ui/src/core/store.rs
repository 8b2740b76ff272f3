//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Slices hold pure data; mutation helpers live beside them so reducers
//!   stay small and host-testable.
//! - New subscribers always observe the latest slice values, which is what
//!   gives the modal registry and library caches their replay-latest
//!   broadcast semantics.

use crate::core::modal::ModalRegistry;
use crate::core::theme::ThemeMode;
use crate::core::toast::ToastState;
use readloom_api_models::{Author, CalendarEvent, Collection, RootFolder, Series};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Modal channel registry.
    pub modals: ModalRegistry,
    /// Active toast notifications.
    pub toasts: ToastState,
    /// Active theme; mirrors the persisted preference.
    pub theme: ThemeMode,
    /// Cached entity lists.
    pub library: LibraryState,
}

/// Cached last-fetched entity lists.
///
/// `None` means "never fetched". The cache is not a source of truth: every
/// successful server response replaces or merges into it (last write wins),
/// and it is never used to skip a network call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LibraryState {
    /// Most recent series list.
    pub series: Option<Vec<Series>>,
    /// Most recent author list.
    pub authors: Option<Vec<Author>>,
    /// Most recent collection list.
    pub collections: Option<Vec<Collection>>,
    /// Most recent root folder list.
    pub root_folders: Option<Vec<RootFolder>>,
    /// Most recent calendar window.
    pub calendar: Option<Vec<CalendarEvent>>,
}

fn upsert_by_id<T>(list: &mut Option<Vec<T>>, item: T, id_of: fn(&T) -> i64) {
    let items = list.get_or_insert_with(Vec::new);
    if let Some(existing) = items.iter_mut().find(|it| id_of(it) == id_of(&item)) {
        *existing = item;
    } else {
        items.push(item);
    }
}

fn remove_by_id<T>(list: &mut Option<Vec<T>>, id: i64, id_of: fn(&T) -> i64) {
    if let Some(items) = list.as_mut() {
        items.retain(|it| id_of(it) != id);
    }
}

/// Replace the cached series list with a fresh fetch.
pub fn set_series(library: &mut LibraryState, series: Vec<Series>) {
    library.series = Some(series);
}

/// Merge one server-confirmed series into the cache.
pub fn upsert_series(library: &mut LibraryState, series: Series) {
    upsert_by_id(&mut library.series, series, |s| s.id);
}

/// Drop a deleted series from the cache.
pub fn remove_series(library: &mut LibraryState, id: i64) {
    remove_by_id(&mut library.series, id, |s| s.id);
}

/// Replace the cached author list with a fresh fetch.
pub fn set_authors(library: &mut LibraryState, authors: Vec<Author>) {
    library.authors = Some(authors);
}

/// Merge one server-confirmed author into the cache.
pub fn upsert_author(library: &mut LibraryState, author: Author) {
    upsert_by_id(&mut library.authors, author, |a| a.id);
}

/// Drop a deleted author from the cache.
pub fn remove_author(library: &mut LibraryState, id: i64) {
    remove_by_id(&mut library.authors, id, |a| a.id);
}

/// Replace the cached collection list with a fresh fetch.
pub fn set_collections(library: &mut LibraryState, collections: Vec<Collection>) {
    library.collections = Some(collections);
}

/// Merge one server-confirmed collection into the cache.
pub fn upsert_collection(library: &mut LibraryState, collection: Collection) {
    upsert_by_id(&mut library.collections, collection, |c| c.id);
}

/// Drop a deleted collection from the cache.
pub fn remove_collection(library: &mut LibraryState, id: i64) {
    remove_by_id(&mut library.collections, id, |c| c.id);
}

/// Replace the cached root folder list with a fresh fetch.
pub fn set_root_folders(library: &mut LibraryState, folders: Vec<RootFolder>) {
    library.root_folders = Some(folders);
}

/// Merge one server-confirmed root folder into the cache.
pub fn upsert_root_folder(library: &mut LibraryState, folder: RootFolder) {
    upsert_by_id(&mut library.root_folders, folder, |f| f.id);
}

/// Drop a deleted root folder from the cache.
pub fn remove_root_folder(library: &mut LibraryState, id: i64) {
    remove_by_id(&mut library.root_folders, id, |f| f.id);
}

/// Replace the cached calendar window with a fresh fetch.
pub fn set_calendar(library: &mut LibraryState, events: Vec<CalendarEvent>) {
    library.calendar = Some(events);
}

/// Merge one server-confirmed calendar entry into the cache.
pub fn upsert_calendar_event(library: &mut LibraryState, event: CalendarEvent) {
    upsert_by_id(&mut library.calendar, event, |e| e.id);
}

/// Drop a deleted calendar entry from the cache.
pub fn remove_calendar_event(library: &mut LibraryState, id: i64) {
    remove_by_id(&mut library.calendar, id, |e| e.id);
}

#[cfg(test)]
mod tests {
    use super::{
        LibraryState, remove_author, remove_series, set_authors, set_series, upsert_author,
        upsert_series,
    };
    use readloom_api_models::{Author, Series};

    fn series(id: i64, title: &str) -> Series {
        Series {
            id,
            title: title.to_string(),
            sort_title: None,
            description: None,
            author: None,
            publisher: None,
            media_type: readloom_api_models::MediaType::Manga,
            status: readloom_api_models::SeriesStatus::Ongoing,
            cover_url: None,
            volume_count: 0,
            chapter_count: 0,
            collection_ids: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn author(id: i64, name: &str) -> Author {
        Author {
            id,
            name: name.to_string(),
            biography: None,
            series_count: 0,
        }
    }

    #[test]
    fn create_writes_through_to_the_cache() {
        let mut library = LibraryState::default();
        set_authors(&mut library, vec![author(1, "Naoki Urasawa")]);
        upsert_author(&mut library, author(2, "Kentaro Miura"));
        let cached = library.authors.as_ref().expect("cache");
        assert!(cached.iter().any(|a| a.id == 2));
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn delete_writes_through_to_the_cache() {
        let mut library = LibraryState::default();
        set_authors(&mut library, vec![author(1, "A"), author(2, "B")]);
        remove_author(&mut library, 1);
        let cached = library.authors.as_ref().expect("cache");
        assert!(!cached.iter().any(|a| a.id == 1));
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn server_response_wins_on_update() {
        let mut library = LibraryState::default();
        set_series(&mut library, vec![series(5, "Monster"), series(6, "Pluto")]);
        upsert_series(&mut library, series(5, "Monster (Perfect Edition)"));
        let cached = library.series.as_ref().expect("cache");
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].title, "Monster (Perfect Edition)");
    }

    #[test]
    fn upsert_into_unfetched_cache_seeds_it() {
        let mut library = LibraryState::default();
        upsert_series(&mut library, series(9, "Frieren"));
        assert_eq!(library.series.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn remove_on_unfetched_cache_is_a_no_op() {
        let mut library = LibraryState::default();
        remove_series(&mut library, 42);
        assert!(library.series.is_none());
    }
}

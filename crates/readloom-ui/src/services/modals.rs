//! Convenience wrappers over the modal registry for callers that only have a
//! `Dispatch` in hand.

use crate::core::modal::{
    BookDetails, ImportSummary, MangaDetails, ModalConfig, ModalId, ModalPayload, ModalResult,
    ModalSize,
};
use crate::core::store::AppStore;
use readloom_api_models::{Chapter, Series, Volume};
use yewdux::prelude::Dispatch;

/// Open any modal channel with a prepared config.
pub fn open_modal(dispatch: &Dispatch<AppStore>, config: ModalConfig) {
    dispatch.reduce_mut(|store| store.modals.open(config));
}

/// Close a modal channel.
pub fn close_modal(dispatch: &Dispatch<AppStore>, id: ModalId) {
    dispatch.reduce_mut(|store| store.modals.close(id));
}

/// Publish a result on a modal channel.
pub fn set_modal_result(dispatch: &Dispatch<AppStore>, id: ModalId, result: ModalResult) {
    dispatch.reduce_mut(|store| store.modals.set_result(id, result));
}

/// Show the read-only detail sheet for a book-like series.
pub fn show_book_details(dispatch: &Dispatch<AppStore>, series: Series, volumes: Vec<Volume>) {
    let config = ModalConfig::new(ModalId::BookDetails, series.shelf_title())
        .with_size(ModalSize::Large)
        .scrollable()
        .with_data(ModalPayload::BookDetails(BookDetails {
            series: Some(series),
            volumes,
        }));
    open_modal(dispatch, config);
}

/// Show the read-only detail sheet for a manga-like series.
pub fn show_manga_details(dispatch: &Dispatch<AppStore>, series: Series, chapters: Vec<Chapter>) {
    let config = ModalConfig::new(ModalId::MangaDetails, series.shelf_title())
        .with_size(ModalSize::Large)
        .scrollable()
        .with_data(ModalPayload::MangaDetails(MangaDetails {
            series: Some(series),
            chapters,
        }));
    open_modal(dispatch, config);
}

/// Show the post-import summary.
pub fn show_import_success(dispatch: &Dispatch<AppStore>, summary: ImportSummary) {
    let config = ModalConfig::new(ModalId::ImportSuccess, "Import complete")
        .centered()
        .with_data(ModalPayload::ImportSummary(summary));
    open_modal(dispatch, config);
}

#[cfg(test)]
mod tests {
    use super::{close_modal, open_modal, show_book_details, show_import_success, show_manga_details};
    use crate::core::modal::{ImportSummary, ModalConfig, ModalId, ModalPayload};
    use crate::core::store::AppStore;
    use readloom_api_models::{MediaType, Series, SeriesStatus};
    use yewdux::prelude::Dispatch;

    fn series(media_type: MediaType, title: &str) -> Series {
        Series {
            id: 1,
            title: title.to_string(),
            sort_title: None,
            description: None,
            author: None,
            publisher: None,
            media_type,
            status: SeriesStatus::Ongoing,
            cover_url: None,
            volume_count: 0,
            chapter_count: 0,
            collection_ids: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn detail_sheets_use_their_fixed_channels() {
        let dispatch = Dispatch::<AppStore>::new();
        show_book_details(&dispatch, series(MediaType::Book, "Dune"), Vec::new());
        show_manga_details(&dispatch, series(MediaType::Manga, "Monster"), Vec::new());

        let store = dispatch.get();
        assert!(store.modals.is_open(ModalId::BookDetails));
        assert!(store.modals.is_open(ModalId::MangaDetails));
        let config = store.modals.config(ModalId::BookDetails).expect("config");
        assert!(matches!(config.data, ModalPayload::BookDetails(_)));
        assert_eq!(config.title, "Dune");
    }

    #[test]
    fn import_summary_payload_reaches_the_channel() {
        let dispatch = Dispatch::<AppStore>::new();
        show_import_success(
            &dispatch,
            ImportSummary {
                imported: 12,
                skipped: 3,
                source: "AniList".to_string(),
            },
        );
        let store = dispatch.get();
        let config = store.modals.config(ModalId::ImportSuccess).expect("config");
        match &config.data {
            ModalPayload::ImportSummary(summary) => {
                assert_eq!(summary.imported, 12);
                assert_eq!(summary.source, "AniList");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn open_and_close_round_trip() {
        let dispatch = Dispatch::<AppStore>::new();
        open_modal(&dispatch, ModalConfig::new(ModalId::SetupWizard, "Setup"));
        assert!(dispatch.get().modals.is_open(ModalId::SetupWizard));
        close_modal(&dispatch, ModalId::SetupWizard);
        assert!(!dispatch.get().modals.is_open(ModalId::SetupWizard));
    }
}

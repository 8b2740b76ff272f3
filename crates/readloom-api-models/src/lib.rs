#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
//! Shared HTTP DTOs for the Readloom public API.
//!
//! These types mirror the JSON payloads exchanged with the Readloom backend
//! (`/api/...`). They are kept free of UI concerns so the front end and any
//! future CLI share one wire contract. Identifiers are the backend's integer
//! primary keys; timestamps and release dates use RFC 3339 / ISO 8601 via
//! `chrono`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Content type of a series, matching the backend's enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    /// Japanese comics.
    Manga,
    /// Korean comics.
    Manhwa,
    /// Chinese comics.
    Manhua,
    /// Western comics.
    Comics,
    /// Prose novels and light novels.
    Novel,
    /// Plain books.
    Book,
    /// Anything that does not fit the above.
    Other,
}

impl MediaType {
    /// Every media type, in display order for select controls.
    pub const ALL: [Self; 7] = [
        Self::Manga,
        Self::Manhwa,
        Self::Manhua,
        Self::Comics,
        Self::Novel,
        Self::Book,
        Self::Other,
    ];

    /// Whether this media type is rendered with the manga-style detail view.
    #[must_use]
    pub const fn is_comic_like(self) -> bool {
        matches!(self, Self::Manga | Self::Manhwa | Self::Manhua | Self::Comics)
    }

    /// The backend's wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manga => "MANGA",
            Self::Manhwa => "MANHWA",
            Self::Manhua => "MANHUA",
            Self::Comics => "COMICS",
            Self::Novel => "NOVEL",
            Self::Book => "BOOK",
            Self::Other => "OTHER",
        }
    }

    /// Parse the backend's wire spelling.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Human-readable label for pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manga => "Manga",
            Self::Manhwa => "Manhwa",
            Self::Manhua => "Manhua",
            Self::Comics => "Comics",
            Self::Novel => "Novel",
            Self::Book => "Book",
            Self::Other => "Other",
        }
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self::Manga
    }
}

/// Publication status of a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesStatus {
    /// Still being published.
    Ongoing,
    /// Publication finished.
    Completed,
    /// Publication paused by the publisher.
    Hiatus,
    /// Publication cancelled before completion.
    Cancelled,
    /// Status not known to the metadata source.
    Unknown,
}

impl SeriesStatus {
    /// Every status, in display order for select controls.
    pub const ALL: [Self; 5] = [
        Self::Ongoing,
        Self::Completed,
        Self::Hiatus,
        Self::Cancelled,
        Self::Unknown,
    ];

    /// The backend's wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ONGOING",
            Self::Completed => "COMPLETED",
            Self::Hiatus => "HIATUS",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse the backend's wire spelling.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Human-readable label for pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Hiatus => "On hiatus",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

impl Default for SeriesStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

/// A tracked series (manga, book, comic, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Series {
    /// Backend identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Title used for shelf ordering when it differs from the display title.
    pub sort_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Free-form synopsis.
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Primary author/mangaka name.
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Publisher name.
    pub publisher: Option<String>,
    /// Content type driving list/detail presentation.
    #[serde(default)]
    pub media_type: MediaType,
    /// Publication status.
    #[serde(default)]
    pub status: SeriesStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Cover image URL, when one is known.
    pub cover_url: Option<String>,
    /// Number of volumes tracked for the series.
    #[serde(default)]
    pub volume_count: u32,
    /// Number of chapters tracked for the series.
    #[serde(default)]
    pub chapter_count: u32,
    /// Collections this series belongs to.
    #[serde(default)]
    pub collection_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Creation timestamp assigned by the backend.
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Last modification timestamp assigned by the backend.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Series {
    /// Title used for alphabetical shelf ordering.
    #[must_use]
    pub fn shelf_title(&self) -> &str {
        self.sort_title.as_deref().unwrap_or(&self.title)
    }
}

/// Payload for creating or updating a series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesInput {
    /// Display title.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional shelf-ordering title.
    pub sort_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional synopsis.
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional author name.
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional publisher name.
    pub publisher: Option<String>,
    /// Content type.
    #[serde(default)]
    pub media_type: MediaType,
    /// Publication status.
    #[serde(default)]
    pub status: SeriesStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional cover image URL.
    pub cover_url: Option<String>,
}

/// A physical or digital volume of a series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Volume {
    /// Backend identifier.
    pub id: i64,
    /// Owning series.
    pub series_id: i64,
    /// Volume number; fractional numbers cover omnibus/half volumes.
    pub number: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Volume title when it differs from "Volume N".
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Scheduled or actual release date.
    pub release_date: Option<NaiveDate>,
    /// Whether the volume is owned in the user's collection.
    #[serde(default)]
    pub owned: bool,
    /// Whether the volume has been read.
    #[serde(default)]
    pub read: bool,
}

/// Payload for creating or updating a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VolumeInput {
    /// Volume number.
    pub number: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional volume title.
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional release date.
    pub release_date: Option<NaiveDate>,
    /// Ownership flag.
    #[serde(default)]
    pub owned: bool,
    /// Read flag.
    #[serde(default)]
    pub read: bool,
}

/// A chapter of a series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Backend identifier.
    pub id: i64,
    /// Owning series.
    pub series_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Owning volume, when the chapter has been collected.
    pub volume_id: Option<i64>,
    /// Chapter number; fractional numbers cover extras and side stories.
    pub number: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Chapter title.
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Scheduled or actual release date.
    pub release_date: Option<NaiveDate>,
    /// Whether the chapter has been read.
    #[serde(default)]
    pub read: bool,
}

/// Payload for creating or updating a chapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChapterInput {
    /// Chapter number.
    pub number: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional owning volume.
    pub volume_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional chapter title.
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional release date.
    pub release_date: Option<NaiveDate>,
    /// Read flag.
    #[serde(default)]
    pub read: bool,
}

/// An author/artist tracked in the library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Backend identifier.
    pub id: i64,
    /// Author name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Free-form biography.
    pub biography: Option<String>,
    /// Number of series in the library attributed to this author.
    #[serde(default)]
    pub series_count: u32,
}

/// Payload for creating or updating an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorInput {
    /// Author name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional biography.
    pub biography: Option<String>,
}

/// A user-defined grouping of series with its own root folders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    /// Backend identifier.
    pub id: i64,
    /// Collection name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Free-form description.
    pub description: Option<String>,
    /// Root folders linked to this collection.
    #[serde(default)]
    pub root_folder_ids: Vec<i64>,
    /// Whether this is the default collection for new series.
    #[serde(default)]
    pub is_default: bool,
}

/// Payload for creating or updating a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionInput {
    /// Collection name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional description.
    pub description: Option<String>,
    /// Whether this collection becomes the default.
    #[serde(default)]
    pub is_default: bool,
}

/// A filesystem root under which series folders are created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootFolder {
    /// Backend identifier.
    pub id: i64,
    /// Absolute path on the backend host.
    pub path: String,
    /// Display name for the folder.
    pub name: String,
}

/// Payload for creating or updating a root folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootFolderInput {
    /// Absolute path on the backend host.
    pub path: String,
    /// Display name for the folder.
    pub name: String,
}

/// Kind of a calendar entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarEventKind {
    /// A volume release date.
    VolumeRelease,
    /// A chapter release date.
    ChapterRelease,
}

/// An upcoming or past release surfaced on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Backend identifier.
    pub id: i64,
    /// Series the release belongs to.
    pub series_id: i64,
    /// Display title, e.g. "One Piece Vol. 108".
    pub title: String,
    /// Release date.
    pub event_date: NaiveDate,
    /// Whether the entry is a volume or chapter release.
    pub kind: CalendarEventKind,
}

/// Payload for creating or updating a manual calendar entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEventInput {
    /// Series the release belongs to.
    pub series_id: i64,
    /// Display title.
    pub title: String,
    /// Release date.
    pub event_date: NaiveDate,
    /// Entry kind.
    pub kind: CalendarEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_uses_backend_spelling() {
        let json = serde_json::to_string(&MediaType::Manga).expect("serialize");
        assert_eq!(json, "\"MANGA\"");
        let parsed: MediaType = serde_json::from_str("\"COMICS\"").expect("deserialize");
        assert_eq!(parsed, MediaType::Comics);
    }

    #[test]
    fn enum_helpers_agree_with_serde_spelling() {
        for kind in MediaType::ALL {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(MediaType::from_value(kind.as_str()), Some(kind));
        }
        for status in SeriesStatus::ALL {
            let json = serde_json::to_string(&status).expect("serialize");
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(SeriesStatus::from_value(status.as_str()), Some(status));
        }
        assert_eq!(MediaType::from_value("VHS"), None);
    }

    #[test]
    fn series_tolerates_minimal_payload() {
        let series: Series =
            serde_json::from_str(r#"{"id": 7, "title": "Vinland Saga"}"#).expect("deserialize");
        assert_eq!(series.id, 7);
        assert_eq!(series.media_type, MediaType::Manga);
        assert_eq!(series.status, SeriesStatus::Unknown);
        assert!(series.collection_ids.is_empty());
        assert_eq!(series.shelf_title(), "Vinland Saga");
    }

    #[test]
    fn shelf_title_prefers_sort_title() {
        let series: Series = serde_json::from_str(
            r#"{"id": 1, "title": "The Promised Neverland", "sort_title": "Promised Neverland, The"}"#,
        )
        .expect("deserialize");
        assert_eq!(series.shelf_title(), "Promised Neverland, The");
    }

    #[test]
    fn input_omits_unset_optionals() {
        let input = SeriesInput {
            title: "Dune".to_string(),
            media_type: MediaType::Book,
            ..SeriesInput::default()
        };
        let json = serde_json::to_string(&input).expect("serialize");
        assert!(!json.contains("description"));
        assert!(json.contains("\"BOOK\""));
    }

    #[test]
    fn comic_like_split_matches_detail_views() {
        assert!(MediaType::Manhwa.is_comic_like());
        assert!(!MediaType::Novel.is_comic_like());
    }
}

//! Modal orchestration registry.
//!
//! # Design
//! - Dozens of mutually-unaware form components each own one named channel;
//!   any caller can open a channel by id and read its result without holding
//!   a reference to the owning component.
//! - Channel ids and result actions are closed enums. The literal strings are
//!   the cross-component wire contract and must not change.
//! - Each channel has two independent slots: the open/closed `config` and a
//!   `result` side-channel. Opening a channel clears its result slot first, so
//!   a stale result from a previous opening is never observed.
//! - The registry lives in the app store; subscribers always observe the
//!   latest slot values (replay-latest broadcast), and late subscribers still
//!   see a result that was set before they attached.

use readloom_api_models::{Chapter, RootFolder, Series, Volume};
use std::collections::HashMap;

/// Closed set of modal channel identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    /// Yes/no gate in front of destructive actions.
    DeleteConfirmation,
    /// Read-only detail sheet for book-like series.
    BookDetails,
    /// Read-only detail sheet for manga-like series.
    MangaDetails,
    /// Summary shown after a metadata import finishes.
    ImportSuccess,
    /// Create a root folder.
    AddRootFolder,
    /// Edit an existing root folder.
    EditRootFolder,
    /// Link a root folder to a collection.
    LinkRootFolder,
    /// Create or edit a series.
    Series,
    /// Create or edit a volume.
    Volume,
    /// Create or edit a chapter.
    Chapter,
    /// First-run setup wizard.
    SetupWizard,
    /// Attach a root folder from within a collection form.
    AddRootFolderToCollection,
    /// Server-side folder picker.
    FolderBrowser,
}

impl ModalId {
    /// Every known channel id.
    pub const ALL: [Self; 13] = [
        Self::DeleteConfirmation,
        Self::BookDetails,
        Self::MangaDetails,
        Self::ImportSuccess,
        Self::AddRootFolder,
        Self::EditRootFolder,
        Self::LinkRootFolder,
        Self::Series,
        Self::Volume,
        Self::Chapter,
        Self::SetupWizard,
        Self::AddRootFolderToCollection,
        Self::FolderBrowser,
    ];

    /// The channel's wire id. These strings are shared between unrelated
    /// components and are part of the application contract.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeleteConfirmation => "deleteConfirmationModal",
            Self::BookDetails => "bookDetailsModal",
            Self::MangaDetails => "mangaDetailsModal",
            Self::ImportSuccess => "importSuccessModal",
            Self::AddRootFolder => "addRootFolderModal",
            Self::EditRootFolder => "editRootFolderModal",
            Self::LinkRootFolder => "linkRootFolderModal",
            Self::Series => "seriesModal",
            Self::Volume => "volumeModal",
            Self::Chapter => "chapterModal",
            Self::SetupWizard => "setupWizardModal",
            Self::AddRootFolderToCollection => "addRootFolderToCollectionModal",
            Self::FolderBrowser => "folderBrowserModal",
        }
    }

    /// Resolve a wire id back to a channel.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == key)
    }
}

/// Result action published by a closing modal. Callers compare these by
/// variant; the string values are the historical wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalAction {
    /// A new record was saved.
    Save,
    /// An existing record was updated.
    Update,
    /// A confirmation prompt was accepted.
    Confirm,
    /// A root folder was linked.
    Link,
    /// An item was added.
    Add,
    /// An item was moved.
    Move,
    /// A wizard completed.
    Finish,
    /// A choice was picked (folder browser, selection lists).
    Select,
    /// The dialog was declined or dismissed.
    Cancel,
}

impl ModalAction {
    /// The action's wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Update => "update",
            Self::Confirm => "confirm",
            Self::Link => "link",
            Self::Add => "add",
            Self::Move => "move",
            Self::Finish => "finish",
            Self::Select => "select",
            Self::Cancel => "cancel",
        }
    }
}

/// Dialog width presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    /// Narrow dialog for confirmations.
    Small,
    /// Default width.
    #[default]
    Medium,
    /// Wide dialog for forms.
    Large,
    /// Near-fullscreen dialog for browsers/wizards.
    ExtraLarge,
}

impl ModalSize {
    /// CSS suffix for the size preset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
            Self::ExtraLarge => "xl",
        }
    }
}

/// Severity of a confirmation prompt, driving icon and button color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmTone {
    /// Caution icon, warning button.
    Warning,
    /// Trash icon, red header and button.
    Danger,
    /// Neutral icon and button.
    #[default]
    Info,
}

impl ConfirmTone {
    /// Icon class for the prompt header.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Warning => "icon-warning",
            Self::Danger => "icon-trash",
            Self::Info => "icon-info",
        }
    }

    /// Button class for the affirmative action.
    #[must_use]
    pub const fn button_class(self) -> &'static str {
        match self {
            Self::Warning => "btn-warning",
            Self::Danger => "btn-error",
            Self::Info => "btn-info",
        }
    }
}

/// Text and severity of a confirmation prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    /// Dialog title.
    pub title: String,
    /// Body text describing the action being gated.
    pub message: String,
    /// Label for the affirmative button.
    pub confirm_text: String,
    /// Label for the negative button.
    pub cancel_text: String,
    /// Visual severity.
    pub tone: ConfirmTone,
}

impl ConfirmPrompt {
    /// Prompt shown before deleting `item_name`.
    #[must_use]
    pub fn delete(item_name: &str) -> Self {
        Self {
            title: "Confirm deletion".to_string(),
            message: format!(
                "Are you sure you want to delete {item_name}? This action cannot be undone."
            ),
            confirm_text: "Delete".to_string(),
            cancel_text: "Cancel".to_string(),
            tone: ConfirmTone::Danger,
        }
    }

    /// Cautionary prompt with custom copy.
    #[must_use]
    pub fn warning(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            confirm_text: "Continue".to_string(),
            cancel_text: "Cancel".to_string(),
            tone: ConfirmTone::Warning,
        }
    }

    /// Neutral prompt with custom copy.
    #[must_use]
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            confirm_text: "OK".to_string(),
            cancel_text: "Cancel".to_string(),
            tone: ConfirmTone::Info,
        }
    }
}

/// Detail payload for book-like series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookDetails {
    /// The series being shown.
    pub series: Option<Series>,
    /// Volumes of the series, in shelf order.
    pub volumes: Vec<Volume>,
}

/// Detail payload for manga-like series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MangaDetails {
    /// The series being shown.
    pub series: Option<Series>,
    /// Chapters of the series, in reading order.
    pub chapters: Vec<Chapter>,
}

/// Outcome summary for a finished metadata import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of records created.
    pub imported: u32,
    /// Number of records skipped as duplicates.
    pub skipped: u32,
    /// Name of the metadata source.
    pub source: String,
}

/// Typed payload carried by a modal config or result, keyed by channel
/// family. Replaces the untyped `data` blob so consumers never guess shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalPayload {
    /// No payload.
    #[default]
    None,
    /// Confirmation prompt copy for `deleteConfirmationModal`.
    Confirm(ConfirmPrompt),
    /// Detail sheet payload for `bookDetailsModal`.
    BookDetails(BookDetails),
    /// Detail sheet payload for `mangaDetailsModal`.
    MangaDetails(MangaDetails),
    /// Summary payload for `importSuccessModal`.
    ImportSummary(ImportSummary),
    /// Series form seed: `None` creates, `Some` edits.
    SeriesForm(Option<Series>),
    /// Volume form seed for a series.
    VolumeForm {
        /// Owning series.
        series_id: i64,
        /// Existing volume when editing.
        volume: Option<Volume>,
    },
    /// Chapter form seed for a series.
    ChapterForm {
        /// Owning series.
        series_id: i64,
        /// Existing chapter when editing.
        chapter: Option<Chapter>,
    },
    /// Root folder form seed: `None` creates, `Some` edits.
    RootFolderForm(Option<RootFolder>),
    /// Target collection for root-folder linking.
    CollectionLink {
        /// Collection being linked to.
        collection_id: i64,
    },
    /// Starting directory for the folder browser.
    FolderBrowser {
        /// Path the browser opens at.
        start_path: String,
    },
    /// Folder chosen in the browser.
    SelectedFolder {
        /// Absolute path picked by the user.
        path: String,
    },
    /// Root folders chosen for linking.
    SelectedRootFolders {
        /// Picked root folder ids.
        ids: Vec<i64>,
    },
}

/// Everything a modal component needs to show itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalConfig {
    /// Channel this config belongs to.
    pub id: ModalId,
    /// Dialog title.
    pub title: String,
    /// Width preset.
    pub size: ModalSize,
    /// Vertically center the dialog.
    pub centered: bool,
    /// Scroll the dialog body instead of the page.
    pub scrollable: bool,
    /// Ignore backdrop clicks.
    pub static_backdrop: bool,
    /// Allow closing with the Escape key.
    pub keyboard: bool,
    /// Channel-specific payload.
    pub data: ModalPayload,
}

impl ModalConfig {
    /// Config with the default presentation flags.
    #[must_use]
    pub fn new(id: ModalId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            size: ModalSize::default(),
            centered: false,
            scrollable: false,
            static_backdrop: false,
            keyboard: true,
            data: ModalPayload::None,
        }
    }

    /// Set the width preset.
    #[must_use]
    pub const fn with_size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    /// Center the dialog vertically.
    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Make the dialog body scrollable.
    #[must_use]
    pub const fn scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }

    /// Keep the dialog open on backdrop clicks.
    #[must_use]
    pub const fn static_backdrop(mut self) -> Self {
        self.static_backdrop = true;
        self
    }

    /// Disable closing with the Escape key.
    #[must_use]
    pub const fn without_keyboard(mut self) -> Self {
        self.keyboard = false;
        self
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: ModalPayload) -> Self {
        self.data = data;
        self
    }
}

/// Outcome published by a closing modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalResult {
    /// What the user did.
    pub action: ModalAction,
    /// Channel-specific payload.
    pub data: ModalPayload,
}

impl ModalResult {
    /// Result without a payload.
    #[must_use]
    pub const fn new(action: ModalAction) -> Self {
        Self {
            action,
            data: ModalPayload::None,
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: ModalPayload) -> Self {
        self.data = data;
        self
    }
}

/// One channel's slots. `config == None` means closed; the result slot is an
/// independent side-channel cleared only on the next open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalChannel {
    config: Option<ModalConfig>,
    result: Option<ModalResult>,
}

/// Map from channel id to its slots. Channels are created lazily on first
/// reference and live for the lifetime of the process; the id set is closed,
/// so the map stays bounded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalRegistry {
    channels: HashMap<ModalId, ModalChannel>,
}

impl ModalRegistry {
    /// Called once by each modal-owning component at initialization; creates
    /// the channel when missing and returns the current config snapshot.
    pub fn register(&mut self, id: ModalId) -> Option<ModalConfig> {
        self.channels.entry(id).or_default().config.clone()
    }

    /// Open a channel. The result slot is cleared before the config is
    /// published, so a subscriber attaching after the open never sees a
    /// stale result from an earlier opening.
    pub fn open(&mut self, config: ModalConfig) {
        let channel = self.channels.entry(config.id).or_default();
        channel.result = None;
        channel.config = Some(config);
    }

    /// Close a channel by publishing a `None` config. The result slot is left
    /// untouched; a result may still be read after the close.
    pub fn close(&mut self, id: ModalId) {
        if let Some(channel) = self.channels.get_mut(&id) {
            channel.config = None;
        }
    }

    /// Publish a result, creating the channel when missing. Fire-and-forget:
    /// nothing checks that a consumer exists.
    pub fn set_result(&mut self, id: ModalId, result: ModalResult) {
        self.channels.entry(id).or_default().result = Some(result);
    }

    /// Current config snapshot for a channel.
    #[must_use]
    pub fn config(&self, id: ModalId) -> Option<&ModalConfig> {
        self.channels.get(&id).and_then(|c| c.config.as_ref())
    }

    /// Current result snapshot for a channel.
    #[must_use]
    pub fn result(&self, id: ModalId) -> Option<&ModalResult> {
        self.channels.get(&id).and_then(|c| c.result.as_ref())
    }

    /// Whether a channel is currently open.
    #[must_use]
    pub fn is_open(&self, id: ModalId) -> bool {
        self.config(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ModalAction, ModalConfig, ModalId, ModalPayload, ModalRegistry, ModalResult, ModalSize,
    };

    #[test]
    fn open_publishes_config_and_clears_result() {
        let mut registry = ModalRegistry::default();
        registry.set_result(ModalId::Series, ModalResult::new(ModalAction::Save));

        registry.open(ModalConfig::new(ModalId::Series, "Edit series"));

        // A subscriber attaching after the open sees the fresh config and no
        // stale result from the previous opening.
        let config = registry.config(ModalId::Series).expect("open config");
        assert_eq!(config.title, "Edit series");
        assert!(registry.result(ModalId::Series).is_none());
        assert!(registry.is_open(ModalId::Series));
    }

    #[test]
    fn close_hides_but_preserves_result() {
        let mut registry = ModalRegistry::default();
        registry.open(ModalConfig::new(ModalId::Volume, "Add volume"));
        registry.set_result(
            ModalId::Volume,
            ModalResult::new(ModalAction::Save).with_data(ModalPayload::SelectedFolder {
                path: "/library".to_string(),
            }),
        );
        registry.close(ModalId::Volume);

        assert!(registry.config(ModalId::Volume).is_none());
        let result = registry.result(ModalId::Volume).expect("kept result");
        assert_eq!(result.action, ModalAction::Save);
    }

    #[test]
    fn register_creates_a_closed_channel() {
        let mut registry = ModalRegistry::default();
        assert!(registry.register(ModalId::FolderBrowser).is_none());
        assert!(!registry.is_open(ModalId::FolderBrowser));
        // Registering again must not disturb existing state.
        registry.open(ModalConfig::new(ModalId::FolderBrowser, "Browse"));
        assert!(registry.register(ModalId::FolderBrowser).is_some());
    }

    #[test]
    fn result_channel_is_created_lazily() {
        let mut registry = ModalRegistry::default();
        registry.set_result(ModalId::SetupWizard, ModalResult::new(ModalAction::Finish));
        let result = registry.result(ModalId::SetupWizard).expect("result");
        assert_eq!(result.action, ModalAction::Finish);
        assert!(registry.config(ModalId::SetupWizard).is_none());
    }

    #[test]
    fn channels_are_independent() {
        let mut registry = ModalRegistry::default();
        registry.open(ModalConfig::new(ModalId::Series, "Series"));
        registry.open(ModalConfig::new(ModalId::Chapter, "Chapter"));
        registry.close(ModalId::Series);
        assert!(!registry.is_open(ModalId::Series));
        assert!(registry.is_open(ModalId::Chapter));
    }

    #[test]
    fn wire_ids_match_the_component_contract() {
        assert_eq!(
            ModalId::DeleteConfirmation.as_str(),
            "deleteConfirmationModal"
        );
        assert_eq!(ModalId::BookDetails.as_str(), "bookDetailsModal");
        assert_eq!(ModalId::MangaDetails.as_str(), "mangaDetailsModal");
        assert_eq!(ModalId::ImportSuccess.as_str(), "importSuccessModal");
        assert_eq!(ModalId::AddRootFolder.as_str(), "addRootFolderModal");
        assert_eq!(ModalId::EditRootFolder.as_str(), "editRootFolderModal");
        assert_eq!(ModalId::LinkRootFolder.as_str(), "linkRootFolderModal");
        assert_eq!(ModalId::Series.as_str(), "seriesModal");
        assert_eq!(ModalId::Volume.as_str(), "volumeModal");
        assert_eq!(ModalId::Chapter.as_str(), "chapterModal");
        assert_eq!(ModalId::SetupWizard.as_str(), "setupWizardModal");
        assert_eq!(
            ModalId::AddRootFolderToCollection.as_str(),
            "addRootFolderToCollectionModal"
        );
        assert_eq!(ModalId::FolderBrowser.as_str(), "folderBrowserModal");
        for id in ModalId::ALL {
            assert_eq!(ModalId::from_key(id.as_str()), Some(id));
        }
        assert_eq!(ModalId::from_key("unknownModal"), None);
    }

    #[test]
    fn action_strings_match_the_caller_contract() {
        let expected = [
            (ModalAction::Save, "save"),
            (ModalAction::Update, "update"),
            (ModalAction::Confirm, "confirm"),
            (ModalAction::Link, "link"),
            (ModalAction::Add, "add"),
            (ModalAction::Move, "move"),
            (ModalAction::Finish, "finish"),
            (ModalAction::Select, "select"),
            (ModalAction::Cancel, "cancel"),
        ];
        for (action, wire) in expected {
            assert_eq!(action.as_str(), wire);
        }
    }

    #[test]
    fn config_builder_defaults_are_dismissable() {
        let config = ModalConfig::new(ModalId::Series, "New series");
        assert_eq!(config.size, ModalSize::Medium);
        assert!(config.keyboard);
        assert!(!config.static_backdrop);

        let locked = ModalConfig::new(ModalId::SetupWizard, "Setup")
            .with_size(ModalSize::ExtraLarge)
            .centered()
            .static_backdrop()
            .without_keyboard();
        assert_eq!(locked.size, ModalSize::ExtraLarge);
        assert!(locked.centered && locked.static_backdrop && !locked.keyboard);
    }
}

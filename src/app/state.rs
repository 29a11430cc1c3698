//! Defines the core state structures for the application.
//!
//! This module contains the central `App` struct that holds the entire state
//! of the TUI session: the current page, the upload-and-submit flow, the
//! file picker, and the background-work handles.

use std::path::PathBuf;

use ratatui::layout::Rect;

use crate::definitions::Page;
use crate::i18n::UiStrings;
use crate::lottie::IllustrationStore;
use crate::picker::FilePicker;
use crate::translate::TranslateFlow;
use crate::translate::job::JobManager;

/// The two UI chrome languages, toggled with Ctrl+L.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CurrentLanguage {
    English,
    Hindi,
}

impl CurrentLanguage {
    pub(crate) fn next(&self) -> Self {
        match self {
            Self::English => Self::Hindi,
            Self::Hindi => Self::English,
        }
    }
}

/// The main application state.
///
/// Single source of truth for rendering: every user action mutates this
/// struct and the next draw derives the whole frame from it.
pub struct App {
    /// Flag to indicate if the application should quit.
    pub running: bool,
    /// The page currently shown. Mutated only through `navigate_to`.
    pub(crate) page: Page,
    pub(crate) lang_state: CurrentLanguage,
    /// UI chrome strings for the active language.
    pub strings: Box<dyn UiStrings>,
    /// The Translate page's upload-and-submit state machine.
    pub flow: TranslateFlow,
    /// The file picker backing the upload form.
    pub picker: FilePicker,
    /// Background translation jobs.
    pub jobs: JobManager,
    /// Fetched Home-page illustrations.
    pub illustrations: IllustrationStore,
    /// The message currently displayed in the status bar.
    pub status_message: String,
    /// Where the download action writes the result file.
    pub download_dir: PathBuf,
    /// Nav-bar tab hit areas, refreshed on every draw for mouse routing.
    pub nav_tab_areas: Vec<(Page, Rect)>,
}

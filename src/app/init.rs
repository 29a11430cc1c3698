use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::debug;

use super::App;
use super::state::CurrentLanguage;
use crate::definitions::Page;
use crate::i18n::English;
use crate::lottie::{Fetcher, HttpFetcher, IllustrationStore};
use crate::picker::FilePicker;
use crate::translate::TranslateFlow;
use crate::translate::job::{JobManager, PlaceholderTranslator};

impl App {
    /// Creates the initial application state: Home page, empty upload flow,
    /// a file picker rooted at the working directory.
    pub fn new() -> Result<Self> {
        let initial_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        debug!("Starting session in {}", initial_dir.display());

        Ok(Self {
            running: true,
            page: Page::Home,
            lang_state: CurrentLanguage::English,
            strings: Box::new(English),
            flow: TranslateFlow::new(),
            picker: FilePicker::new(&initial_dir)?,
            jobs: JobManager::new(Arc::new(PlaceholderTranslator)),
            illustrations: IllustrationStore::new(),
            status_message: String::from("Welcome to Anuvaad"),
            download_dir: initial_dir,
            nav_tab_areas: Vec::new(),
        })
    }

    /// Kicks off the illustration fetches. Separate from `new` so tests can
    /// build an `App` without touching the network.
    pub fn start_background_fetches(&self) {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new());
        self.illustrations.spawn_fetches(fetcher);
    }

    #[cfg(test)]
    pub(crate) fn new_for_tests(dir: &std::path::Path) -> Self {
        Self {
            running: true,
            page: Page::Home,
            lang_state: CurrentLanguage::English,
            strings: Box::new(English),
            flow: TranslateFlow::new(),
            picker: FilePicker::new(dir).expect("test picker"),
            jobs: JobManager::new(Arc::new(PlaceholderTranslator)),
            illustrations: IllustrationStore::new(),
            status_message: String::new(),
            download_dir: dir.to_path_buf(),
            nav_tab_areas: Vec::new(),
        }
    }
}

use std::fs;
use std::path::Path;

use log::{debug, error, info};

use super::App;
use super::state::CurrentLanguage;
use crate::definitions::Page;
use crate::i18n::{English, Hindi};
use crate::translate::UploadStage;

impl App {
    pub fn current_page(&self) -> Page {
        self.page
    }

    /// Switches to `page`. Synchronous and infallible; navigating to the
    /// current page is a no-op.
    pub fn navigate_to(&mut self, page: Page) {
        if self.page != page {
            debug!("Navigating {:?} -> {:?}", self.page, page);
            self.page = page;
        }
    }

    pub(crate) fn navigate_relative(&mut self, delta: isize) {
        let count = Page::ALL.len() as isize;
        let next = (self.page.index() as isize + delta).rem_euclid(count);
        if let Some(page) = Page::from_index(next as usize) {
            self.navigate_to(page);
        }
    }

    /// Home-page "Get Started" affordance.
    pub fn get_started(&mut self) {
        self.navigate_to(Page::Translate);
    }

    /// Home-page "Start Translating Now" affordance.
    pub fn start_translating_now(&mut self) {
        self.navigate_to(Page::Translate);
    }

    pub(crate) fn toggle_language(&mut self) {
        self.lang_state = self.lang_state.next();
        self.strings = match self.lang_state {
            CurrentLanguage::English => Box::new(English),
            CurrentLanguage::Hindi => Box::new(Hindi),
        };
    }

    /// Captures the picked file into the upload flow. Read failures surface
    /// as a generic notice, with the cause kept to the log.
    pub(crate) fn upload(&mut self, path: &Path) {
        match self.flow.attach_file(path) {
            Ok(()) => {
                self.status_message = String::from("File successfully uploaded!");
            }
            Err(err) => {
                error!("Upload of {} failed: {:#}", path.display(), err);
                self.status_message = String::from("Upload failed");
            }
        }
    }

    /// Starts the placeholder translation job if the form is ready.
    pub fn submit_translation(&mut self) {
        if self.flow.stage() == UploadStage::Submitting {
            return;
        }
        if !self.flow.is_ready() {
            self.status_message = String::from("Select a video and at least one language first");
            return;
        }
        let request = self.flow.build_request();
        info!("Submitting translation for languages {:?}", request.languages);
        self.flow.begin_submit();
        self.jobs.submit(request);
        self.status_message =
            String::from("Translation process initiated. This may take a while...");
    }

    /// Writes the placeholder result next to the working directory.
    pub fn download_result(&mut self) {
        let Some(result) = self.flow.result.as_ref() else {
            return;
        };
        let target = self.download_dir.join(&result.file_name);
        match fs::write(&target, &result.data) {
            Ok(()) => {
                info!("Saved {} ({} bytes)", target.display(), result.data.len());
                self.status_message = format!("Saved {}", target.display());
            }
            Err(err) => {
                error!("Could not save {}: {}", target.display(), err);
                self.status_message = String::from("Download failed");
            }
        }
    }
}

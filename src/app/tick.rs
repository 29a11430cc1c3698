use super::App;
use crate::translate::job::JobEvent;

impl App {
    /// Called on every tick of the event loop: drains completed background
    /// work into the UI state.
    pub fn on_tick(&mut self) {
        self.illustrations.poll();

        while let Some(event) = self.jobs.poll_event() {
            match event {
                JobEvent::Finished(result) => {
                    self.flow.complete(result);
                    self.status_message =
                        String::from("Translation complete! (This is a placeholder message)");
                }
                JobEvent::Failed(message) => {
                    self.flow.fail_submit();
                    self.status_message = format!("Translation failed: {}", message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write as _;
    use std::time::Duration;

    use crate::app::App;
    use crate::definitions::{Page, TargetLanguage};
    use crate::translate::UploadStage;

    fn workspace_with_clip() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut clip = fs::File::create(dir.path().join("clip.mp4")).expect("fixture");
        clip.write_all(b"fixture bytes").expect("fixture bytes");
        dir
    }

    #[test]
    fn navigation_reaches_every_page() {
        let dir = workspace_with_clip();
        let mut app = App::new_for_tests(dir.path());
        assert_eq!(app.current_page(), Page::Home);
        for page in Page::ALL {
            app.navigate_to(page);
            assert_eq!(app.current_page(), page);
        }
        // Navigating to the current page is a no-op.
        app.navigate_to(Page::Contact);
        assert_eq!(app.current_page(), Page::Contact);
    }

    #[test]
    fn home_shortcuts_force_translate() {
        let dir = workspace_with_clip();
        let mut app = App::new_for_tests(dir.path());
        app.get_started();
        assert_eq!(app.current_page(), Page::Translate);

        app.navigate_to(Page::Home);
        app.start_translating_now();
        assert_eq!(app.current_page(), Page::Translate);
    }

    #[test]
    fn submit_refused_until_ready() {
        let dir = workspace_with_clip();
        let mut app = App::new_for_tests(dir.path());
        app.submit_translation();
        assert_eq!(app.flow.stage(), UploadStage::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn full_walk_from_home_to_download() {
        let dir = workspace_with_clip();
        let mut app = App::new_for_tests(dir.path());

        // Home -> "Start Translating Now" -> Translate.
        app.start_translating_now();
        assert_eq!(app.current_page(), Page::Translate);

        // Upload clip.mp4.
        app.upload(&dir.path().join("clip.mp4"));
        let file = app.flow.file.as_ref().expect("upload captured");
        assert_eq!(file.name, "clip.mp4");
        assert_eq!(file.mime_type, "video/mp4");

        // Select {Hindi, Tamil} -> ready.
        app.flow.toggle_language(TargetLanguage::Hindi);
        app.flow.toggle_language(TargetLanguage::Tamil);
        assert!(app.flow.is_ready());

        // Submit and wait for the placeholder job.
        app.submit_translation();
        assert_eq!(app.flow.stage(), UploadStage::Submitting);
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            app.on_tick();
            if app.flow.stage() == UploadStage::Submitted {
                break;
            }
        }
        let result = app.flow.result.clone().expect("job finished");
        assert_eq!(result.file_name, "translated_video.mp4");
        assert!(!result.data.is_empty());

        // Download writes the fixed payload.
        app.download_result();
        let saved = fs::read(dir.path().join("translated_video.mp4")).expect("saved file");
        assert_eq!(saved, result.data);
    }

    #[test]
    fn failed_upload_surfaces_generic_notice() {
        let dir = workspace_with_clip();
        let mut app = App::new_for_tests(dir.path());
        app.upload(&dir.path().join("missing.mp4"));
        assert_eq!(app.status_message, "Upload failed");
        assert_eq!(app.flow.stage(), UploadStage::Empty);
    }
}

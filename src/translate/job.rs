//! The translation job layer.
//!
//! [`Translator`] is the narrow seam a real pipeline would plug into. The
//! only implementation here is [`PlaceholderTranslator`], which sleeps a
//! fixed delay and returns the same canned result for every request. The
//! [`JobManager`] runs submissions on background tasks and reports back over
//! an mpsc channel polled by the app's tick handler.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::TranslationRequest;

/// Canned bytes handed out by the stub, matching the original demo.
pub const PLACEHOLDER_PAYLOAD: &[u8] = b"Placeholder data";
/// Fixed name of the produced file, independent of the input.
pub const RESULT_FILE_NAME: &str = "translated_video.mp4";
/// How long the stub pretends to work. Not configurable.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub file_name: String,
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("translation backend failed: {0}")]
    Backend(String),
}

/// The interface a real translation pipeline would implement.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult, JobError>;
}

/// Stub backend: waits a fixed delay, then succeeds unconditionally with the
/// placeholder payload. The request contents are deliberately unused.
pub struct PlaceholderTranslator;

#[async_trait]
impl Translator for PlaceholderTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult, JobError> {
        debug!(
            "Placeholder translation for {} language(s)",
            request.languages.len()
        );
        tokio::time::sleep(SIMULATED_DELAY).await;
        Ok(TranslationResult {
            file_name: RESULT_FILE_NAME.to_string(),
            mime_type: "video/mp4",
            data: PLACEHOLDER_PAYLOAD.to_vec(),
        })
    }
}

/// Events the job layer reports back to the UI loop.
#[derive(Debug)]
pub enum JobEvent {
    Finished(TranslationResult),
    Failed(String),
}

/// Runs translation jobs off the UI thread and surfaces their outcomes
/// through [`JobManager::poll_event`].
pub struct JobManager {
    translator: Arc<dyn Translator>,
    events_tx: UnboundedSender<JobEvent>,
    events_rx: UnboundedReceiver<JobEvent>,
}

impl JobManager {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            translator,
            events_tx,
            events_rx,
        }
    }

    /// Spawns the job. Never blocks; the result comes back as a [`JobEvent`].
    pub fn submit(&mut self, request: TranslationRequest) {
        let translator = self.translator.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match translator.translate(request).await {
                Ok(result) => JobEvent::Finished(result),
                Err(err) => {
                    error!("Translation job failed: {}", err);
                    JobEvent::Failed(err.to_string())
                }
            };
            let _ = tx.send(event);
        });
    }

    pub fn poll_event(&mut self) -> Option<JobEvent> {
        self.events_rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::TargetLanguage;

    fn request(languages: &[TargetLanguage]) -> TranslationRequest {
        TranslationRequest {
            languages: languages.to_vec(),
            supers: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn placeholder_result_is_fixed_regardless_of_request() {
        let translator = PlaceholderTranslator;
        let one = translator
            .translate(request(&[TargetLanguage::Hindi]))
            .await
            .expect("stub never fails");
        let many = translator
            .translate(request(&TargetLanguage::ALL))
            .await
            .expect("stub never fails");
        assert_eq!(one.file_name, "translated_video.mp4");
        assert_eq!(one.mime_type, "video/mp4");
        assert!(!one.data.is_empty());
        assert_eq!(one, many);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_submission_is_idempotent() {
        let translator = PlaceholderTranslator;
        let first = translator
            .translate(request(&[TargetLanguage::Tamil]))
            .await
            .expect("stub never fails");
        let second = translator
            .translate(request(&[TargetLanguage::Tamil]))
            .await
            .expect("stub never fails");
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn manager_reports_completion_through_poll() {
        let mut manager = JobManager::new(Arc::new(PlaceholderTranslator));
        manager.submit(request(&[TargetLanguage::Gujrati]));

        let mut event = None;
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if let Some(found) = manager.poll_event() {
                event = Some(found);
                break;
            }
        }
        match event {
            Some(JobEvent::Finished(result)) => {
                assert_eq!(result.file_name, RESULT_FILE_NAME);
                assert_eq!(result.data, PLACEHOLDER_PAYLOAD);
            }
            other => panic!("expected Finished, got {:?}", other),
        }
    }
}

//! State for the Translate page's upload-and-submit flow.
//!
//! The flow walks `Empty → FileSelected → Submitting → Submitted`. A file
//! selection captures the bytes into a session-scoped temp file; submission
//! is gated on a non-empty language selection and handled by the job layer
//! in [`job`].

pub mod job;

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use tempfile::NamedTempFile;

use crate::definitions::{SupersRow, SupersStyle, TargetLanguage, TranslateSection};
use crate::picker;
use job::TranslationResult;

/// A file the user selected for upload. The temp file keeps the captured
/// bytes on disk for the rest of the session.
pub struct UploadedFile {
    pub name: String,
    pub mime_type: &'static str,
    pub data: Vec<u8>,
    temp: NamedTempFile,
}

impl UploadedFile {
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }
}

/// What the user asked for. Handed to the [`job::Translator`] as-is; the
/// placeholder backend ignores all of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub languages: Vec<TargetLanguage>,
    pub supers: Option<SupersSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupersSelection {
    pub color: String,
    pub size: crate::definitions::SupersSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Empty,
    FileSelected,
    Submitting,
    Submitted,
}

pub struct TranslateFlow {
    stage: UploadStage,
    pub file: Option<UploadedFile>,
    pub languages: BTreeSet<TargetLanguage>,
    pub supers: SupersStyle,
    pub section: TranslateSection,
    pub language_cursor: usize,
    pub supers_cursor: usize,
    pub result: Option<TranslationResult>,
    pub submitted_at: Option<Instant>,
}

impl TranslateFlow {
    pub fn new() -> Self {
        Self {
            stage: UploadStage::Empty,
            file: None,
            languages: BTreeSet::new(),
            supers: SupersStyle::default(),
            section: TranslateSection::Picker,
            language_cursor: 0,
            supers_cursor: 0,
            result: None,
            submitted_at: None,
        }
    }

    pub fn stage(&self) -> UploadStage {
        self.stage
    }

    /// Captures the selected file: reads its bytes and writes them to a temp
    /// file with the original suffix. Any I/O failure bubbles up and is
    /// shown as a generic upload failure.
    pub fn attach_file(&mut self, path: &Path) -> Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let mime_type = picker::mime_for(path).unwrap_or("application/octet-stream");
        let data =
            fs::read(path).with_context(|| format!("reading {}", path.display()))?;

        let suffix = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();
        let mut temp = tempfile::Builder::new()
            .suffix(&suffix)
            .tempfile()
            .context("creating temp file for upload")?;
        temp.write_all(&data).context("writing upload to temp file")?;

        info!("Captured upload {} ({} bytes) at {}", name, data.len(), temp.path().display());
        self.file = Some(UploadedFile {
            name,
            mime_type,
            data,
            temp,
        });
        self.stage = UploadStage::FileSelected;
        self.result = None;
        self.submitted_at = None;
        Ok(())
    }

    /// Submission precondition: a file is attached and at least one target
    /// language is chosen. Supers options never gate readiness.
    pub fn is_ready(&self) -> bool {
        matches!(self.stage, UploadStage::FileSelected | UploadStage::Submitted)
            && self.file.is_some()
            && !self.languages.is_empty()
    }

    pub fn toggle_language(&mut self, language: TargetLanguage) {
        if !self.languages.remove(&language) {
            self.languages.insert(language);
        }
    }

    pub fn toggle_language_at_cursor(&mut self) {
        if let Some(language) = TargetLanguage::ALL.get(self.language_cursor) {
            self.toggle_language(*language);
        }
    }

    pub fn move_language_cursor(&mut self, delta: isize) {
        let count = TargetLanguage::ALL.len() as isize;
        let next = (self.language_cursor as isize + delta).rem_euclid(count);
        self.language_cursor = next as usize;
    }

    pub fn move_supers_cursor(&mut self, delta: isize) {
        let count = SupersRow::ALL.len() as isize;
        let next = (self.supers_cursor as isize + delta).rem_euclid(count);
        self.supers_cursor = next as usize;
    }

    /// Activates the supers row under the cursor: toggles the overlay, or
    /// cycles the color/size when the overlay is enabled.
    pub fn activate_supers_row(&mut self) {
        match SupersRow::ALL[self.supers_cursor] {
            SupersRow::Enabled => self.supers.toggle(),
            SupersRow::Color if self.supers.enabled => self.supers.cycle_color(),
            SupersRow::Size if self.supers.enabled => self.supers.cycle_size(),
            _ => {}
        }
    }

    pub fn build_request(&self) -> TranslationRequest {
        let supers = self.supers.enabled.then(|| SupersSelection {
            color: self.supers.color().to_string(),
            size: self.supers.size,
        });
        TranslationRequest {
            languages: self.languages.iter().copied().collect(),
            supers,
        }
    }

    pub fn begin_submit(&mut self) {
        self.stage = UploadStage::Submitting;
        self.submitted_at = Some(Instant::now());
    }

    pub fn complete(&mut self, result: TranslationResult) {
        self.stage = UploadStage::Submitted;
        self.submitted_at = None;
        self.result = Some(result);
    }

    /// Reverts an in-flight submission marker after a backend failure so the
    /// form can be submitted again.
    pub fn fail_submit(&mut self) {
        self.stage = UploadStage::FileSelected;
        self.submitted_at = None;
    }
}

impl Default for TranslateFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::SupersSize;
    use std::io::Write as _;

    fn flow_with_clip() -> (tempfile::TempDir, TranslateFlow) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clip.mp4");
        let mut file = fs::File::create(&path).expect("fixture");
        file.write_all(b"not really mpeg-4").expect("fixture bytes");
        let mut flow = TranslateFlow::new();
        flow.attach_file(&path).expect("attach");
        (dir, flow)
    }

    #[test]
    fn attach_records_name_mime_and_bytes() {
        let (_dir, flow) = flow_with_clip();
        let file = flow.file.as_ref().expect("file attached");
        assert_eq!(file.name, "clip.mp4");
        assert_eq!(file.mime_type, "video/mp4");
        assert_eq!(file.data, b"not really mpeg-4");
        assert_eq!(flow.stage(), UploadStage::FileSelected);
        assert!(file.temp_path().exists());
    }

    #[test]
    fn attach_missing_file_is_an_error() {
        let mut flow = TranslateFlow::new();
        assert!(flow.attach_file(Path::new("/no/such/clip.mp4")).is_err());
        assert_eq!(flow.stage(), UploadStage::Empty);
    }

    #[test]
    fn readiness_requires_nonempty_language_selection() {
        let (_dir, mut flow) = flow_with_clip();
        assert!(!flow.is_ready());
        flow.toggle_language(TargetLanguage::Hindi);
        assert!(flow.is_ready());
        flow.toggle_language(TargetLanguage::Hindi);
        assert!(!flow.is_ready());
    }

    #[test]
    fn readiness_requires_a_file() {
        let mut flow = TranslateFlow::new();
        flow.toggle_language(TargetLanguage::Tamil);
        assert!(!flow.is_ready());
    }

    #[test]
    fn supers_options_do_not_gate_readiness() {
        let (_dir, mut flow) = flow_with_clip();
        flow.toggle_language(TargetLanguage::Marathi);
        assert!(flow.is_ready());
        flow.supers.toggle();
        flow.supers.cycle_size();
        assert!(flow.is_ready());
    }

    #[test]
    fn request_carries_sorted_languages_and_optional_supers() {
        let (_dir, mut flow) = flow_with_clip();
        flow.toggle_language(TargetLanguage::Tamil);
        flow.toggle_language(TargetLanguage::Hindi);
        let request = flow.build_request();
        assert_eq!(
            request.languages,
            vec![TargetLanguage::Hindi, TargetLanguage::Tamil]
        );
        assert_eq!(request.supers, None);

        flow.supers.toggle();
        flow.supers.cycle_size();
        let request = flow.build_request();
        let supers = request.supers.expect("supers attached");
        assert_eq!(supers.color, "#FFFFFF");
        assert_eq!(supers.size, SupersSize::Large);
    }
}

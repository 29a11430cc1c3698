//! In-terminal file picker for the upload form.
//!
//! Lists a single directory at a time: subdirectories first, then files whose
//! extension is in [`ACCEPTED_EXTENSIONS`]. Anything else is never shown, so
//! the format filter is enforced at the listing level rather than on
//! selection.

use std::fs;
use std::path::{Path, PathBuf};

/// Container formats accepted by the upload form, matched by extension only.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["mp4", "mov", "avi"];

#[derive(Debug, Clone)]
pub struct PickerEntry {
    pub path: PathBuf,
    pub is_directory: bool,
}

impl PickerEntry {
    pub fn display_name(&self) -> String {
        if self.path.ends_with("..") {
            return String::from("../");
        }
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string());
        if self.is_directory { format!("{}/", name) } else { name }
    }
}

/// Returns true when `path` has one of the accepted video extensions.
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.iter().any(|accepted| *accepted == ext)
        })
        .unwrap_or(false)
}

/// Maps an accepted extension to the MIME type reported in the file details.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

/// The outcome of activating the highlighted entry.
#[derive(Debug, PartialEq, Eq)]
pub enum PickerAction {
    /// The picker descended into (or out of) a directory.
    ChangedDirectory,
    /// The user picked a video file.
    Picked(PathBuf),
    /// Nothing to act on (empty listing).
    None,
}

#[derive(Debug)]
pub struct FilePicker {
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
}

impl FilePicker {
    pub fn new(dir: &Path) -> Result<Self, std::io::Error> {
        let entries = Self::scan_directory(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
            selected: 0,
        })
    }

    fn scan_directory(dir: &Path) -> Result<Vec<PickerEntry>, std::io::Error> {
        let mut entries = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| {
                let path = entry.path();
                let is_directory = path.is_dir();
                PickerEntry { path, is_directory }
            })
            .filter(|entry| entry.is_directory || is_accepted(&entry.path))
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| a.path.cmp(&b.path))
        });
        if dir.parent().is_some() {
            entries.insert(
                0,
                PickerEntry {
                    path: dir.join(".."),
                    is_directory: true,
                },
            );
        }
        Ok(entries)
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1).min(self.entries.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Activates the highlighted entry: descends into directories, resolves
    /// `..` to the parent, and hands video files back to the caller.
    pub fn activate(&mut self) -> PickerAction {
        let Some(entry) = self.selected_entry().cloned() else {
            return PickerAction::None;
        };
        if entry.is_directory {
            let target = if entry.path.ends_with("..") {
                self.dir.parent().map(Path::to_path_buf)
            } else {
                Some(entry.path.clone())
            };
            if let Some(target) = target {
                match Self::scan_directory(&target) {
                    Ok(entries) => {
                        self.dir = target;
                        self.entries = entries;
                        self.selected = 0;
                    }
                    Err(err) => {
                        log::warn!("Could not list {}: {}", target.display(), err);
                    }
                }
            }
            PickerAction::ChangedDirectory
        } else {
            PickerAction::Picked(entry.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["clip.mp4", "raw.MOV", "old.avi", "notes.txt", "song.mp3"] {
            File::create(dir.path().join(name)).expect("fixture file");
        }
        fs::create_dir(dir.path().join("footage")).expect("fixture dir");
        dir
    }

    #[test]
    fn listing_admits_only_video_extensions() {
        let dir = fixture_dir();
        let picker = FilePicker::new(dir.path()).expect("picker");
        let names: Vec<String> = picker
            .entries
            .iter()
            .filter(|e| !e.is_directory)
            .map(|e| e.display_name())
            .collect();
        assert_eq!(names, ["clip.mp4", "old.avi", "raw.MOV"]);
    }

    #[test]
    fn directories_sort_before_files() {
        let dir = fixture_dir();
        let picker = FilePicker::new(dir.path()).expect("picker");
        // ".." first, then the subdirectory, then the accepted files.
        assert!(picker.entries[0].path.ends_with(".."));
        assert!(picker.entries[1].is_directory);
        assert!(!picker.entries[2].is_directory);
    }

    #[test]
    fn activate_returns_picked_file() {
        let dir = fixture_dir();
        let mut picker = FilePicker::new(dir.path()).expect("picker");
        let file_index = picker
            .entries
            .iter()
            .position(|e| e.display_name() == "clip.mp4")
            .expect("clip.mp4 listed");
        picker.selected = file_index;
        match picker.activate() {
            PickerAction::Picked(path) => assert!(path.ends_with("clip.mp4")),
            other => panic!("expected Picked, got {:?}", other),
        }
    }

    #[test]
    fn mime_mapping_covers_accepted_formats() {
        assert_eq!(mime_for(Path::new("a/clip.mp4")), Some("video/mp4"));
        assert_eq!(mime_for(Path::new("b.MOV")), Some("video/quicktime"));
        assert_eq!(mime_for(Path::new("c.avi")), Some("video/x-msvideo"));
        assert_eq!(mime_for(Path::new("d.mkv")), None);
        assert_eq!(mime_for(Path::new("plain")), None);
    }

    #[test]
    fn rejects_unlisted_extensions() {
        assert!(!is_accepted(Path::new("notes.txt")));
        assert!(!is_accepted(Path::new("archive.mp4.gz")));
        assert!(is_accepted(Path::new("CLIP.MP4")));
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::definitions::{Page, TranslateSection};
use crate::picker::PickerAction;
use crate::translate::UploadStage;

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Global shortcuts are checked first; anything unhandled is routed to
    /// the current page.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let global_handled = match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.running = false;
                true
            }
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.toggle_language();
                true
            }
            (KeyCode::Left, _) => {
                self.navigate_relative(-1);
                true
            }
            (KeyCode::Right, _) => {
                self.navigate_relative(1);
                true
            }
            (KeyCode::Char(c @ '1'..='4'), _) => {
                if let Some(page) = Page::from_index(c as usize - '1' as usize) {
                    self.navigate_to(page);
                }
                true
            }
            _ => false,
        };
        if global_handled {
            return;
        }

        match self.current_page() {
            Page::Home => self.handle_home_key(key),
            Page::Translate => self.handle_translate_key(key),
            Page::About | Page::Contact => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('g') => self.get_started(),
            KeyCode::Char('s') => self.start_translating_now(),
            _ => {}
        }
    }

    fn handle_translate_key(&mut self, key: KeyEvent) {
        // Page-wide keys first.
        match key.code {
            KeyCode::Tab => {
                self.flow.section = self.flow.section.next();
                return;
            }
            KeyCode::Char('d') if self.flow.stage() == UploadStage::Submitted => {
                self.download_result();
                return;
            }
            _ => {}
        }

        match self.flow.section {
            TranslateSection::Picker => self.handle_picker_key(key),
            TranslateSection::Languages => match key.code {
                KeyCode::Up => self.flow.move_language_cursor(-1),
                KeyCode::Down => self.flow.move_language_cursor(1),
                KeyCode::Enter | KeyCode::Char(' ') => self.flow.toggle_language_at_cursor(),
                _ => {}
            },
            TranslateSection::Supers => match key.code {
                KeyCode::Up => self.flow.move_supers_cursor(-1),
                KeyCode::Down => self.flow.move_supers_cursor(1),
                KeyCode::Enter | KeyCode::Char(' ') => self.flow.activate_supers_row(),
                _ => {}
            },
            TranslateSection::Submit => {
                if key.code == KeyCode::Enter {
                    self.submit_translation();
                }
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.picker.select_previous(),
            KeyCode::Down => self.picker.select_next(),
            KeyCode::Enter => {
                if let PickerAction::Picked(path) = self.picker.activate() {
                    self.upload(&path);
                }
            }
            _ => {}
        }
    }
}

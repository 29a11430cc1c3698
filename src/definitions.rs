//! Shared UI-state types used across the application.
//!
//! Everything here is plain data with small helpers for cycling and
//! labelling; the behavior that mutates these types lives in `app`.

use crate::i18n::UiStrings;

/// The four top-level pages reachable from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Translate,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Translate, Page::About, Page::Contact];

    pub fn index(&self) -> usize {
        match self {
            Page::Home => 0,
            Page::Translate => 1,
            Page::About => 2,
            Page::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Page::ALL.get(index).copied()
    }

    pub fn title(&self, strings: &dyn UiStrings) -> &'static str {
        match self {
            Page::Home => strings.nav_home(),
            Page::Translate => strings.nav_translate(),
            Page::About => strings.nav_about(),
            Page::Contact => strings.nav_contact(),
        }
    }
}

/// The fixed set of target languages offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetLanguage {
    Hindi,
    Marathi,
    Tamil,
    Telgu,
    Gujrati,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Hindi,
        TargetLanguage::Marathi,
        TargetLanguage::Tamil,
        TargetLanguage::Telgu,
        TargetLanguage::Gujrati,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Marathi => "Marathi",
            TargetLanguage::Tamil => "Tamil",
            TargetLanguage::Telgu => "Telgu",
            TargetLanguage::Gujrati => "Gujrati",
        }
    }
}

/// Text size options for the supers (on-screen text) overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupersSize {
    Small,
    Medium,
    Large,
}

impl SupersSize {
    pub fn next(&self) -> Self {
        match self {
            SupersSize::Small => SupersSize::Medium,
            SupersSize::Medium => SupersSize::Large,
            SupersSize::Large => SupersSize::Small,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupersSize::Small => "Small",
            SupersSize::Medium => "Medium",
            SupersSize::Large => "Large",
        }
    }
}

/// Preset colors offered by the supers color chooser. The first entry is the
/// default, matching the original form's `#FFFFFF`.
pub const SUPERS_COLORS: [&str; 5] = ["#FFFFFF", "#FFD700", "#4CAF50", "#FF5252", "#2196F3"];

/// User-chosen styling for the supers overlay. Collected by the form but
/// deliberately ignored by the placeholder pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupersStyle {
    pub enabled: bool,
    color_index: usize,
    pub size: SupersSize,
}

impl Default for SupersStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            color_index: 0,
            size: SupersSize::Medium,
        }
    }
}

impl SupersStyle {
    pub fn color(&self) -> &'static str {
        SUPERS_COLORS[self.color_index]
    }

    pub fn cycle_color(&mut self) {
        self.color_index = (self.color_index + 1) % SUPERS_COLORS.len();
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn cycle_size(&mut self) {
        self.size = self.size.next();
    }
}

/// The focusable sections of the Translate page, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateSection {
    Picker,
    Languages,
    Supers,
    Submit,
}

impl TranslateSection {
    pub fn next(&self) -> Self {
        match self {
            TranslateSection::Picker => TranslateSection::Languages,
            TranslateSection::Languages => TranslateSection::Supers,
            TranslateSection::Supers => TranslateSection::Submit,
            TranslateSection::Submit => TranslateSection::Picker,
        }
    }
}

/// Rows of the supers sub-form, addressed by the keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupersRow {
    Enabled,
    Color,
    Size,
}

impl SupersRow {
    pub const ALL: [SupersRow; 3] = [SupersRow::Enabled, SupersRow::Color, SupersRow::Size];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_index_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_index(page.index()), Some(page));
        }
        assert_eq!(Page::from_index(4), None);
    }

    #[test]
    fn supers_style_defaults_to_white_medium() {
        let style = SupersStyle::default();
        assert!(!style.enabled);
        assert_eq!(style.color(), "#FFFFFF");
        assert_eq!(style.size, SupersSize::Medium);
    }

    #[test]
    fn supers_color_cycle_wraps() {
        let mut style = SupersStyle::default();
        for _ in 0..SUPERS_COLORS.len() {
            style.cycle_color();
        }
        assert_eq!(style.color(), "#FFFFFF");
    }
}

use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(16, 16, 16);
pub const FG_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const FG_DIM: Color = Color::Rgb(128, 128, 128);

// Matches the original page accent (#4CAF50, hover #45a049).
pub const ACCENT: Color = Color::Rgb(76, 175, 80);
pub const ACCENT_DARK: Color = Color::Rgb(69, 160, 73);

pub const BAR_BG: Color = Color::Rgb(0, 0, 0);
pub const BAR_TEXT: Color = Color::Rgb(220, 220, 220);

pub const BORDER_IDLE: Color = Color::Rgb(90, 90, 90);
pub const BORDER_FOCUS: Color = ACCENT;

pub const NOTICE_OK: Color = ACCENT;

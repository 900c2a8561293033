//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status / toast variants ---
pub const STATUS_GREEN: Color = Color::Green; // success
pub const STATUS_RED: Color = Color::Red; // error
pub const STATUS_YELLOW: Color = Color::Yellow; // warning
pub const STATUS_BLUE: Color = Color::Blue; // info

// --- Table ---
pub const TABLE_HEADER: Color = Color::Cyan;
pub const ROW_ALT: Color = Color::Rgb(18, 21, 28);

// --- Pagination ---
pub const PAGE_ACTIVE_FG: Color = Color::Black;
pub const PAGE_ACTIVE_BG: Color = Color::Cyan;
pub const PAGE_DISABLED: Color = Color::DarkGray;

// --- Form ---
pub const FIELD_ERROR: Color = Color::Red;
pub const FIELD_FOCUS: Color = Color::Cyan;

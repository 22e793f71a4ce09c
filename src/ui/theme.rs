//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - classic felt green
pub const BOARD_BG: Color32 = Color32::from_rgb(34, 120, 70);
pub const GRID_LINE: Color32 = Color32::from_rgb(15, 55, 30);
pub const LABEL: Color32 = Color32::from_rgb(210, 230, 215);
pub const GUIDE_DOT: Color32 = Color32::from_rgb(15, 55, 30);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

pub fn legal_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Disc count cards
pub const COUNT_BLACK_BG: Color32 = Color32::from_rgb(50, 50, 55);
pub const COUNT_WHITE_BG: Color32 = Color32::from_rgb(200, 200, 205);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const STONE_RADIUS_RATIO: f32 = 0.42;
pub const HINT_RADIUS_RATIO: f32 = 0.12;
pub const GUIDE_DOT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Grid intersections marked with a dot (between rows/cols 2|3 and 6|7)
pub const GUIDE_DOTS: [(u8, u8); 4] = [(2, 2), (2, 6), (6, 2), (6, 6)];

//! Theme constants for the torus GUI

use egui::Color32;

// Board colors - the torus surface
pub const BOARD_BG: Color32 = Color32::from_rgb(226, 195, 143);
pub const GRID_LINE: Color32 = Color32::from_rgb(15, 15, 15);
pub const SEAM_LINE: Color32 = Color32::from_rgb(139, 90, 43);

// Stone colors: player one is white, player two is black
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);
pub const BLACK_STONE: Color32 = Color32::from_rgb(10, 10, 10);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 209, 92);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn win_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 209, 92, 140)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_PADDING: f32 = 20.0;
pub const STONE_RADIUS_RATIO: f32 = 0.38;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// View angle change per dragged pixel, in radians
pub const DRAG_SENSITIVITY: f64 = 0.0065;

//! Shared color constants for the UI.

use egui::Color32;

/// Red color for load errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Border color for the Typora-like table style (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Muted gray for secondary text such as counts and timestamps.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(128, 128, 128);

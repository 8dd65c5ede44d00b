use crate::playback::Mark;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,         // Unsorted, unmarked
    pub comparing: Color,   // Yellow
    pub swapping: Color,    // Red
    pub pivot: Color,       // Pink
    pub left_split: Color,  // Cyan
    pub right_split: Color, // Lavender
    pub written: Color,     // Orange
    pub sorted: Color,      // Green
}

impl Theme {
    pub fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::Comparing => self.comparing,
            Mark::Swapping => self.swapping,
            Mark::Pivot => self.pivot,
            Mark::LeftSplit => self.left_split,
            Mark::RightSplit => self.right_split,
            Mark::Written => self.written,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(137, 180, 250),
    comparing: Color::Rgb(249, 226, 175),
    swapping: Color::Rgb(243, 139, 168),
    pivot: Color::Rgb(245, 194, 231),
    left_split: Color::Rgb(148, 226, 213),
    right_split: Color::Rgb(180, 190, 254),
    written: Color::Rgb(250, 179, 135),
    sorted: Color::Rgb(166, 227, 161),
};

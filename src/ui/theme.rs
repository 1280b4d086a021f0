use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,    // Grey
    pub success: Color,    // Green
    pub error: Color,      // Red
    pub bar: Color,        // Base bar color
    pub bar_active: Color, // Accent for the highlighted pair
    pub primary: Color,    // Blue
    pub secondary: Color,  // Orange
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(137, 180, 250),        // Blue bars
    bar_active: Color::Rgb(243, 139, 168), // Red accent for the compared pair
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    status_bg: Color::Rgb(50, 50, 70),        // Slightly lighter BG for the status bar
};

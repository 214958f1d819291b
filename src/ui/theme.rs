use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub changed: Color, // Red for register lines that moved
    pub stale_fg: Color,
    pub stale_bg: Color,   // Inverted style for the previous value
    pub emphasis: Color,   // Green for the current instruction
    pub selected_fg: Color,
    pub selected_bg: Color, // Active tab title when the pane is focused
    pub comment: Color,     // Placeholders and muted text
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    changed: Color::Rgb(243, 139, 168),     // Red
    stale_fg: Color::Rgb(30, 30, 46),       // Dark text
    stale_bg: Color::Rgb(205, 214, 244),    // on light background
    emphasis: Color::Rgb(166, 227, 161),    // Green
    selected_fg: Color::Rgb(30, 30, 46),    // Dark text
    selected_bg: Color::Rgb(166, 227, 161), // on green
    comment: Color::Rgb(108, 112, 134),
    border_focused: Color::Rgb(166, 227, 161), // Green border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
};

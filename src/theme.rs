use ratatui::style::Color;

// Centralized palette helpers. The desktop mimics a dark pentest
// distribution: near-black surfaces, green accent, gray chrome.

pub const ACCENT_RGB: (u8, u8, u8) = (46, 204, 113);
pub const ACCENT_DIM_RGB: (u8, u8, u8) = (24, 106, 59);

pub fn accent() -> Color {
    let (r, g, b) = ACCENT_RGB;
    Color::Rgb(r, g, b)
}

pub fn accent_dim() -> Color {
    let (r, g, b) = ACCENT_DIM_RGB;
    Color::Rgb(r, g, b)
}

// Desktop surface
pub fn wallpaper_bg() -> Color {
    Color::Rgb(10, 14, 12)
}
pub fn wallpaper_fg() -> Color {
    Color::Rgb(22, 46, 34)
}

// Window chrome
pub fn header_active_bg() -> Color {
    Color::Rgb(31, 41, 55)
}
pub fn header_inactive_bg() -> Color {
    Color::Rgb(55, 65, 81)
}
pub fn header_fg() -> Color {
    Color::White
}
pub fn border_active() -> Color {
    accent()
}
pub fn border_inactive() -> Color {
    Color::DarkGray
}
pub fn content_bg() -> Color {
    Color::Rgb(17, 24, 39)
}
pub fn content_fg() -> Color {
    Color::Gray
}

// Taskbar / menus
pub fn taskbar_bg() -> Color {
    Color::Rgb(26, 26, 26)
}
pub fn taskbar_fg() -> Color {
    Color::Gray
}
pub fn taskbar_active_bg() -> Color {
    Color::Rgb(55, 65, 81)
}
pub fn menu_bg() -> Color {
    Color::Rgb(31, 41, 55)
}
pub fn menu_fg() -> Color {
    Color::White
}
pub fn menu_dim_fg() -> Color {
    Color::Rgb(156, 163, 175)
}

// Status
pub fn success() -> Color {
    Color::Green
}
pub fn warning() -> Color {
    Color::Yellow
}
pub fn danger() -> Color {
    Color::Red
}

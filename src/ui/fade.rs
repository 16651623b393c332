//! Fade-in effect applied to an already drawn frame

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Foreground assumed for cells that use the terminal default
const DEFAULT_FG: (u8, u8, u8) = (229, 229, 229);

/// Scale every foreground color in `area` toward black by `opacity` (0.0–1.0)
pub fn apply_fade(buf: &mut Buffer, area: Rect, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let faded = fade_color(cell.fg, opacity);
                cell.set_fg(faded);
            }
        }
    }
}

/// Blend a color from black toward itself
pub fn fade_color(color: Color, opacity: f32) -> Color {
    let (r, g, b) = to_rgb(color);
    let scale = |c: u8| (f32::from(c) * opacity).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

/// Approximate RGB for the named palette
fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 49, 49),
        Color::Green => (13, 188, 121),
        Color::Yellow => (229, 229, 16),
        Color::Blue => (36, 114, 200),
        Color::Magenta => (188, 63, 188),
        Color::Cyan => (17, 168, 205),
        Color::Gray => (192, 192, 192),
        Color::DarkGray => (102, 102, 102),
        Color::LightRed => (241, 76, 76),
        Color::LightGreen => (35, 209, 139),
        Color::LightYellow => (245, 245, 67),
        Color::LightBlue => (59, 142, 234),
        Color::LightMagenta => (214, 112, 214),
        Color::LightCyan => (41, 184, 219),
        Color::White => (255, 255, 255),
        Color::Reset | Color::Indexed(_) => DEFAULT_FG,
    }
}

use ratatui::style::Color;

// Studio palette (dark background, warm highlights)
pub const BRAND_TEAL: Color = Color::Rgb(45, 212, 191);
pub const BRAND_VIOLET: Color = Color::Rgb(167, 139, 250);
pub const BRAND_PINK: Color = Color::Rgb(244, 114, 182);
pub const HIGHLIGHT_BG: Color = Color::Rgb(38, 38, 52);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219); // gray-300
pub const TEXT_DIM: Color = Color::Rgb(156, 163, 175); // gray-400
pub const BORDER: Color = Color::Rgb(55, 65, 81); // gray-700
pub const STAR_GOLD: Color = Color::Rgb(250, 204, 21);

/// Terminal colour for a category's accent name
pub fn accent_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "pink" => BRAND_PINK,
        "rose" => Color::Rgb(251, 113, 133),
        "blue" => Color::Rgb(96, 165, 250),
        "cyan" => Color::Rgb(34, 211, 238),
        "emerald" => Color::Rgb(52, 211, 153),
        "teal" => BRAND_TEAL,
        "orange" => Color::Rgb(251, 146, 60),
        "purple" | "violet" => BRAND_VIOLET,
        "amber" | "yellow" => STAR_GOLD,
        _ => BRAND_TEAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_fallback() {
        assert_eq!(accent_color("PINK"), BRAND_PINK);
        assert_eq!(accent_color("chartreuse"), BRAND_TEAL);
    }
}

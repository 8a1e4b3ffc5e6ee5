use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub checked: Color,
    pub checkbox: Color,
    pub remove: Color,
    pub selected_bg: Color,
    pub input_active: Color,
    pub placeholder: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            title: Color::Magenta,
            checked: Color::DarkGray,
            checkbox: Color::Cyan,
            remove: Color::Rgb(255, 107, 107),
            selected_bg: Color::Rgb(50, 50, 60),
            input_active: Color::Cyan,
            placeholder: Color::DarkGray,
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            selected_bg: Color::Rgb(40, 40, 40),
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            title: Color::Rgb(120, 40, 160),
            checked: Color::Gray,
            checkbox: Color::Blue,
            remove: Color::Rgb(200, 50, 50),
            selected_bg: Color::Rgb(220, 230, 245),
            input_active: Color::Blue,
            placeholder: Color::Gray,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_name(&config.theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

use ratatui::style::Color;

use crate::calendar::PaletteColor;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub error: Color,
    pub palette: EventPalette,
}

/// One display color per palette tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventPalette {
    pub blue: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub purple: Color,
}

impl EventPalette {
    pub fn color(&self, tag: PaletteColor) -> Color {
        match tag {
            PaletteColor::Blue => self.blue,
            PaletteColor::Green => self.green,
            PaletteColor::Red => self.red,
            PaletteColor::Yellow => self.yellow,
            PaletteColor::Purple => self.purple,
        }
    }
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            command_mode: Color::White,
            error: Color::Red,
            palette: EventPalette {
                blue: Color::LightBlue,
                green: Color::LightGreen,
                red: Color::LightRed,
                yellow: Color::LightYellow,
                purple: Color::LightMagenta,
            },
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            today: Color::Rgb(184, 187, 38),
            weekday_header: Color::Rgb(254, 128, 25),
            inactive_day: Color::Rgb(146, 131, 116),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            command_mode: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
            palette: EventPalette {
                blue: Color::Rgb(131, 165, 152),
                green: Color::Rgb(184, 187, 38),
                red: Color::Rgb(251, 73, 52),
                yellow: Color::Rgb(250, 189, 47),
                purple: Color::Rgb(211, 134, 155),
            },
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(163, 190, 140),
            weekday_header: Color::Rgb(235, 203, 139),
            inactive_day: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            command_mode: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
            palette: EventPalette {
                blue: Color::Rgb(129, 161, 193),
                green: Color::Rgb(163, 190, 140),
                red: Color::Rgb(191, 97, 106),
                yellow: Color::Rgb(235, 203, 139),
                purple: Color::Rgb(180, 142, 173),
            },
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(248, 248, 242),
            today: Color::Rgb(80, 250, 123),
            weekday_header: Color::Rgb(241, 250, 140),
            inactive_day: Color::Rgb(98, 114, 164),
            status_bar: Color::Rgb(248, 248, 242),
            help_title: Color::Rgb(139, 233, 253),
            help_section: Color::Rgb(241, 250, 140),
            command_mode: Color::Rgb(248, 248, 242),
            error: Color::Rgb(255, 85, 85),
            palette: EventPalette {
                blue: Color::Rgb(139, 233, 253),
                green: Color::Rgb(80, 250, 123),
                red: Color::Rgb(255, 85, 85),
                yellow: Color::Rgb(241, 250, 140),
                purple: Color::Rgb(189, 147, 249),
            },
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            title: Color::Rgb(38, 139, 210),
            selected_bg: Color::Rgb(7, 54, 66),
            selected_fg: Color::Rgb(147, 161, 161),
            today: Color::Rgb(133, 153, 0),
            weekday_header: Color::Rgb(181, 137, 0),
            inactive_day: Color::Rgb(88, 110, 117),
            status_bar: Color::Rgb(147, 161, 161),
            help_title: Color::Rgb(38, 139, 210),
            help_section: Color::Rgb(181, 137, 0),
            command_mode: Color::Rgb(147, 161, 161),
            error: Color::Rgb(220, 50, 47),
            palette: EventPalette {
                blue: Color::Rgb(38, 139, 210),
                green: Color::Rgb(133, 153, 0),
                red: Color::Rgb(220, 50, 47),
                yellow: Color::Rgb(181, 137, 0),
                purple: Color::Rgb(108, 113, 196),
            },
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            title: Color::Rgb(102, 217, 239),
            selected_bg: Color::Rgb(73, 72, 62),
            selected_fg: Color::Rgb(248, 248, 240),
            today: Color::Rgb(166, 226, 46),
            weekday_header: Color::Rgb(230, 219, 116),
            inactive_day: Color::Rgb(117, 113, 94),
            status_bar: Color::Rgb(248, 248, 240),
            help_title: Color::Rgb(102, 217, 239),
            help_section: Color::Rgb(230, 219, 116),
            command_mode: Color::Rgb(248, 248, 240),
            error: Color::Rgb(249, 38, 114),
            palette: EventPalette {
                blue: Color::Rgb(102, 217, 239),
                green: Color::Rgb(166, 226, 46),
                red: Color::Rgb(249, 38, 114),
                yellow: Color::Rgb(230, 219, 116),
                purple: Color::Rgb(174, 129, 255),
            },
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "solarized-dark" | "solarized" => Self::solarized_dark(),
            "monokai" => Self::monokai(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula", "solarized-dark", "monokai"]
    }

    pub fn event_color(&self, tag: PaletteColor) -> Color {
        self.palette.color(tag)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn get_by_name_is_case_insensitive() {
        assert_eq!(Theme::get_by_name("Gruvbox").name, "gruvbox");
        assert_eq!(Theme::get_by_name("solarized").name, "solarized-dark");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(Theme::get_by_name("neon"), Theme::default_theme());
    }

    #[test]
    fn every_theme_gives_each_palette_tag_a_distinct_color() {
        for name in Theme::available_themes() {
            let theme = Theme::get_by_name(name);
            let colors: HashSet<String> = PaletteColor::ALL
                .iter()
                .map(|tag| format!("{:?}", theme.event_color(*tag)))
                .collect();
            assert_eq!(colors.len(), PaletteColor::ALL.len(), "theme {}", name);
        }
    }
}

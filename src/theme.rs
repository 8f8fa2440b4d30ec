use crate::config::{Config, ThemeMode};
use ratatui::style::Color;

/// A named terminal palette. Ids match the theme menu of the original web
/// client so a carried-over config keeps its look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    pub label: &'static str,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Theme {
    pub const MIDNIGHT: Theme = Theme {
        id: "default",
        label: "Midnight",
        background: Color::Rgb(15, 23, 42),
        surface: Color::Rgb(30, 41, 59),
        text: Color::Rgb(226, 232, 240),
        muted: Color::Rgb(100, 116, 139),
        border: Color::Rgb(51, 65, 85),
        accent: Color::Rgb(167, 139, 250),
        success: Color::Rgb(74, 222, 128),
        warning: Color::Rgb(250, 204, 21),
        danger: Color::Rgb(248, 113, 113),
    };

    pub const PAPER: Theme = Theme {
        id: "light",
        label: "Paper",
        background: Color::Rgb(248, 250, 252),
        surface: Color::Rgb(226, 232, 240),
        text: Color::Rgb(15, 23, 42),
        muted: Color::Rgb(100, 116, 139),
        border: Color::Rgb(203, 213, 225),
        accent: Color::Rgb(124, 58, 237),
        success: Color::Rgb(22, 163, 74),
        warning: Color::Rgb(202, 138, 4),
        danger: Color::Rgb(220, 38, 38),
    };

    pub const TOKYO_NIGHT: Theme = Theme {
        id: "tokyo-night",
        label: "Tokyo Night",
        background: Color::Rgb(26, 27, 38),
        surface: Color::Rgb(36, 40, 59),
        text: Color::Rgb(192, 202, 245),
        muted: Color::Rgb(86, 95, 137),
        border: Color::Rgb(65, 72, 104),
        accent: Color::Rgb(122, 162, 247),
        success: Color::Rgb(158, 206, 106),
        warning: Color::Rgb(224, 175, 104),
        danger: Color::Rgb(247, 118, 142),
    };

    pub const AYU: Theme = Theme {
        id: "ayu",
        label: "Ayu Mirage",
        background: Color::Rgb(15, 20, 25),
        surface: Color::Rgb(29, 36, 44),
        text: Color::Rgb(230, 225, 207),
        muted: Color::Rgb(92, 103, 115),
        border: Color::Rgb(37, 51, 64),
        accent: Color::Rgb(255, 180, 84),
        success: Color::Rgb(184, 204, 82),
        warning: Color::Rgb(231, 197, 71),
        danger: Color::Rgb(240, 113, 120),
    };

    pub const CATPPUCCIN: Theme = Theme {
        id: "catppuccin",
        label: "Catppuccin",
        background: Color::Rgb(30, 30, 46),
        surface: Color::Rgb(49, 50, 68),
        text: Color::Rgb(205, 214, 244),
        muted: Color::Rgb(108, 112, 134),
        border: Color::Rgb(69, 71, 90),
        accent: Color::Rgb(203, 166, 247),
        success: Color::Rgb(166, 227, 161),
        warning: Color::Rgb(249, 226, 175),
        danger: Color::Rgb(243, 139, 168),
    };

    pub const ALL: [Theme; 5] = [
        Theme::MIDNIGHT,
        Theme::PAPER,
        Theme::TOKYO_NIGHT,
        Theme::AYU,
        Theme::CATPPUCCIN,
    ];

    /// Unknown ids fall back to the default palette.
    pub fn by_id(id: &str) -> Theme {
        Theme::ALL
            .iter()
            .find(|t| t.id == id)
            .copied()
            .unwrap_or(Theme::MIDNIGHT)
    }

    pub fn index_of(id: &str) -> usize {
        Theme::ALL.iter().position(|t| t.id == id).unwrap_or(0)
    }

    /// Terminals expose no usable light/dark preference signal, so system
    /// mode resolves to the default palette.
    pub fn resolve(config: &Config) -> Theme {
        match config.theme_mode {
            ThemeMode::System => Theme::MIDNIGHT,
            ThemeMode::Manual => Theme::by_id(&config.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in Theme::ALL.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_by_id_finds_each_theme() {
        for theme in Theme::ALL {
            assert_eq!(Theme::by_id(theme.id).label, theme.label);
        }
    }

    #[test]
    fn test_by_id_falls_back_to_default() {
        assert_eq!(Theme::by_id("no-such-theme").id, "default");
    }

    #[test]
    fn test_resolve_system_mode_ignores_stored_theme() {
        let config = Config {
            theme: "light".to_string(),
            theme_mode: ThemeMode::System,
            ..Config::default()
        };
        assert_eq!(Theme::resolve(&config).id, "default");
    }

    #[test]
    fn test_resolve_manual_mode_uses_stored_theme() {
        let config = Config {
            theme: "catppuccin".to_string(),
            theme_mode: ThemeMode::Manual,
            ..Config::default()
        };
        assert_eq!(Theme::resolve(&config).id, "catppuccin");
    }

    #[test]
    fn test_index_of_unknown_is_zero() {
        assert_eq!(Theme::index_of("nope"), 0);
        assert_eq!(Theme::index_of("ayu"), 3);
    }
}

use ratatui::style::Color;

/// Color palette for the viewer
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    /// Folder labels
    pub folder_fg: Color,
    /// Expansion indicators
    pub indicator_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    /// Dimmed chrome: borders, status bar, inactive buttons
    pub chrome_fg: Color,
    pub button_fg: Color,
    pub button_pressed_bg: Color,
    pub error_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(20, 22, 26),
            fg: Color::Rgb(210, 210, 205),
            folder_fg: Color::Rgb(120, 170, 255),
            indicator_fg: Color::Rgb(200, 160, 60),
            selection_bg: Color::Rgb(50, 60, 80),
            selection_fg: Color::Rgb(235, 235, 230),
            chrome_fg: Color::Rgb(110, 115, 125),
            button_fg: Color::Rgb(180, 185, 190),
            button_pressed_bg: Color::Rgb(70, 80, 100),
            error_fg: Color::Rgb(230, 100, 100),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(246, 246, 242),
            fg: Color::Rgb(40, 40, 45),
            folder_fg: Color::Rgb(30, 80, 180),
            indicator_fg: Color::Rgb(150, 110, 20),
            selection_bg: Color::Rgb(200, 210, 230),
            selection_fg: Color::Rgb(20, 20, 25),
            chrome_fg: Color::Rgb(130, 130, 135),
            button_fg: Color::Rgb(70, 70, 75),
            button_pressed_bg: Color::Rgb(180, 190, 210),
            error_fg: Color::Rgb(180, 40, 40),
        }
    }

    /// Look up a theme by its config name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

use ratatui::style::{Color, Modifier, Style};

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            help_bar: Style::default()
                .bg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Get color for difficulty badges
    pub fn difficulty_color(difficulty: &str) -> Color {
        match difficulty.to_ascii_lowercase().as_str() {
            "beginner" | "easy" => Color::Green,
            "intermediate" | "medium" => Color::Yellow,
            "advanced" | "hard" | "expert" => Color::Red,
            _ => Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_colors() {
        assert_eq!(Theme::difficulty_color("Beginner"), Color::Green);
        assert_eq!(Theme::difficulty_color("ADVANCED"), Color::Red);
        assert_eq!(Theme::difficulty_color(""), Color::Gray);
    }
}

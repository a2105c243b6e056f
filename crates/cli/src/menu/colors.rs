use crossterm::style::{style, Color, Stylize};

/// Kinds of status message printed around the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Warning,
    Failure,
}

impl Notice {
    fn color(self) -> Color {
        match self {
            Notice::Success => Color::DarkGreen,
            Notice::Warning => Color::Yellow,
            Notice::Failure => Color::Red,
        }
    }
}

/// Renders `text` in the color for `notice`, or as plain text when color is off.
#[must_use]
pub fn paint(text: &str, notice: Notice, use_color: bool) -> String {
    if use_color {
        style(text).with(notice.color()).to_string()
    } else {
        text.to_string()
    }
}

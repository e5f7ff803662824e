//! Toolbar with the global commands

use crate::view::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Global commands exposed on the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    OpenAll,
    CloseAll,
    About,
}

impl ToolbarCommand {
    fn label(self) -> &'static str {
        match self {
            ToolbarCommand::OpenAll => " Open All (o) ",
            ToolbarCommand::CloseAll => " Close All (c) ",
            ToolbarCommand::About => " About (a) ",
        }
    }
}

const BUTTONS: [ToolbarCommand; 3] = [
    ToolbarCommand::OpenAll,
    ToolbarCommand::CloseAll,
    ToolbarCommand::About,
];

/// Rendered positions of the toolbar buttons, for hit testing
#[derive(Debug, Clone, Default)]
pub struct ToolbarLayout {
    buttons: Vec<(Rect, ToolbarCommand)>,
}

impl ToolbarLayout {
    /// Resolve a screen position to the button under it
    pub fn hit(&self, column: u16, row: u16) -> Option<ToolbarCommand> {
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains((column, row).into()))
            .map(|&(_, command)| command)
    }
}

/// Render the toolbar and return the button layout for hit testing.
///
/// `pressed` highlights the button currently held down with the mouse.
pub fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    pressed: Option<ToolbarCommand>,
) -> ToolbarLayout {
    let mut layout = ToolbarLayout::default();
    let mut spans = Vec::new();
    let mut x = area.x;

    for command in BUTTONS {
        let label = command.label();
        let width = label.width() as u16;

        let style = if pressed == Some(command) {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.button_pressed_bg)
        } else {
            Style::default()
                .fg(theme.button_fg)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));

        if x + width <= area.x + area.width {
            layout
                .buttons
                .push((Rect::new(x, area.y, width, 1), command));
        }
        x += width + 1;
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg).fg(theme.fg));
    frame.render_widget(paragraph, area);

    layout
}

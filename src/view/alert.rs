//! Blocking modal alerts
//!
//! The single user-visible notification channel: structural integrity
//! failures and the About text both surface here. An active alert eats
//! all input until dismissed.

use crate::view::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Severity of a modal alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Error".to_string(),
            lines: vec![message.into()],
        }
    }

    pub fn about() -> Self {
        Self {
            kind: AlertKind::Info,
            title: "About".to_string(),
            lines: vec![
                "Clicking on a folder row toggles the directory between an".to_string(),
                "open and a closed state. A leaf is a directory which only".to_string(),
                "contains files, and does not respond to clicking.".to_string(),
                "".to_string(),
                "Open All expands every directory at once; Close All".to_string(),
                "collapses the view back to the root entry.".to_string(),
            ],
        }
    }
}

/// Render the alert centered over the given area.
pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert, theme: &Theme) {
    let popup = centered_rect(area, 56, (alert.lines.len() as u16).saturating_add(4));

    let border_color = match alert.kind {
        AlertKind::Error => theme.error_fg,
        AlertKind::Info => theme.chrome_fg,
    };

    let mut lines: Vec<Line> = alert.lines.iter().map(|l| Line::raw(l.clone())).collect();
    lines.push(Line::raw(""));
    lines.push(
        Line::styled(
            "press any key to dismiss",
            Style::default()
                .fg(theme.chrome_fg)
                .add_modifier(Modifier::ITALIC),
        )
        .centered(),
    );

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", alert.title))
                .border_style(Style::default().fg(border_color)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A rect of the requested size centered in `bounds`, shrunk to fit.
fn centered_rect(bounds: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let x = bounds.x + (bounds.width - width) / 2;
    let y = bounds.y + (bounds.height - height) / 2;
    Rect::new(x, y, width, height)
}

use crate::config::TreeViewConfig;
use crate::tree::{DirTree, NodeId};
use crate::view::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct TreeViewRenderer;

impl TreeViewRenderer {
    /// Render the tree rows in the given frame area.
    ///
    /// Only the `[scroll_offset, scroll_offset + viewport)` window of rows
    /// is passed to the widget, keeping scrolling under manual control.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        tree: &DirTree,
        rows: &[(NodeId, usize)],
        selected_index: Option<usize>,
        scroll_offset: usize,
        config: &TreeViewConfig,
        theme: &Theme,
    ) {
        let viewport_height = viewport_height(area);

        // Clamp to valid range so a stale offset can't slice out of bounds
        let scroll_offset = scroll_offset.min(rows.len());
        let visible_end = (scroll_offset + viewport_height).min(rows.len());
        let visible_rows = &rows[scroll_offset..visible_end];

        let content_width = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = visible_rows
            .iter()
            .map(|&(node_id, depth)| Self::render_row(tree, node_id, depth, config, theme, content_width))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Directory Tree ")
                    .title_style(Style::default().fg(theme.fg))
                    .border_style(Style::default().fg(theme.chrome_fg))
                    .style(Style::default().bg(theme.bg)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.selection_bg)
                    .fg(theme.selection_fg),
            );

        // Selection is relative to the viewport window
        let mut list_state = ListState::default();
        if let Some(selected) = selected_index {
            if selected >= scroll_offset && selected < scroll_offset + viewport_height {
                list_state.select(Some(selected - scroll_offset));
            }
        }

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_row(
        tree: &DirTree,
        node_id: NodeId,
        depth: usize,
        config: &TreeViewConfig,
        theme: &Theme,
        content_width: usize,
    ) -> ListItem<'static> {
        let Some(node) = tree.get_node(node_id) else {
            return ListItem::new(Line::default());
        };

        let mut spans = Vec::new();

        if depth > 0 {
            spans.push(Span::raw(" ".repeat(depth * config.indent_width)));
        }

        let indicator = if node.is_leaf() {
            config.leaf_indicator.as_str()
        } else if node.is_open() {
            config.open_indicator.as_str()
        } else {
            config.closed_indicator.as_str()
        };
        spans.push(Span::styled(
            indicator.to_string(),
            Style::default().fg(theme.indicator_fg),
        ));

        let used = depth * config.indent_width + indicator.width();
        let label = truncate_to_width(&node.label, content_width.saturating_sub(used));
        let label_style = if node.is_leaf() {
            Style::default().fg(theme.fg)
        } else {
            Style::default().fg(theme.folder_fg)
        };
        spans.push(Span::styled(label, label_style));

        ListItem::new(Line::from(spans)).style(Style::default().bg(theme.bg))
    }
}

/// Rows that fit inside the bordered tree area
pub fn viewport_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

/// Resolve a click position inside the tree area to a row index.
///
/// Returns an index into the full row list (scroll offset applied), or
/// None for clicks on the border or below the last row.
pub fn hit_test_row(
    area: Rect,
    scroll_offset: usize,
    row_count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    if column <= area.x || column >= area.x + area.width.saturating_sub(1) {
        return None;
    }
    if row <= area.y || row >= area.y + area.height.saturating_sub(1) {
        return None;
    }

    let viewport_row = (row - area.y - 1) as usize;
    let index = scroll_offset + viewport_row;
    if index < row_count {
        Some(index)
    } else {
        None
    }
}

/// Truncate a string to the given display width, appending an ellipsis
/// when anything was cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_inside_rows() {
        let area = Rect::new(0, 1, 40, 10);

        // First row inside the border
        assert_eq!(hit_test_row(area, 0, 5, 3, 2), Some(0));
        assert_eq!(hit_test_row(area, 0, 5, 3, 4), Some(2));
        // Scroll offset shifts the mapping
        assert_eq!(hit_test_row(area, 3, 10, 3, 2), Some(3));
    }

    #[test]
    fn test_hit_test_borders_and_empty_space() {
        let area = Rect::new(0, 1, 40, 10);

        // Top border
        assert_eq!(hit_test_row(area, 0, 5, 3, 1), None);
        // Bottom border
        assert_eq!(hit_test_row(area, 0, 50, 3, 10), None);
        // Left and right border columns
        assert_eq!(hit_test_row(area, 0, 5, 0, 2), None);
        assert_eq!(hit_test_row(area, 0, 5, 39, 2), None);
        // Below the last row
        assert_eq!(hit_test_row(area, 0, 2, 3, 5), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly", 7), "exactly");
        assert_eq!(truncate_to_width("toolongname", 6), "toolo…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_viewport_height_accounts_for_borders() {
        assert_eq!(viewport_height(Rect::new(0, 0, 40, 12)), 10);
        assert_eq!(viewport_height(Rect::new(0, 0, 40, 1)), 0);
    }
}

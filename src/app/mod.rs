// Application shell: owns the controller and drives it from terminal
// events. Single-threaded; each event handler runs to completion before
// the next event is read.

use crate::config::Config;
use crate::tree::{DirTree, NodeId, TreeViewController};
use crate::view::alert::{render_alert, Alert};
use crate::view::theme::Theme;
use crate::view::toolbar::{render_toolbar, ToolbarCommand, ToolbarLayout};
use crate::view::tree_view::{self, TreeViewRenderer};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::io;

pub struct App {
    controller: TreeViewController,
    config: Config,
    theme: Theme,
    /// Currently selected node
    selected: Option<NodeId>,
    /// Scroll offset (index into rendered rows)
    scroll_offset: usize,
    /// Last known viewport height, updated during rendering
    viewport_height: usize,
    /// Text shown in the status bar
    status_text: String,
    /// Active blocking alert, if any
    alert: Option<Alert>,
    /// Toolbar button currently held down with the mouse
    pressed_button: Option<ToolbarCommand>,
    /// Rendered toolbar positions, updated during rendering
    toolbar_layout: ToolbarLayout,
    /// Rendered tree area, updated during rendering
    tree_area: Rect,
}

impl App {
    /// Attach the controller to a fully constructed tree.
    ///
    /// The view starts fully closed with the root selected.
    pub fn new(tree: DirTree, config: Config) -> Self {
        let theme = Theme::by_name(&config.theme);
        let controller = TreeViewController::attach(tree);
        let selected = Some(controller.tree().root_id());

        Self {
            controller,
            config,
            theme,
            selected,
            scroll_offset: 0,
            viewport_height: 10,
            status_text: String::new(),
            alert: None,
            pressed_button: None,
            toolbar_layout: ToolbarLayout::default(),
            tree_area: Rect::default(),
        }
    }

    pub fn controller(&self) -> &TreeViewController {
        &self.controller
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw_frame(frame))?;

            let event = event::read()?;
            if !self.handle_event(event) {
                break Ok(());
            }
        }
    }

    fn draw_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let toolbar_area = Rect::new(area.x, area.y, area.width, 1);
        let tree_area = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height.saturating_sub(2),
        );
        let status_area = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(1),
            area.width,
            1,
        );

        self.tree_area = tree_area;
        self.viewport_height = tree_view::viewport_height(tree_area);

        self.toolbar_layout =
            render_toolbar(frame, toolbar_area, &self.theme, self.pressed_button);

        let rows = self.controller.tree().rendered_rows();
        let selected_index = self.selected_index(&rows);
        TreeViewRenderer::render(
            frame,
            tree_area,
            self.controller.tree(),
            &rows,
            selected_index,
            self.scroll_offset,
            &self.config.tree,
            &self.theme,
        );

        let root_label = self
            .controller
            .tree()
            .get_node(self.controller.tree().root_id())
            .map(|n| n.label.clone())
            .unwrap_or_default();
        self.status_text = format!(" {}  |  {} rows ", root_label, rows.len());
        frame.render_widget(
            Paragraph::new(self.status_text.clone())
                .style(Style::default().fg(self.theme.chrome_fg).bg(self.theme.bg)),
            status_area,
        );

        if let Some(alert) = &self.alert {
            render_alert(frame, area, alert, &self.theme);
        }
    }

    /// Handle one terminal event. Returns false to quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        // A blocking alert eats all input until dismissed
        if self.alert.is_some() {
            match event {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.alert = None;
                }
                Event::Mouse(mouse_event)
                    if matches!(mouse_event.kind, MouseEventKind::Down(_)) =>
                {
                    self.alert = None;
                }
                _ => {}
            }
            return true;
        }

        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
                true
            }
            _ => true,
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Esc, ..
            } => return false,

            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => return false,

            KeyEvent {
                code: KeyCode::Char('o'),
                ..
            } => self.execute(ToolbarCommand::OpenAll),

            KeyEvent {
                code: KeyCode::Char('c'),
                ..
            } => self.execute(ToolbarCommand::CloseAll),

            KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }
            | KeyEvent {
                code: KeyCode::F(1),
                ..
            } => self.execute(ToolbarCommand::About),

            KeyEvent {
                code: KeyCode::Up, ..
            } => self.select_prev(),

            KeyEvent {
                code: KeyCode::Down,
                ..
            } => self.select_next(),

            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } => self.select_page(-1),

            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } => self.select_page(1),

            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => self.toggle_selected(),

            _ => {}
        }

        true
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(command) = self
                    .toolbar_layout
                    .hit(mouse_event.column, mouse_event.row)
                {
                    self.pressed_button = Some(command);
                } else {
                    let rows = self.controller.tree().rendered_rows();
                    if let Some(index) = tree_view::hit_test_row(
                        self.tree_area,
                        self.scroll_offset,
                        rows.len(),
                        mouse_event.column,
                        mouse_event.row,
                    ) {
                        self.click_row(rows[index].0);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // A button fires on release over the same button it was
                // pressed on
                let pressed = self.pressed_button.take();
                let released_over = self
                    .toolbar_layout
                    .hit(mouse_event.column, mouse_event.row);
                if let (Some(command), Some(hit)) = (pressed, released_over) {
                    if command == hit {
                        self.execute(command);
                    }
                }
            }
            MouseEventKind::ScrollDown => {
                let row_count = self.controller.tree().rendered_rows().len();
                let max_offset = row_count.saturating_sub(self.viewport_height);
                self.scroll_offset = (self.scroll_offset + 1).min(max_offset);
            }
            MouseEventKind::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn execute(&mut self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::OpenAll => {
                self.controller.open_all();
            }
            ToolbarCommand::CloseAll => {
                self.controller.close_all();
                self.selected = Some(self.controller.tree().root_id());
                self.scroll_offset = 0;
            }
            ToolbarCommand::About => {
                self.alert = Some(Alert::about());
            }
        }
        self.clamp_selection();
    }

    /// Select the clicked row; toggle it when it is a folder.
    fn click_row(&mut self, id: NodeId) {
        self.selected = Some(id);
        let is_leaf = self
            .controller
            .tree()
            .get_node(id)
            .map(|n| n.is_leaf())
            .unwrap_or(true);
        if !is_leaf {
            self.toggle_node(id);
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected {
            let is_leaf = self
                .controller
                .tree()
                .get_node(id)
                .map(|n| n.is_leaf())
                .unwrap_or(true);
            if !is_leaf {
                self.toggle_node(id);
            }
        }
    }

    fn toggle_node(&mut self, id: NodeId) {
        if let Err(err) = self.controller.toggle(id) {
            tracing::error!("structural integrity failure: {}", err);
            self.alert = Some(Alert::error(err.to_string()));
        }
        self.clamp_selection();
    }

    /// Select the next rendered row
    fn select_next(&mut self) {
        let rows = self.controller.tree().rendered_rows();
        if rows.is_empty() {
            return;
        }
        match self.selected_index(&rows) {
            Some(pos) if pos + 1 < rows.len() => self.selected = Some(rows[pos + 1].0),
            Some(_) => {}
            None => self.selected = Some(rows[0].0),
        }
        self.ensure_selection_visible(&rows);
    }

    /// Select the previous rendered row
    fn select_prev(&mut self) {
        let rows = self.controller.tree().rendered_rows();
        if rows.is_empty() {
            return;
        }
        match self.selected_index(&rows) {
            Some(pos) if pos > 0 => self.selected = Some(rows[pos - 1].0),
            Some(_) => {}
            None => self.selected = Some(rows[0].0),
        }
        self.ensure_selection_visible(&rows);
    }

    /// Move selection by a page up (-1) or down (+1)
    fn select_page(&mut self, direction: isize) {
        let rows = self.controller.tree().rendered_rows();
        if rows.is_empty() || self.viewport_height == 0 {
            return;
        }
        let pos = self.selected_index(&rows).unwrap_or(0);
        let new_pos = if direction < 0 {
            pos.saturating_sub(self.viewport_height)
        } else {
            (pos + self.viewport_height).min(rows.len() - 1)
        };
        self.selected = Some(rows[new_pos].0);
        self.ensure_selection_visible(&rows);
    }

    fn selected_index(&self, rows: &[(NodeId, usize)]) -> Option<usize> {
        let selected = self.selected?;
        rows.iter().position(|&(id, _)| id == selected)
    }

    /// After a mutation the selected node may no longer be rendered; fall
    /// back to the root, which always is.
    fn clamp_selection(&mut self) {
        let rows = self.controller.tree().rendered_rows();
        if self.selected_index(&rows).is_none() {
            self.selected = Some(self.controller.tree().root_id());
        }
        self.ensure_selection_visible(&rows);
    }

    /// Adjust scroll offset so the selection stays within the viewport
    fn ensure_selection_visible(&mut self, rows: &[(NodeId, usize)]) {
        if self.viewport_height == 0 {
            return;
        }
        if let Some(pos) = self.selected_index(rows) {
            if pos < self.scroll_offset {
                self.scroll_offset = pos;
            } else if pos >= self.scroll_offset + self.viewport_height {
                self.scroll_offset = pos - self.viewport_height + 1;
            }
        }
        self.scroll_offset = self.scroll_offset.min(rows.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ManifestNode;
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_app() -> App {
        // root -> A -> [B (leaf), C -> [D (leaf)]]
        let manifest = ManifestNode::folder(
            "root",
            vec![ManifestNode::folder(
                "A",
                vec![
                    ManifestNode::entry("B"),
                    ManifestNode::folder("C", vec![ManifestNode::entry("D")]),
                ],
            )],
        );
        App::new(DirTree::from_manifest(&manifest), Config::default())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn draw(app: &mut App) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.draw_frame(frame)).unwrap();
    }

    #[test]
    fn test_starts_fully_closed() {
        let app = sample_app();

        assert_eq!(app.controller().tree().rendered_rows().len(), 1);
        assert_eq!(app.selected, Some(app.controller().tree().root_id()));
    }

    #[test]
    fn test_open_all_and_close_all_keys() {
        let mut app = sample_app();

        assert!(app.handle_event(key(KeyCode::Char('o'))));
        assert_eq!(app.controller().tree().rendered_rows().len(), 5);

        assert!(app.handle_event(key(KeyCode::Char('c'))));
        assert_eq!(app.controller().tree().rendered_rows().len(), 1);
        assert_eq!(app.selected, Some(app.controller().tree().root_id()));
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_enter_toggles_selected_folder() {
        let mut app = sample_app();

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.controller().tree().rendered_rows().len(), 2);

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.controller().tree().rendered_rows().len(), 1);
    }

    #[test]
    fn test_enter_on_leaf_does_nothing() {
        let mut app = sample_app();

        // Open root, then A; move selection down to B (a leaf)
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Down));

        let rows_before = app.controller().tree().rendered_rows();
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.controller().tree().rendered_rows(), rows_before);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();

        assert!(!app.handle_event(key(KeyCode::Char('q'))));
        assert!(!sample_app().handle_event(key(KeyCode::Esc)));
        assert!(!sample_app().handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ))));
    }

    #[test]
    fn test_alert_blocks_input_until_dismissed() {
        let mut app = sample_app();

        app.handle_event(key(KeyCode::Char('a')));
        assert!(app.alert.is_some());

        // The first key only dismisses the alert
        assert!(app.handle_event(key(KeyCode::Char('o'))));
        assert!(app.alert.is_none());
        assert_eq!(app.controller().tree().rendered_rows().len(), 1);

        // Even quit is swallowed while an alert is up
        app.handle_event(key(KeyCode::Char('a')));
        assert!(app.handle_event(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_structural_error_surfaces_as_alert() {
        let manifest: ManifestNode = serde_json::from_str(
            r#"{ "name": "root", "children": [ { "name": "x", "kind": "separator" } ] }"#,
        )
        .unwrap();
        let mut app = App::new(DirTree::from_manifest(&manifest), Config::default());

        app.handle_event(key(KeyCode::Enter));

        let alert = app.alert.as_ref().expect("alert should be raised");
        assert_eq!(alert.kind, crate::view::AlertKind::Error);
        assert!(alert.lines[0].contains("separator"));
    }

    #[test]
    fn test_mouse_click_toggles_row() {
        let mut app = sample_app();
        draw(&mut app);

        // Click the root row: first row inside the tree border
        let (x, y) = (app.tree_area.x + 2, app.tree_area.y + 1);
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }));

        assert_eq!(app.controller().tree().rendered_rows().len(), 2);
    }

    #[test]
    fn test_toolbar_click_fires_on_release_over_same_button() {
        let mut app = sample_app();
        draw(&mut app);

        let press = |kind, column| {
            Event::Mouse(MouseEvent {
                kind,
                column,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };

        // Press on Open All, release on it: command fires
        app.handle_event(press(MouseEventKind::Down(MouseButton::Left), 2));
        app.handle_event(press(MouseEventKind::Up(MouseButton::Left), 2));
        assert_eq!(app.controller().tree().rendered_rows().len(), 5);

        // Press on Close All, release elsewhere: nothing happens
        app.handle_event(press(MouseEventKind::Down(MouseButton::Left), 17));
        app.handle_event(press(MouseEventKind::Up(MouseButton::Left), 60));
        assert_eq!(app.controller().tree().rendered_rows().len(), 5);
    }

    #[test]
    fn test_selection_navigation() {
        let mut app = sample_app();
        app.handle_event(key(KeyCode::Char('o')));

        let rows = app.controller().tree().rendered_rows();
        assert_eq!(app.selected, Some(rows[0].0));

        app.handle_event(key(KeyCode::Down));
        assert_eq!(app.selected, Some(rows[1].0));

        app.handle_event(key(KeyCode::Up));
        assert_eq!(app.selected, Some(rows[0].0));

        // Up at the top stays put
        app.handle_event(key(KeyCode::Up));
        assert_eq!(app.selected, Some(rows[0].0));
    }
}

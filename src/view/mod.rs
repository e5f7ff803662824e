pub mod alert;
pub mod theme;
pub mod toolbar;
pub mod tree_view;

pub use alert::{Alert, AlertKind};
pub use theme::Theme;
pub use toolbar::{ToolbarCommand, ToolbarLayout};
pub use tree_view::TreeViewRenderer;

// Viewer library - exposes all core modules for testing

pub mod app;
pub mod config;
pub mod logging;
pub mod tree;
pub mod view;

pub mod autosave;
pub mod cli;
pub mod config;
pub mod logging;
pub mod settings;
pub mod ui;

//! Front-end for the gridnav pathfinder: argument parsing, one-shot route
//! queries, endpoint prompts, and a line-based grid editor.

pub mod cli;
pub mod commands;
pub mod editor;
pub mod prompt;
pub mod view;
pub mod worker;

pub use cli::{Cli, Command};
pub use editor::{Editor, EditorCommand, EditorConfig, EditorError};
pub use worker::SearchWorker;

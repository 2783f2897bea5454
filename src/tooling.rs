//! Tooling Layer
//!
//! Drivers around the record store: the clap CLI and the interactive menu.
//! Neither holds global state; the CLI context owns the store and lends it to
//! the menu for the length of a session.

pub mod cli;
pub mod menu;

pub use cli::{Cli, CliContext, Commands};
pub use menu::{MenuChoice, MenuExit, MenuLoop};

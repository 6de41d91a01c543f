//! Interactive shell
//!
//! This module contains the console wrapper, the command table, and the
//! handlers that bridge prompted input with the service layer.

pub mod account;
pub mod category;
pub mod commands;
pub mod console;
pub mod operation;
pub mod report;
pub mod shell;
pub mod transfer;

pub use commands::ShellCommand;
pub use console::Console;
pub use shell::{Flow, Shell};

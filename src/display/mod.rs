//! Display formatting for terminal output
//!
//! Builds plain-text tables for the shell. Functions return `String`s so the
//! caller decides where they are written.

pub mod account;
pub mod category;
pub mod operation;
pub mod report;

pub use account::format_account_list;
pub use category::format_category_list;
pub use operation::format_operation_list;
pub use report::{format_category_report, format_summary};

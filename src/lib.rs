//! FinTrack - console personal finance tracker
//!
//! This library provides the core of the FinTrack application: bank accounts,
//! income/expense categories, and operations held in memory behind a caching
//! repository, with CSV import/export and period reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Command-line session settings
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, categories, operations, money)
//! - `storage`: Generic in-memory repository and its caching proxy
//! - `services`: Business logic layer
//! - `import`: CSV import pipeline
//! - `export`: CSV export
//! - `reports`: Report rows and sort strategies
//! - `display`: Terminal table formatting
//! - `cli`: Interactive shell
//!
//! # Example
//!
//! ```rust
//! use fintrack_cli::models::Money;
//! use fintrack_cli::services::AccountService;
//! use fintrack_cli::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let account = AccountService::new(&storage)
//!     .create("Main", Money::zero())
//!     .unwrap();
//! assert_eq!(account.name(), "Main");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinTrackError, FinTrackResult};

//! Service layer for FinTrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, reference checks, and cross-entity calculations.

pub mod account;
pub mod analytics;
pub mod category;
pub mod operation;

pub use account::{AccountService, BalanceRecalc};
pub use analytics::AnalyticsService;
pub use category::CategoryService;
pub use operation::OperationService;

//! Core data models for FinTrack
//!
//! This module contains the domain entities (bank accounts, categories,
//! operations), their identifiers, the money type, and the factory that
//! builds validated entities.

pub mod account;
pub mod category;
pub mod factory;
pub mod flow;
pub mod ids;
pub mod money;
pub mod operation;

pub use account::BankAccount;
pub use category::Category;
pub use factory::DomainFactory;
pub use flow::MoneyFlowType;
pub use ids::{AccountId, CategoryId, OperationId};
pub use money::{Money, MoneyParseError};
pub use operation::Operation;

//! Category model
//!
//! Categories classify operations as income or expense. The flow type is
//! fixed at creation; only the name can change.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::flow::MoneyFlowType;
use super::ids::CategoryId;
use crate::error::{FinTrackError, FinTrackResult};

/// An income or expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Income or expense
    #[serde(rename = "type")]
    flow_type: MoneyFlowType,

    /// Category name
    name: String,
}

impl Category {
    /// Create a category with an existing ID
    pub fn new(id: CategoryId, flow_type: MoneyFlowType, name: &str) -> FinTrackResult<Self> {
        Ok(Self {
            id,
            flow_type,
            name: validate_name(name)?,
        })
    }

    pub fn flow_type(&self) -> MoneyFlowType {
        self.flow_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the category
    pub fn rename(&mut self, new_name: &str) -> FinTrackResult<()> {
        self.name = validate_name(new_name)?;
        Ok(())
    }
}

fn validate_name(name: &str) -> FinTrackResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FinTrackError::Validation(
            "Category name cannot be empty".into(),
        ));
    }
    Ok(name.to_string())
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.flow_type)
    }
}

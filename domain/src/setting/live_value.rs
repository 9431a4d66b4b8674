//! Values read from the remote system's settings blob.

use serde::{Deserialize, Serialize};

/// One `name -> value` pair from the live settings blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveValue {
    pub name: String,
    pub current_value: String,
}

impl LiveValue {
    pub fn new(name: impl Into<String>, current_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_value: current_value.into(),
        }
    }
}

/// Live settings of one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSettings {
    pub organization_id: String,
    pub values: Vec<LiveValue>,
}

impl LiveSettings {
    pub fn new(organization_id: impl Into<String>, values: Vec<LiveValue>) -> Self {
        Self {
            organization_id: organization_id.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

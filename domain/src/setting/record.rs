//! Setting records and the per-record edit state machine.
//!
//! A [`SettingRecord`] joins a descriptor with the value last read from the
//! remote system and an optional edit overlay. The staged value lives inside
//! the [`EditState`] variants, so a clean record cannot carry one.
//!
//! # State Transitions
//!
//! ```text
//! Clean ──begin_edit──> Editing ──set_staged_value──> Dirty ──mark_committed──> Clean
//!                          │                           │  ^
//!                          └──revert──> Clean          │  └── set_staged_value
//!                                                      └──revert──> Clean
//! ```

use crate::core::error::DomainError;
use crate::core::name::setting_key;
use crate::setting::descriptor::{SettingDescriptor, ValueType};
use crate::setting::value_policy::{coerce, toggle_boolean};
use serde::{Deserialize, Serialize};

/// Edit overlay of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditState {
    /// No edit in progress.
    #[default]
    Clean,
    /// Edit opened; staged value is still the current value.
    Editing { staged_value: String },
    /// Operator changed the staged value; awaits commit.
    Dirty { staged_value: String },
}

impl EditState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditState::Clean => "clean",
            EditState::Editing { .. } => "editing",
            EditState::Dirty { .. } => "dirty",
        }
    }

    pub fn staged_value(&self) -> Option<&str> {
        match self {
            EditState::Clean => None,
            EditState::Editing { staged_value } | EditState::Dirty { staged_value } => {
                Some(staged_value)
            }
        }
    }
}

/// Canonical entity: descriptor + live value + edit overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRecord {
    pub descriptor: SettingDescriptor,
    /// Last value confirmed read from the remote system, `""` if never observed.
    pub current_value: String,
    pub edit: EditState,
}

impl SettingRecord {
    /// Create a clean record.
    pub fn new(descriptor: SettingDescriptor, current_value: impl Into<String>) -> Self {
        Self {
            descriptor,
            current_value: current_value.into(),
            edit: EditState::Clean,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn key(&self) -> String {
        setting_key(&self.descriptor.name)
    }

    pub fn value_type(&self) -> ValueType {
        self.descriptor.value_type
    }

    pub fn staged_value(&self) -> Option<&str> {
        self.edit.staged_value()
    }

    pub fn is_clean(&self) -> bool {
        matches!(self.edit, EditState::Clean)
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.edit, EditState::Dirty { .. })
    }

    /// Value that a commit would write: staged if present, else current.
    pub fn effective_value(&self) -> &str {
        self.staged_value().unwrap_or(&self.current_value)
    }

    /// Clean -> Editing, seeding the staged value with the current value.
    ///
    /// The seed passes through the input policy, so a live Number value
    /// outside the catalog bounds is staged clamped.
    pub fn begin_edit(&mut self) -> Result<(), DomainError> {
        match self.edit {
            EditState::Clean => {
                self.edit = EditState::Editing {
                    staged_value: coerce(
                        self.descriptor.value_type,
                        &self.descriptor.bounds,
                        &self.current_value,
                    ),
                };
                Ok(())
            }
            _ => Err(self.invalid("begin editing")),
        }
    }

    /// Editing/Dirty -> Dirty, storing `value` after the input policy.
    ///
    /// Storing a value equal to the current value still leaves the record
    /// dirty; only [`revert`](Self::revert) returns to Clean.
    pub fn set_staged_value(&mut self, value: &str) -> Result<&str, DomainError> {
        if self.is_clean() {
            return Err(self.invalid("set a value on"));
        }
        let staged_value = coerce(self.descriptor.value_type, &self.descriptor.bounds, value);
        self.edit = EditState::Dirty { staged_value };
        Ok(self.staged_value().unwrap_or_default())
    }

    /// Flip the staged Boolean literal. Same preconditions as
    /// [`set_staged_value`](Self::set_staged_value).
    pub fn toggle(&mut self) -> Result<&str, DomainError> {
        if self.descriptor.value_type != ValueType::Boolean {
            return Err(DomainError::TypeMismatch {
                name: self.descriptor.name.clone(),
                expected: ValueType::Boolean.as_str(),
                actual: self.descriptor.value_type.as_str(),
            });
        }
        let flipped = match self.staged_value() {
            Some(staged) => toggle_boolean(staged),
            None => return Err(self.invalid("toggle")),
        };
        self.set_staged_value(flipped)
    }

    /// Editing/Dirty -> Clean, discarding the staged value.
    pub fn revert(&mut self) -> Result<(), DomainError> {
        if self.is_clean() {
            return Err(self.invalid("revert"));
        }
        self.edit = EditState::Clean;
        Ok(())
    }

    /// Dirty -> Clean after a successful write; the staged value becomes
    /// the current value.
    ///
    /// No-op (returns `false`) if the record is not dirty.
    pub fn mark_committed(&mut self) -> bool {
        match std::mem::take(&mut self.edit) {
            EditState::Dirty { staged_value } => {
                self.current_value = staged_value;
                true
            }
            other => {
                self.edit = other;
                false
            }
        }
    }

    fn invalid(&self, operation: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            name: self.descriptor.name.clone(),
            state: self.edit.as_str(),
            operation,
        }
    }
}

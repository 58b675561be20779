use crate::domain::common::{lenient, DraftError};
use crate::enums::table_feature::TableFeature;
use crate::enums::table_location::TableLocation;
use crate::enums::table_shape::TableShape;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Aggregate
// ============================================================================

/// Restaurant table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(alias = "_id")]
    pub id: String,
    /// External identifier, fixed once the table exists
    pub table_number: String,
    pub capacity: u32,
    #[serde(default)]
    pub location: TableLocation,
    #[serde(default)]
    pub shape: TableShape,
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub features: Vec<TableFeature>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Table {
    pub fn display_name(&self) -> Option<String> {
        let number = self.table_number.trim();
        (!number.is_empty()).then(|| format!("Table {number}"))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Field names a table form may update. Features are toggled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableField {
    TableNumber,
    Capacity,
    Location,
    Shape,
    IsActive,
    Notes,
}

impl TableField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableField::TableNumber => "tableNumber",
            TableField::Capacity => "capacity",
            TableField::Location => "location",
            TableField::Shape => "shape",
            TableField::IsActive => "isActive",
            TableField::Notes => "notes",
        }
    }

    pub fn all() -> Vec<TableField> {
        vec![
            TableField::TableNumber,
            TableField::Capacity,
            TableField::Location,
            TableField::Shape,
            TableField::IsActive,
            TableField::Notes,
        ]
    }
}

impl FromStr for TableField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DraftError::UnknownField(s.to_string()))
    }
}

/// Create/update payload for a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDto {
    pub table_number: String,
    pub capacity: u32,
    pub location: TableLocation,
    pub shape: TableShape,
    pub features: Vec<TableFeature>,
    pub is_active: bool,
    pub notes: String,
}

impl Default for TableDto {
    fn default() -> Self {
        Self {
            table_number: String::new(),
            capacity: 2,
            location: TableLocation::default(),
            shape: TableShape::default(),
            features: Vec::new(),
            is_active: true,
            notes: String::new(),
        }
    }
}

impl From<&Table> for TableDto {
    fn from(t: &Table) -> Self {
        Self {
            table_number: t.table_number.clone(),
            capacity: t.capacity,
            location: t.location,
            shape: t.shape,
            features: t.features.clone(),
            is_active: t.is_active,
            notes: t.notes.clone().unwrap_or_default(),
        }
    }
}

impl TableDto {
    /// Returns a copy of the draft with one field replaced by the raw input value
    pub fn with_field(&self, field: TableField, value: &str) -> Result<Self, DraftError> {
        let invalid = || DraftError::invalid(field.as_str(), value);
        let mut next = self.clone();
        match field {
            TableField::TableNumber => next.table_number = value.to_string(),
            TableField::Capacity => {
                let trimmed = value.trim();
                next.capacity = if trimmed.is_empty() {
                    0
                } else {
                    trimmed.parse().map_err(|_| invalid())?
                };
            }
            TableField::Location => {
                next.location = TableLocation::from_code(value).ok_or_else(invalid)?;
            }
            TableField::Shape => next.shape = TableShape::from_code(value).ok_or_else(invalid)?,
            TableField::IsActive => {
                next.is_active = match value {
                    "true" | "on" => true,
                    "false" | "off" => false,
                    _ => return Err(invalid()),
                };
            }
            TableField::Notes => next.notes = value.to_string(),
        }
        Ok(next)
    }

    pub fn with_named_field(&self, name: &str, value: &str) -> Result<Self, DraftError> {
        self.with_field(name.parse()?, value)
    }

    pub fn has_feature(&self, feature: TableFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Adds the tag when absent, removes it when present
    pub fn toggle_feature(&self, feature: TableFeature) -> Self {
        let mut next = self.clone();
        if next.has_feature(feature) {
            next.features.retain(|f| *f != feature);
        } else {
            next.features.push(feature);
        }
        next
    }

    pub fn missing_required(&self) -> Vec<TableField> {
        let mut missing = Vec::new();
        if self.table_number.trim().is_empty() {
            missing.push(TableField::TableNumber);
        }
        if self.capacity == 0 {
            missing.push(TableField::Capacity);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

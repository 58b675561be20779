use serde::{Deserialize, Serialize};
use std::fmt;

/// Dining area a table stands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLocation {
    #[default]
    Indoor,
    Outdoor,
    Patio,
    Vip,
    BarArea,
}

impl TableLocation {
    pub fn code(&self) -> &'static str {
        match self {
            TableLocation::Indoor => "indoor",
            TableLocation::Outdoor => "outdoor",
            TableLocation::Patio => "patio",
            TableLocation::Vip => "vip",
            TableLocation::BarArea => "bar_area",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TableLocation::Indoor => "Indoor",
            TableLocation::Outdoor => "Outdoor",
            TableLocation::Patio => "Patio",
            TableLocation::Vip => "VIP",
            TableLocation::BarArea => "Bar area",
        }
    }

    pub fn all() -> Vec<TableLocation> {
        vec![
            TableLocation::Indoor,
            TableLocation::Outdoor,
            TableLocation::Patio,
            TableLocation::Vip,
            TableLocation::BarArea,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "indoor" => Some(TableLocation::Indoor),
            "outdoor" => Some(TableLocation::Outdoor),
            "patio" => Some(TableLocation::Patio),
            "vip" => Some(TableLocation::Vip),
            "bar_area" => Some(TableLocation::BarArea),
            _ => None,
        }
    }
}

impl fmt::Display for TableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

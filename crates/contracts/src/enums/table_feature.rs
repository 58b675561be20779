use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed vocabulary of table feature tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFeature {
    WindowView,
    WheelchairAccessible,
    PowerOutlet,
    NearKitchen,
    PrivateArea,
    SmokingAllowed,
}

impl TableFeature {
    pub fn code(&self) -> &'static str {
        match self {
            TableFeature::WindowView => "window_view",
            TableFeature::WheelchairAccessible => "wheelchair_accessible",
            TableFeature::PowerOutlet => "power_outlet",
            TableFeature::NearKitchen => "near_kitchen",
            TableFeature::PrivateArea => "private_area",
            TableFeature::SmokingAllowed => "smoking_allowed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TableFeature::WindowView => "Window view",
            TableFeature::WheelchairAccessible => "Wheelchair accessible",
            TableFeature::PowerOutlet => "Power outlet",
            TableFeature::NearKitchen => "Near kitchen",
            TableFeature::PrivateArea => "Private area",
            TableFeature::SmokingAllowed => "Smoking allowed",
        }
    }

    pub fn all() -> Vec<TableFeature> {
        vec![
            TableFeature::WindowView,
            TableFeature::WheelchairAccessible,
            TableFeature::PowerOutlet,
            TableFeature::NearKitchen,
            TableFeature::PrivateArea,
            TableFeature::SmokingAllowed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.code() == code)
    }
}

impl fmt::Display for TableFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

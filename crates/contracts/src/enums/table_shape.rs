use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    Round,
    #[default]
    Square,
    Rectangle,
    Oval,
    SemiCircle,
}

impl TableShape {
    pub fn code(&self) -> &'static str {
        match self {
            TableShape::Round => "round",
            TableShape::Square => "square",
            TableShape::Rectangle => "rectangle",
            TableShape::Oval => "oval",
            TableShape::SemiCircle => "semi_circle",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TableShape::Round => "Round",
            TableShape::Square => "Square",
            TableShape::Rectangle => "Rectangle",
            TableShape::Oval => "Oval",
            TableShape::SemiCircle => "Semi-circle",
        }
    }

    pub fn all() -> Vec<TableShape> {
        vec![
            TableShape::Round,
            TableShape::Square,
            TableShape::Rectangle,
            TableShape::Oval,
            TableShape::SemiCircle,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "round" => Some(TableShape::Round),
            "square" => Some(TableShape::Square),
            "rectangle" => Some(TableShape::Rectangle),
            "oval" => Some(TableShape::Oval),
            "semi_circle" => Some(TableShape::SemiCircle),
            _ => None,
        }
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

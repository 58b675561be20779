use serde::{Deserialize, Serialize};
use std::fmt;

/// Room booking status.
///
/// The set is closed, but no transition rules apply on the client:
/// any status may be replaced by any other through the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    CheckedIn,
    CheckedOut,
    NoShow,
}

impl BookingStatus {
    /// Wire code, as sent by the backend
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::NoShow => "no_show",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
            BookingStatus::CheckedIn => "Checked in",
            BookingStatus::CheckedOut => "Checked out",
            BookingStatus::NoShow => "No show",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed | BookingStatus::CheckedIn => "badge badge--success",
            BookingStatus::Pending => "badge badge--warning",
            BookingStatus::Cancelled | BookingStatus::NoShow => "badge badge--error",
            BookingStatus::Completed | BookingStatus::CheckedOut => "badge badge--neutral",
        }
    }

    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::NoShow,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "completed" => Some(BookingStatus::Completed),
            "checked_in" => Some(BookingStatus::CheckedIn),
            "checked_out" => Some(BookingStatus::CheckedOut),
            "no_show" => Some(BookingStatus::NoShow),
            _ => None,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

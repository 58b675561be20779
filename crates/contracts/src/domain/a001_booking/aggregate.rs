use crate::domain::common::{iso_date, lenient, DraftError};
use crate::enums::booking_status::BookingStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Room reference
// ============================================================================

/// Room as embedded by the backend when the reference is populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub room_type: Option<String>,
}

/// A booking points at its room either by id or by an embedded room object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomRef {
    Id(String),
    Room(RoomSummary),
}

impl RoomRef {
    pub fn id(&self) -> &str {
        match self {
            RoomRef::Id(id) => id,
            RoomRef::Room(room) => &room.id,
        }
    }

    /// Human readable label for list cells
    pub fn label(&self) -> String {
        match self {
            RoomRef::Id(id) => id.clone(),
            RoomRef::Room(room) if room.room_number.is_empty() => room.id.clone(),
            RoomRef::Room(room) => match &room.room_type {
                Some(kind) if !kind.is_empty() => format!("Room {} ({})", room.room_number, kind),
                _ => format!("Room {}", room.room_number),
            },
        }
    }

    /// Every text a search term may hit
    pub fn search_terms(&self) -> Vec<&str> {
        match self {
            RoomRef::Id(id) => vec![id.as_str()],
            RoomRef::Room(room) => {
                let mut terms = vec![room.id.as_str(), room.room_number.as_str()];
                if let Some(kind) = &room.room_type {
                    terms.push(kind.as_str());
                }
                terms
            }
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Room booking as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: String,
    /// `None` when the backend sends no room or one that cannot be read
    #[serde(default, alias = "roomId", deserialize_with = "lenient::option")]
    pub room: Option<RoomRef>,
    #[serde(deserialize_with = "iso_date::deserialize")]
    pub check_in_date: NaiveDate,
    #[serde(deserialize_with = "iso_date::deserialize")]
    pub check_out_date: NaiveDate,
    #[serde(default = "default_guests")]
    pub number_of_guests: u32,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_guests() -> u32 {
    1
}

impl Booking {
    /// Name shown in confirmation dialogs; `None` when the guest name is blank
    pub fn display_name(&self) -> Option<String> {
        let name = self.guest_name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    pub fn room_label(&self) -> String {
        self.room.as_ref().map(RoomRef::label).unwrap_or_else(|| "-".to_string())
    }

    /// Nights between check-in and check-out (0 for inverted ranges)
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days().max(0)
    }
}

// ============================================================================
// Aggregate stats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub confirmed: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub cancelled: u64,
    #[serde(default)]
    pub checked_in: u64,
    #[serde(default)]
    pub checked_out: u64,
}

/// Query for `GET /api/bookings/date-range`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Field names a booking form may update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    GuestName,
    GuestEmail,
    GuestPhone,
    Room,
    CheckInDate,
    CheckOutDate,
    NumberOfGuests,
    SpecialRequests,
    Status,
    TotalPrice,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::GuestName => "guestName",
            BookingField::GuestEmail => "guestEmail",
            BookingField::GuestPhone => "guestPhone",
            BookingField::Room => "room",
            BookingField::CheckInDate => "checkInDate",
            BookingField::CheckOutDate => "checkOutDate",
            BookingField::NumberOfGuests => "numberOfGuests",
            BookingField::SpecialRequests => "specialRequests",
            BookingField::Status => "status",
            BookingField::TotalPrice => "totalPrice",
        }
    }

    pub fn all() -> Vec<BookingField> {
        vec![
            BookingField::GuestName,
            BookingField::GuestEmail,
            BookingField::GuestPhone,
            BookingField::Room,
            BookingField::CheckInDate,
            BookingField::CheckOutDate,
            BookingField::NumberOfGuests,
            BookingField::SpecialRequests,
            BookingField::Status,
            BookingField::TotalPrice,
        ]
    }
}

impl FromStr for BookingField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DraftError::UnknownField(s.to_string()))
    }
}

/// Create/update payload for a booking (the form draft)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    /// Room id
    pub room: String,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub number_of_guests: u32,
    pub special_requests: String,
    pub status: BookingStatus,
    pub total_price: f64,
}

impl Default for BookingDto {
    fn default() -> Self {
        Self {
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            room: String::new(),
            check_in_date: None,
            check_out_date: None,
            number_of_guests: default_guests(),
            special_requests: String::new(),
            status: BookingStatus::default(),
            total_price: 0.0,
        }
    }
}

impl From<&Booking> for BookingDto {
    fn from(b: &Booking) -> Self {
        Self {
            guest_name: b.guest_name.clone(),
            guest_email: b.guest_email.clone(),
            guest_phone: b.guest_phone.clone(),
            room: b.room.as_ref().map(|r| r.id().to_string()).unwrap_or_default(),
            check_in_date: Some(b.check_in_date),
            check_out_date: Some(b.check_out_date),
            number_of_guests: b.number_of_guests,
            special_requests: b.special_requests.clone().unwrap_or_default(),
            status: b.status,
            total_price: b.total_price,
        }
    }
}

impl BookingDto {
    /// Returns a copy of the draft with one field replaced by the raw input value
    pub fn with_field(&self, field: BookingField, value: &str) -> Result<Self, DraftError> {
        let mut next = self.clone();
        match field {
            BookingField::GuestName => next.guest_name = value.to_string(),
            BookingField::GuestEmail => next.guest_email = value.to_string(),
            BookingField::GuestPhone => next.guest_phone = value.to_string(),
            BookingField::Room => next.room = value.to_string(),
            BookingField::CheckInDate => next.check_in_date = parse_optional_date(field, value)?,
            BookingField::CheckOutDate => next.check_out_date = parse_optional_date(field, value)?,
            BookingField::NumberOfGuests => {
                next.number_of_guests = parse_or_zero(value)
                    .ok_or_else(|| DraftError::invalid(field.as_str(), value))?;
            }
            BookingField::SpecialRequests => next.special_requests = value.to_string(),
            BookingField::Status => {
                next.status = BookingStatus::from_code(value)
                    .ok_or_else(|| DraftError::invalid(field.as_str(), value))?;
            }
            BookingField::TotalPrice => {
                next.total_price = parse_or_zero(value)
                    .ok_or_else(|| DraftError::invalid(field.as_str(), value))?;
            }
        }
        Ok(next)
    }

    /// Same as [`BookingDto::with_field`], addressing the field by its wire name
    pub fn with_named_field(&self, name: &str, value: &str) -> Result<Self, DraftError> {
        self.with_field(name.parse()?, value)
    }

    /// Required fields that are still blank
    pub fn missing_required(&self) -> Vec<BookingField> {
        let mut missing = Vec::new();
        if self.guest_name.trim().is_empty() {
            missing.push(BookingField::GuestName);
        }
        if self.guest_email.trim().is_empty() {
            missing.push(BookingField::GuestEmail);
        }
        if self.room.trim().is_empty() {
            missing.push(BookingField::Room);
        }
        if self.check_in_date.is_none() {
            missing.push(BookingField::CheckInDate);
        }
        if self.check_out_date.is_none() {
            missing.push(BookingField::CheckOutDate);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

fn parse_optional_date(field: BookingField, value: &str) -> Result<Option<NaiveDate>, DraftError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    iso_date::parse(value)
        .map(Some)
        .ok_or_else(|| DraftError::invalid(field.as_str(), value))
}

/// Empty numeric inputs count as zero; the HTML constraints catch them on submit
fn parse_or_zero<T: FromStr + Default>(value: &str) -> Option<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(T::default());
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_with_embedded_room() {
        let raw = json!({
            "_id": "b-1",
            "guestName": "Jane Doe",
            "guestEmail": "jane@example.com",
            "guestPhone": "+1 555 0100",
            "room": { "_id": "r-7", "roomNumber": "101", "roomType": "suite" },
            "checkInDate": "2024-03-15T00:00:00.000Z",
            "checkOutDate": "2024-03-18",
            "numberOfGuests": 2,
            "status": "checked_in",
            "totalPrice": 450.5,
            "createdAt": "2024-03-01T10:00:00Z"
        });
        let booking: Booking = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.id, "b-1");
        assert_eq!(booking.room.as_ref().map(RoomRef::id), Some("r-7"));
        assert_eq!(booking.room_label(), "Room 101 (suite)");
        assert_eq!(booking.check_in_date, date(2024, 3, 15));
        assert_eq!(booking.nights(), 3);
        assert_eq!(booking.status, BookingStatus::CheckedIn);
        assert!(booking.created_at.is_some());
        assert!(booking.updated_at.is_none());
    }

    #[test]
    fn test_deserialize_with_room_id_and_defaults() {
        let raw = json!({
            "id": "b-2",
            "guestName": "John",
            "roomId": "r-1",
            "checkInDate": "2024-05-01",
            "checkOutDate": "2024-05-02"
        });
        let booking: Booking = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.room, Some(RoomRef::Id("r-1".into())));
        assert_eq!(booking.number_of_guests, 1);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.special_requests, None);
    }

    #[test]
    fn test_missing_or_broken_room_keeps_the_booking() {
        for room in [json!(null), json!({ "roomNumber": "101" }), json!(42)] {
            let raw = json!({
                "_id": "b-3",
                "guestName": "Ann",
                "room": room,
                "checkInDate": "2024-05-01",
                "checkOutDate": "2024-05-03"
            });
            let booking: Booking = serde_json::from_value(raw).unwrap();
            assert_eq!(booking.room, None);
            assert_eq!(booking.room_label(), "-");
            assert_eq!(BookingDto::from(&booking).room, "");
        }
    }

    #[test]
    fn test_stats_deserialize() {
        let raw = json!({
            "totalBookings": 10, "confirmed": 4, "pending": 3,
            "cancelled": 1, "checkedIn": 1, "checkedOut": 1
        });
        let stats: BookingStats = serde_json::from_value(raw).unwrap();
        assert_eq!(stats.total_bookings, 10);
        assert_eq!(stats.checked_in, 1);

        let partial: BookingStats = serde_json::from_value(json!({ "pending": 2 })).unwrap();
        assert_eq!(partial.pending, 2);
        assert_eq!(partial.total_bookings, 0);
    }

    #[test]
    fn test_with_field_returns_new_draft() {
        let draft = BookingDto::default();
        let next = draft.with_field(BookingField::GuestName, "Jane Doe").unwrap();
        assert_eq!(next.guest_name, "Jane Doe");
        assert_eq!(draft.guest_name, "");

        let next = next.with_named_field("checkInDate", "2024-03-15").unwrap();
        assert_eq!(next.check_in_date, Some(date(2024, 3, 15)));
        let next = next.with_named_field("checkInDate", "").unwrap();
        assert_eq!(next.check_in_date, None);
        let next = next.with_named_field("status", "no_show").unwrap();
        assert_eq!(next.status, BookingStatus::NoShow);
    }

    #[test]
    fn test_with_field_rejects_unknown_or_malformed() {
        let draft = BookingDto::default();
        assert_eq!(
            draft.with_named_field("isVip", "yes"),
            Err(DraftError::UnknownField("isVip".into()))
        );
        assert!(matches!(
            draft.with_field(BookingField::NumberOfGuests, "two"),
            Err(DraftError::InvalidValue { field: "numberOfGuests", .. })
        ));
        assert!(draft.with_field(BookingField::Status, "archived").is_err());
        assert!(draft.with_field(BookingField::CheckOutDate, "tomorrow").is_err());
        assert_eq!(
            draft.with_field(BookingField::TotalPrice, "").unwrap().total_price,
            0.0
        );
    }

    #[test]
    fn test_any_status_may_follow_any_other() {
        let mut draft = BookingDto::default();
        for from in BookingStatus::all() {
            draft = draft.with_field(BookingField::Status, from.code()).unwrap();
            for to in BookingStatus::all() {
                let next = draft.with_field(BookingField::Status, to.code()).unwrap();
                assert_eq!(next.status, to);
            }
        }
    }

    #[test]
    fn test_required_fields() {
        let draft = BookingDto::default();
        assert_eq!(draft.missing_required().len(), 5);
        assert!(!draft.is_complete());

        let complete = BookingDto {
            guest_name: "Jane".into(),
            guest_email: "jane@example.com".into(),
            room: "r-1".into(),
            check_in_date: Some(date(2024, 1, 1)),
            check_out_date: Some(date(2024, 1, 2)),
            ..BookingDto::default()
        };
        assert!(complete.is_complete());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = BookingDto {
            room: "r-1".into(),
            check_in_date: Some(date(2024, 1, 1)),
            ..BookingDto::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["room"], "r-1");
        assert_eq!(value["checkInDate"], "2024-01-01");
        assert_eq!(value["numberOfGuests"], 1);
        assert_eq!(value["status"], "pending");
    }
}

use crate::shared::list_utils::Searchable;
use crate::shared::resource_page::Resource;
use contracts::domain::a001_booking::aggregate::{Booking, BookingDto};

impl Searchable for Booking {
    /// Guest name/email/phone, status and room reference
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.guest_name.clone(),
            self.guest_email.clone(),
            self.guest_phone.clone(),
            self.status.code().to_string(),
            self.status.display_name().to_string(),
        ];
        if let Some(room) = &self.room {
            fields.extend(room.search_terms().into_iter().map(str::to_string));
        }
        fields
    }
}

impl Resource for Booking {
    type Draft = BookingDto;

    const LOAD_ERROR: &'static str = "Failed to load bookings. Please try again.";
    const SAVE_ERROR: &'static str = "Failed to save booking. Please try again.";
    const DELETE_ERROR: &'static str = "Failed to delete booking. Please try again.";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> Option<String> {
        Booking::display_name(self)
    }

    fn to_draft(&self) -> BookingDto {
        BookingDto::from(self)
    }
}

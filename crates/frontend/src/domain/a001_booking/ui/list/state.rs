use crate::domain::a001_booking::api::BookingsApi;
use crate::shared::api_client::ApiError;
use crate::shared::resource_page::{self, begin_load, finish_load, PageState, ResourceState};
use crate::shared::state_cell::StateCell;
use contracts::domain::a001_booking::aggregate::{Booking, BookingDto, BookingStats};
use contracts::domain::common::iso_date;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingsPageState {
    pub list: ResourceState<Booking>,
    /// `None` until the first successful stats fetch
    pub stats: Option<BookingStats>,
    /// Raw `<input type="date">` values
    pub date_from: String,
    pub date_to: String,
}

impl PageState<Booking> for BookingsPageState {
    fn resource(&self) -> &ResourceState<Booking> {
        &self.list
    }

    fn resource_mut(&mut self) -> &mut ResourceState<Booking> {
        &mut self.list
    }
}

pub fn create_state() -> RwSignal<BookingsPageState> {
    RwSignal::new(BookingsPageState::default())
}

/// Initial load: list and stats, independently
pub async fn load<A, C>(api: &A, cell: &C)
where
    A: BookingsApi + ?Sized,
    C: StateCell<BookingsPageState>,
{
    resource_page::refresh::<A, BookingsPageState, C>(api, cell).await;
    refresh_stats(api, cell).await;
}

/// Best-effort: a failure is logged and never reaches the page banner
pub async fn refresh_stats<A, C>(api: &A, cell: &C)
where
    A: BookingsApi + ?Sized,
    C: StateCell<BookingsPageState>,
{
    match api.fetch_stats().await {
        Ok(stats) => cell.update_state(|s| s.stats = Some(stats)),
        Err(e) => log::warn!("booking stats unavailable: {e}"),
    }
}

/// Range-scoped list when both bounds are set, full list otherwise
pub async fn apply_date_range<A, C>(api: &A, cell: &C)
where
    A: BookingsApi + ?Sized,
    C: StateCell<BookingsPageState>,
{
    let bounds = cell.with_state(|s| {
        (iso_date::parse(&s.date_from), iso_date::parse(&s.date_to))
    });
    match bounds {
        (Some(start), Some(end)) => {
            begin_load::<Booking, BookingsPageState, C>(cell);
            let result = api.fetch_by_date_range(start, end).await;
            finish_load::<Booking, BookingsPageState, C>(cell, result);
        }
        _ => resource_page::refresh::<A, BookingsPageState, C>(api, cell).await,
    }
}

pub async fn clear_date_range<A, C>(api: &A, cell: &C)
where
    A: BookingsApi + ?Sized,
    C: StateCell<BookingsPageState>,
{
    cell.update_state(|s| {
        s.date_from.clear();
        s.date_to.clear();
    });
    resource_page::refresh::<A, BookingsPageState, C>(api, cell).await;
}

/// Create or update, then refresh the stats as well
pub async fn save_booking<A, C>(
    api: &A,
    cell: &C,
    draft: BookingDto,
    id: Option<String>,
) -> Result<(), ApiError>
where
    A: BookingsApi + ?Sized,
    C: StateCell<BookingsPageState>,
{
    resource_page::save::<A, BookingsPageState, C>(api, cell, draft, id).await?;
    refresh_stats(api, cell).await;
    Ok(())
}

pub async fn delete_booking<A, C>(api: &A, cell: &C) -> Result<(), ApiError>
where
    A: BookingsApi + ?Sized,
    C: StateCell<BookingsPageState>,
{
    resource_page::confirm_delete::<A, BookingsPageState, C>(api, cell).await?;
    refresh_stats(api, cell).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::confirmation_modal::confirmation_message;
    use crate::shared::resource_page::fake::FakeApi;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use contracts::domain::a001_booking::aggregate::RoomRef;
    use contracts::enums::booking_status::BookingStatus;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[async_trait(?Send)]
    impl BookingsApi for FakeApi<Booking> {
        async fn fetch_by_date_range(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<Booking>, ApiError> {
            self.record(format!("range:{start}..{end}"));
            if self.fail_list.get() {
                return Err(ApiError::Status(500));
            }
            Ok(self.range_items.borrow().clone())
        }

        async fn fetch_stats(&self) -> Result<BookingStats, ApiError> {
            self.record("stats");
            if self.fail_stats.get() {
                return Err(ApiError::Network("timeout".into()));
            }
            let items = self.items.borrow();
            let count = |status: BookingStatus| items.iter().filter(|b| b.status == status).count() as u64;
            Ok(BookingStats {
                total_bookings: items.len() as u64,
                confirmed: count(BookingStatus::Confirmed),
                pending: count(BookingStatus::Pending),
                cancelled: count(BookingStatus::Cancelled),
                checked_in: count(BookingStatus::CheckedIn),
                checked_out: count(BookingStatus::CheckedOut),
            })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(id: &str, guest: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.into(),
            guest_name: guest.into(),
            guest_email: format!("{}@example.com", guest.to_lowercase().replace(' ', ".")),
            guest_phone: "+1 555 0100".into(),
            room: Some(RoomRef::Id("r-101".into())),
            check_in_date: date(2024, 3, 15),
            check_out_date: date(2024, 3, 18),
            number_of_guests: 2,
            special_requests: None,
            status,
            total_price: 300.0,
            created_at: None,
            updated_at: None,
        }
    }

    fn materialize(id: &str, draft: &BookingDto) -> Booking {
        Booking {
            id: id.into(),
            guest_name: draft.guest_name.clone(),
            guest_email: draft.guest_email.clone(),
            guest_phone: draft.guest_phone.clone(),
            room: Some(RoomRef::Id(draft.room.clone())),
            check_in_date: draft.check_in_date.unwrap_or(date(2024, 1, 1)),
            check_out_date: draft.check_out_date.unwrap_or(date(2024, 1, 2)),
            number_of_guests: draft.number_of_guests,
            special_requests: Some(draft.special_requests.clone()),
            status: draft.status,
            total_price: draft.total_price,
            created_at: None,
            updated_at: None,
        }
    }

    fn fixture() -> (FakeApi<Booking>, RefCell<BookingsPageState>) {
        let api = FakeApi::new(
            vec![
                booking("b-1", "Jane Doe", BookingStatus::Pending),
                booking("b-2", "John Smith", BookingStatus::Confirmed),
                booking("b-3", "Ann Lee", BookingStatus::CheckedIn),
            ],
            materialize,
        );
        (api, RefCell::new(BookingsPageState::default()))
    }

    #[test]
    fn test_load_fetches_list_and_stats() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));

        assert_eq!(api.calls(), vec!["list", "stats"]);
        let state = cell.borrow();
        assert_eq!(state.list.items.len(), 3);
        let stats = state.stats.unwrap();
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.checked_in, 1);
    }

    #[test]
    fn test_stats_failure_is_not_a_page_error() {
        let (api, cell) = fixture();
        api.fail_stats.set(true);
        block_on(load(&api, &cell));

        let state = cell.borrow();
        assert_eq!(state.list.error, None);
        assert_eq!(state.stats, None);
        assert_eq!(state.list.items.len(), 3);
    }

    #[test]
    fn test_search_by_status_prefix() {
        let api = FakeApi::new(
            vec![booking("b-1", "Jane Doe", BookingStatus::Pending)],
            materialize,
        );
        let cell = RefCell::new(BookingsPageState::default());
        block_on(load(&api, &cell));

        cell.borrow_mut().list.set_search("pend");
        let visible = cell.borrow().list.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "b-1");

        cell.borrow_mut().list.set_search("zzz");
        assert!(cell.borrow().list.visible_items().is_empty());
    }

    #[test]
    fn test_search_matches_guest_fields_and_room() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        let mut state = cell.borrow_mut();

        for (term, expected) in [
            ("JANE", vec!["b-1"]),
            ("john.smith@", vec!["b-2"]),
            ("555", vec!["b-1", "b-2", "b-3"]),
            ("r-101", vec!["b-1", "b-2", "b-3"]),
            ("checked", vec!["b-3"]),
        ] {
            state.list.set_search(term);
            let ids: Vec<String> = state.list.visible_items().into_iter().map(|b| b.id).collect();
            assert_eq!(ids, expected, "term {term:?}");
        }
    }

    #[test]
    fn test_booking_without_room_stays_listed() {
        let roomless = Booking {
            room: None,
            ..booking("b-9", "Mia Roomless", BookingStatus::Pending)
        };
        let api = FakeApi::new(
            vec![booking("b-1", "Jane Doe", BookingStatus::Pending), roomless],
            materialize,
        );
        let cell = RefCell::new(BookingsPageState::default());
        block_on(load(&api, &cell));

        let mut state = cell.borrow_mut();
        assert_eq!(state.list.items.len(), 2);
        state.list.set_search("r-101");
        let ids: Vec<String> = state.list.visible_items().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["b-1"]);
        state.list.set_search("mia");
        assert_eq!(state.list.visible_items()[0].room_label(), "-");
    }

    #[test]
    fn test_date_range_then_clear_restores_full_list() {
        let (api, cell) = fixture();
        *api.range_items.borrow_mut() = vec![booking("b-2", "John Smith", BookingStatus::Confirmed)];
        block_on(load(&api, &cell));
        let full = cell.borrow().list.items.clone();

        cell.borrow_mut().date_from = "2024-03-01".into();
        cell.borrow_mut().date_to = "2024-03-31".into();
        block_on(apply_date_range(&api, &cell));
        assert_eq!(cell.borrow().list.items.len(), 1);
        assert!(api.calls().contains(&"range:2024-03-01..2024-03-31".to_string()));

        block_on(clear_date_range(&api, &cell));
        let state = cell.borrow();
        assert_eq!(state.list.items, full);
        assert!(state.date_from.is_empty() && state.date_to.is_empty());
    }

    #[test]
    fn test_half_open_range_falls_back_to_full_list() {
        let (api, cell) = fixture();
        cell.borrow_mut().date_from = "2024-03-01".into();
        block_on(apply_date_range(&api, &cell));

        assert_eq!(api.calls(), vec!["list"]);
        assert_eq!(cell.borrow().list.items.len(), 3);
    }

    #[test]
    fn test_delete_confirmation_for_named_guest() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        let jane = cell.borrow().list.items[0].clone();

        cell.borrow_mut().list.open_delete(jane.clone());
        let name = cell
            .borrow()
            .list
            .pending_delete
            .as_ref()
            .and_then(|b| b.display_name());
        let message = confirmation_message(name.as_deref());
        assert!(message.contains("Jane Doe"));

        block_on(delete_booking(&api, &cell)).unwrap();

        assert_eq!(api.count("delete:b-1"), 1);
        let state = cell.borrow();
        assert!(!state.list.is_delete_open());
        assert!(state.list.items.iter().all(|b| b.id != "b-1"));
        assert_eq!(state.stats.unwrap().total_bookings, 2);
    }

    #[test]
    fn test_failed_update_preserves_draft() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        api.fail_save.set(true);
        let target = cell.borrow().list.items[1].clone();
        cell.borrow_mut().list.editor.open_edit(target);

        let draft = BookingDto::from(&cell.borrow().list.items[1])
            .with_named_field("specialRequests", "late arrival")
            .unwrap();
        let result = block_on(save_booking(&api, &cell, draft.clone(), Some("b-2".into())));

        assert!(result.is_err());
        let state = cell.borrow();
        assert!(state.list.editor.open);
        assert_eq!(state.list.editor.draft, draft);
        assert_eq!(
            state.list.error.as_deref(),
            Some("Failed to save booking. Please try again.")
        );
        assert_eq!(api.count("stats"), 1);
    }

    #[test]
    fn test_create_refreshes_list_and_stats() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        cell.borrow_mut().list.editor.open_create();

        let draft = BookingDto::default()
            .with_named_field("guestName", "New Guest")
            .and_then(|d| d.with_named_field("status", "confirmed"))
            .unwrap();
        block_on(save_booking(&api, &cell, draft, None)).unwrap();

        let state = cell.borrow();
        assert!(!state.list.editor.open);
        assert_eq!(state.list.items.len(), 4);
        assert_eq!(state.stats.unwrap().confirmed, 2);
        assert_eq!(api.count("stats"), 2);
    }
}

use crate::shared::date_utils::{date_input_value, format_datetime};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::resource_page::EditorState;
use contracts::domain::a001_booking::aggregate::{Booking, BookingDto, BookingField};
use contracts::enums::booking_status::BookingStatus;
use leptos::prelude::*;

fn modal_title(editor: &EditorState<Booking>) -> &'static str {
    match (&editor.target, editor.editing) {
        (None, _) => "New booking",
        (Some(_), true) => "Edit booking",
        (Some(_), false) => "Booking details",
    }
}

/// Create / edit / view dialog for a booking.
///
/// Works on its own copy of the draft: keystrokes never reach the page
/// until Save, and Cancel simply drops the copy. The copy is re-seeded from
/// the editor whenever the session key (mode, booking, open flag) changes.
#[component]
pub fn BookingModal(
    /// Editor session owned by the page
    #[prop(into)]
    editor: Signal<EditorState<Booking>>,
    /// Receives the draft and, in editing mode, the booking id
    on_save: Callback<(BookingDto, Option<String>)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(BookingDto::default());
    let session = Memo::new(move |_| editor.with(|e| e.sync_key()));
    let is_open = Memo::new(move |_| editor.with(|e| e.open));

    Effect::new(move |_| {
        session.track();
        draft.set(editor.with_untracked(|e| e.draft.clone()));
    });

    let view_only = move || editor.with(|e| e.is_view_only());

    let set_field = move |field: BookingField, value: String| {
        match draft.with_untracked(|d| d.with_field(field, &value)) {
            Ok(next) => draft.set(next),
            Err(e) => log::debug!("booking form: {e}"),
        }
    };

    let submit = move || {
        let current = draft.get_untracked();
        let id = editor.with_untracked(|e| e.submit_id());
        on_save.run((current, id));
    };

    move || {
        if !is_open.get() {
            return None;
        }
        let title = editor.with_untracked(modal_title).to_string();
        let meta = editor.with_untracked(|e| e.target.clone());

        Some(view! {
            <Modal title=title on_close=on_cancel modal_class="booking-modal">
                <form
                    class="details-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <div class="modal-body">
                        <div class="form__row">
                            <div class="form__group">
                                <label for="guest-name">"Guest name"</label>
                                <input
                                    type="text"
                                    id="guest-name"
                                    required
                                    prop:value=move || draft.with(|d| d.guest_name.clone())
                                    on:input=move |ev| set_field(BookingField::GuestName, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                            <div class="form__group">
                                <label for="guest-email">"Email"</label>
                                <input
                                    type="email"
                                    id="guest-email"
                                    required
                                    prop:value=move || draft.with(|d| d.guest_email.clone())
                                    on:input=move |ev| set_field(BookingField::GuestEmail, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                            <div class="form__group">
                                <label for="guest-phone">"Phone"</label>
                                <input
                                    type="tel"
                                    id="guest-phone"
                                    prop:value=move || draft.with(|d| d.guest_phone.clone())
                                    on:input=move |ev| set_field(BookingField::GuestPhone, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                        </div>

                        <div class="form__row">
                            <div class="form__group">
                                <label for="room">"Room"</label>
                                <input
                                    type="text"
                                    id="room"
                                    required
                                    placeholder="Room id"
                                    prop:value=move || draft.with(|d| d.room.clone())
                                    on:input=move |ev| set_field(BookingField::Room, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                            <div class="form__group">
                                <label for="check-in">"Check-in"</label>
                                <input
                                    type="date"
                                    id="check-in"
                                    required
                                    prop:value=move || draft.with(|d| date_input_value(d.check_in_date.as_ref()))
                                    on:input=move |ev| set_field(BookingField::CheckInDate, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                            <div class="form__group">
                                <label for="check-out">"Check-out"</label>
                                <input
                                    type="date"
                                    id="check-out"
                                    required
                                    prop:value=move || draft.with(|d| date_input_value(d.check_out_date.as_ref()))
                                    on:input=move |ev| set_field(BookingField::CheckOutDate, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                        </div>

                        <div class="form__row">
                            <div class="form__group">
                                <label for="guests">"Guests"</label>
                                <input
                                    type="number"
                                    id="guests"
                                    min="1"
                                    required
                                    prop:value=move || draft.with(|d| d.number_of_guests.to_string())
                                    on:input=move |ev| set_field(BookingField::NumberOfGuests, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                            <div class="form__group">
                                <label for="total-price">"Total price"</label>
                                <input
                                    type="number"
                                    id="total-price"
                                    min="0"
                                    step="0.01"
                                    prop:value=move || draft.with(|d| d.total_price.to_string())
                                    on:input=move |ev| set_field(BookingField::TotalPrice, event_target_value(&ev))
                                    disabled=view_only
                                />
                            </div>
                            <div class="form__group">
                                <label for="status">"Status"</label>
                                <select
                                    id="status"
                                    on:change=move |ev| set_field(BookingField::Status, event_target_value(&ev))
                                    disabled=view_only
                                >
                                    {BookingStatus::all()
                                        .into_iter()
                                        .map(|status| view! {
                                            <option
                                                value=status.code()
                                                prop:selected=move || draft.with(|d| d.status == status)
                                            >
                                                {status.display_name()}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form__group">
                            <label for="special-requests">"Special requests"</label>
                            <textarea
                                id="special-requests"
                                rows="3"
                                prop:value=move || draft.with(|d| d.special_requests.clone())
                                on:input=move |ev| set_field(BookingField::SpecialRequests, event_target_value(&ev))
                                disabled=view_only
                            />
                        </div>

                        {meta.map(|booking| view! {
                            <div class="details-meta">
                                <span>"ID: " {booking.id.clone()}</span>
                                <span>"Created: " {format_datetime(booking.created_at.as_ref())}</span>
                                <span>"Updated: " {format_datetime(booking.updated_at.as_ref())}</span>
                            </div>
                        })}
                    </div>

                    <div class="modal-footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            {icon("x")}
                            {move || if view_only() { " Close" } else { " Cancel" }}
                        </button>
                        <Show when=move || !view_only()>
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || !draft.with(|d| d.is_complete())
                            >
                                {icon("save")}
                                " Save"
                            </button>
                        </Show>
                    </div>
                </form>
            </Modal>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_booking::aggregate::RoomRef;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: "b-1".into(),
            guest_name: "Jane Doe".into(),
            guest_email: "jane@example.com".into(),
            guest_phone: String::new(),
            room: Some(RoomRef::Id("r-1".into())),
            check_in_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            number_of_guests: 1,
            special_requests: None,
            status: BookingStatus::Confirmed,
            total_price: 120.0,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_modal_title_per_mode() {
        let mut editor = EditorState::<Booking>::default();
        editor.open_create();
        assert_eq!(modal_title(&editor), "New booking");
        editor.open_edit(booking());
        assert_eq!(modal_title(&editor), "Edit booking");
        editor.open_view(booking());
        assert_eq!(modal_title(&editor), "Booking details");
    }
}

pub mod state;

use self::state::{
    apply_date_range, clear_date_range, create_state, delete_booking, load, save_booking,
    BookingsPageState,
};
use crate::domain::a001_booking::api::HttpBookingsApi;
use crate::domain::a001_booking::ui::details::BookingModal;
use crate::shared::components::confirmation_modal::ConfirmationModal;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::{format_date, format_price};
use crate::shared::icons::icon;
use crate::shared::resource_page;
use contracts::domain::a001_booking::aggregate::{Booking, BookingDto, BookingStats};
use leptos::prelude::*;
use thaw::Spinner;

#[component]
#[allow(non_snake_case)]
pub fn BookingsPage() -> impl IntoView {
    let api = StoredValue::new(HttpBookingsApi::default());
    let state = create_state();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            load(&api, &state).await;
        });
    };

    let refresh = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            resource_page::refresh::<HttpBookingsApi, BookingsPageState, _>(&api, &state).await;
        });
    };

    let apply_range = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            apply_date_range(&api, &state).await;
        });
    };

    let clear_range = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            clear_date_range(&api, &state).await;
        });
    };

    // Failures land in state.list.error; the result is only for callers that care
    let on_save = Callback::new(move |(draft, id): (BookingDto, Option<String>)| {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            let _ = save_booking(&api, &state, draft, id).await;
        });
    });

    let on_confirm_delete = Callback::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            let _ = delete_booking(&api, &state).await;
        });
    });

    let stat = move |pick: fn(&BookingStats) -> u64| {
        Signal::derive(move || state.with(|s| s.stats.as_ref().map(pick)))
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Bookings"}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| state.update(|s| s.list.editor.open_create())
                    >
                        {icon("plus")}
                        {"New booking"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard label="Total" icon_name="bookings" value=stat(|s| s.total_bookings) />
                <StatCard label="Confirmed" icon_name="check" value=stat(|s| s.confirmed) tone=StatTone::Success />
                <StatCard label="Pending" icon_name="clock" value=stat(|s| s.pending) tone=StatTone::Warning />
                <StatCard label="Cancelled" icon_name="x" value=stat(|s| s.cancelled) tone=StatTone::Error />
                <StatCard label="Checked in" icon_name="log-in" value=stat(|s| s.checked_in) />
                <StatCard label="Checked out" icon_name="log-out" value=stat(|s| s.checked_out) />
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    class="filter-bar__search"
                    placeholder="Search by guest, email, phone, room or status"
                    prop:value=move || state.with(|s| s.list.search.clone())
                    on:input=move |ev| state.update(|s| s.list.set_search(event_target_value(&ev)))
                />
                <div class="filter-bar__range">
                    <label for="range-from">"From"</label>
                    <input
                        type="date"
                        id="range-from"
                        prop:value=move || state.with(|s| s.date_from.clone())
                        on:input=move |ev| state.update(|s| s.date_from = event_target_value(&ev))
                    />
                    <label for="range-to">"To"</label>
                    <input
                        type="date"
                        id="range-to"
                        prop:value=move || state.with(|s| s.date_to.clone())
                        on:input=move |ev| state.update(|s| s.date_to = event_target_value(&ev))
                    />
                    <button class="button button--secondary" on:click=move |_| apply_range()>
                        {icon("filter")}
                        {"Apply"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| clear_range()>
                        {icon("x")}
                        {"Clear"}
                    </button>
                </div>
            </div>

            {move || state.with(|s| s.list.error.clone()).map(|e| view! {
                <div class="error">
                    <span>{e}</span>
                    <button class="button button--secondary" on:click=move |_| refresh()>
                        {icon("refresh")}
                        {"Retry"}
                    </button>
                </div>
            })}

            {move || {
                if state.with(|s| s.list.loading) {
                    return view! {
                        <div class="loading">
                            <Spinner label="Loading bookings..." />
                        </div>
                    }
                    .into_any();
                }
                let rows = state.with(|s| s.list.visible_items());
                if rows.is_empty() {
                    return view! { <div class="empty-state">{"No bookings found"}</div> }.into_any();
                }
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Guest"</th>
                                    <th class="table__header-cell">"Phone"</th>
                                    <th class="table__header-cell">"Room"</th>
                                    <th class="table__header-cell">"Check-in"</th>
                                    <th class="table__header-cell">"Check-out"</th>
                                    <th class="table__header-cell">"Guests"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Total"</th>
                                    <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|booking| booking_row(booking, state)).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            <BookingModal
                editor={resource_page::editor_memo::<Booking, _>(state)}
                on_save=on_save
                on_cancel=Callback::new(move |_| state.update(|s| s.list.editor.close()))
            />

            <ConfirmationModal
                open=Signal::derive(move || state.with(|s| s.list.is_delete_open()))
                target_name=Signal::derive(move || {
                    state.with(|s| s.list.pending_delete.as_ref().and_then(Booking::display_name))
                })
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| state.update(|s| s.list.cancel_delete()))
            />
        </div>
    }
}

fn booking_row(booking: Booking, state: RwSignal<BookingsPageState>) -> impl IntoView {
    let for_view = booking.clone();
    let for_edit = booking.clone();
    let for_delete = booking.clone();
    let nights = booking.nights();

    view! {
        <tr class="table__row">
            <td class="table__cell">
                <div class="cell__primary">{booking.guest_name.clone()}</div>
                <div class="cell__secondary">{booking.guest_email.clone()}</div>
            </td>
            <td class="table__cell">{booking.guest_phone.clone()}</td>
            <td class="table__cell">{booking.room_label()}</td>
            <td class="table__cell">{format_date(&booking.check_in_date)}</td>
            <td class="table__cell">
                {format_date(&booking.check_out_date)}
                <span class="cell__secondary">{format!(" ({nights} n.)")}</span>
            </td>
            <td class="table__cell">{booking.number_of_guests}</td>
            <td class="table__cell">
                <span class=booking.status.badge_class()>{booking.status.display_name()}</span>
            </td>
            <td class="table__cell table__cell--number">{format_price(booking.total_price)}</td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon"
                    title="View"
                    on:click=move |_| state.update(|s| s.list.editor.open_view(for_view.clone()))
                >
                    {icon("eye")}
                </button>
                <button
                    class="button button--icon"
                    title="Edit"
                    on:click=move |_| state.update(|s| s.list.editor.open_edit(for_edit.clone()))
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="Delete"
                    on:click=move |_| state.update(|s| s.list.open_delete(for_delete.clone()))
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}

pub mod state;

use self::state::{
    create_state, delete_table, detail_path, load, save_table, TableSummary, TablesPageState,
};
use crate::domain::a002_table::api::HttpTablesApi;
use crate::domain::a002_table::ui::details::TableModal;
use crate::shared::components::confirmation_modal::ConfirmationModal;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::resource_page::editor_memo;
use contracts::domain::a002_table::aggregate::{Table, TableDto};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

#[component]
#[allow(non_snake_case)]
pub fn TablesPage() -> impl IntoView {
    let api = StoredValue::new(HttpTablesApi::default());
    let state = create_state();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            load(&api, &state).await;
        });
    };

    let on_save = Callback::new(move |(draft, id): (TableDto, Option<String>)| {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            let _ = save_table(&api, &state, draft, id).await;
        });
    });

    let on_confirm_delete = Callback::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let api = api.get_value();
            let _ = delete_table(&api, &state).await;
        });
    });

    let summary = Memo::new(move |_| state.with(|s| TableSummary::from_tables(&s.items)));

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Restaurant tables"}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| state.update(|s| s.editor.open_create())
                    >
                        {icon("plus")}
                        {"New table"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Tables"
                    icon_name="tables"
                    value=Signal::derive(move || Some(summary.get().total))
                />
                <StatCard
                    label="Active"
                    icon_name="check"
                    value=Signal::derive(move || Some(summary.get().active))
                    tone=StatTone::Success
                />
                <StatCard
                    label="Seats (active)"
                    icon_name="bookings"
                    value=Signal::derive(move || Some(summary.get().active_seats))
                />
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    class="filter-bar__search"
                    placeholder="Search by number, capacity, location, shape or notes"
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                />
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                if state.with(|s| s.loading) {
                    return view! {
                        <div class="loading">
                            <Spinner label="Loading tables..." />
                        </div>
                    }
                    .into_any();
                }
                let rows = state.with(|s| s.visible_items());
                if rows.is_empty() {
                    return view! { <div class="empty-state">{"No tables found"}</div> }.into_any();
                }
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Number"</th>
                                    <th class="table__header-cell">"Capacity"</th>
                                    <th class="table__header-cell">"Location"</th>
                                    <th class="table__header-cell">"Shape"</th>
                                    <th class="table__header-cell">"Features"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|table| table_row(table, state)).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            <TableModal
                editor={editor_memo::<Table, _>(state)}
                on_save=on_save
                on_cancel=Callback::new(move |_| state.update(|s| s.editor.close()))
            />

            <ConfirmationModal
                open=Signal::derive(move || state.with(|s| s.is_delete_open()))
                target_name=Signal::derive(move || {
                    state.with(|s| s.pending_delete.as_ref().and_then(Table::display_name))
                })
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| state.update(|s| s.cancel_delete()))
            />
        </div>
    }
}

/// Badge texts for the features column, in the table's own order
fn feature_labels(table: &Table) -> Vec<&'static str> {
    table.features.iter().map(|f| f.display_name()).collect()
}

fn table_row(table: Table, state: RwSignal<TablesPageState>) -> impl IntoView {
    let href = detail_path(&table);
    let for_edit = table.clone();
    let for_delete = table.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">{table.table_number.clone()}</td>
            <td class="table__cell table__cell--number">{table.capacity}</td>
            <td class="table__cell">{table.location.display_name()}</td>
            <td class="table__cell">{table.shape.display_name()}</td>
            <td class="table__cell">
                {feature_labels(&table)
                    .into_iter()
                    .map(|label| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {label}
                        </Badge>
                    })
                    .collect_view()}
            </td>
            <td class="table__cell">
                {if table.is_active {
                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                } else {
                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Inactive"</Badge> }.into_any()
                }}
            </td>
            <td class="table__cell table__cell--actions">
                <A href=href>
                    <span class="button button--icon" title="View">{icon("eye")}</span>
                </A>
                <button
                    class="button button--icon"
                    title="Edit"
                    on:click=move |_| state.update(|s| s.editor.open_edit(for_edit.clone()))
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="Delete"
                    on:click=move |_| state.update(|s| s.open_delete(for_delete.clone()))
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}

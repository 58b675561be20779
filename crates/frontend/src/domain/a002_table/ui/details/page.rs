use super::TableForm;
use crate::domain::a002_table::api::HttpTablesApi;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::resource_page::{Resource, ResourceApi};
use contracts::domain::a002_table::aggregate::{Table, TableDto};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::Spinner;

/// Read-only page behind `/tables/:id`
#[component]
#[allow(non_snake_case)]
pub fn TableDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let table = RwSignal::new(None::<Table>);
    let draft = RwSignal::new(TableDto::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            error.set(Some("Table id is missing.".to_string()));
            loading.set(false);
            return;
        };
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let api = HttpTablesApi::default();
            match api.fetch_by_id(&id).await {
                Ok(t) => {
                    draft.set(t.to_draft());
                    table.set(Some(t));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("table {id} fetch failed: {e}");
                    error.set(Some(<Table as Resource>::LOAD_ERROR.to_string()));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="content">
            <div class="header">
                <h2>
                    {move || {
                        table
                            .with(|t| t.as_ref().and_then(Table::display_name))
                            .unwrap_or_else(|| "Table".to_string())
                    }}
                </h2>
                <div class="header__actions">
                    <A href="/tables">
                        <span class="button button--secondary">
                            {icon("arrow-left")}
                            " Back to tables"
                        </span>
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading"><Spinner label="Loading table..." /></div> }
            >
                {move || table.with(|t| t.clone()).map(|t| view! {
                    <div class="details-form">
                        <TableForm draft=draft disabled=true />
                        <div class="details-meta">
                            <span>"ID: " {t.id.clone()}</span>
                            <span>"Created: " {format_datetime(t.created_at.as_ref())}</span>
                            <span>"Updated: " {format_datetime(t.updated_at.as_ref())}</span>
                        </div>
                    </div>
                })}
            </Show>
        </div>
    }
}

pub mod page;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::resource_page::EditorState;
use contracts::domain::a002_table::aggregate::{Table, TableDto, TableField};
use contracts::enums::table_feature::TableFeature;
use contracts::enums::table_location::TableLocation;
use contracts::enums::table_shape::TableShape;
use leptos::prelude::*;

/// Form body shared by the modal and the read-only table page
#[component]
pub fn TableForm(
    draft: RwSignal<TableDto>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let set_field = move |field: TableField, value: String| {
        match draft.with_untracked(|d| d.with_field(field, &value)) {
            Ok(next) => draft.set(next),
            Err(e) => log::debug!("table form: {e}"),
        }
    };

    view! {
        <div class="form__row">
            <div class="form__group">
                <label for="table-number">"Table number"</label>
                <input
                    type="text"
                    id="table-number"
                    required
                    prop:value=move || draft.with(|d| d.table_number.clone())
                    on:input=move |ev| set_field(TableField::TableNumber, event_target_value(&ev))
                    disabled=move || disabled.get()
                />
            </div>
            <div class="form__group">
                <label for="capacity">"Capacity"</label>
                <input
                    type="number"
                    id="capacity"
                    min="1"
                    required
                    prop:value=move || draft.with(|d| d.capacity.to_string())
                    on:input=move |ev| set_field(TableField::Capacity, event_target_value(&ev))
                    disabled=move || disabled.get()
                />
            </div>
        </div>

        <div class="form__row">
            <div class="form__group">
                <label for="location">"Location"</label>
                <select
                    id="location"
                    on:change=move |ev| set_field(TableField::Location, event_target_value(&ev))
                    disabled=move || disabled.get()
                >
                    {TableLocation::all()
                        .into_iter()
                        .map(|location| view! {
                            <option
                                value=location.code()
                                prop:selected=move || draft.with(|d| d.location == location)
                            >
                                {location.display_name()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="form__group">
                <label for="shape">"Shape"</label>
                <select
                    id="shape"
                    on:change=move |ev| set_field(TableField::Shape, event_target_value(&ev))
                    disabled=move || disabled.get()
                >
                    {TableShape::all()
                        .into_iter()
                        .map(|shape| view! {
                            <option
                                value=shape.code()
                                prop:selected=move || draft.with(|d| d.shape == shape)
                            >
                                {shape.display_name()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>

        <fieldset class="form__group form__features">
            <legend>"Features"</legend>
            {TableFeature::all()
                .into_iter()
                .map(|feature| view! {
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.has_feature(feature))
                            on:change=move |_| draft.update(|d| *d = d.toggle_feature(feature))
                            disabled=move || disabled.get()
                        />
                        {feature.display_name()}
                    </label>
                })
                .collect_view()}
        </fieldset>

        <div class="form__group">
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.is_active)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        set_field(TableField::IsActive, checked.to_string());
                    }
                    disabled=move || disabled.get()
                />
                "Active"
            </label>
        </div>

        <div class="form__group">
            <label for="notes">"Notes"</label>
            <textarea
                id="notes"
                rows="3"
                prop:value=move || draft.with(|d| d.notes.clone())
                on:input=move |ev| set_field(TableField::Notes, event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Create / edit dialog for a restaurant table.
///
/// Same draft isolation as the booking dialog: the working copy is re-seeded
/// when the editor session changes and only leaves through `on_save`.
#[component]
pub fn TableModal(
    #[prop(into)]
    editor: Signal<EditorState<Table>>,
    on_save: Callback<(TableDto, Option<String>)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(TableDto::default());
    let session = Memo::new(move |_| editor.with(|e| e.sync_key()));
    let is_open = Memo::new(move |_| editor.with(|e| e.open));

    Effect::new(move |_| {
        session.track();
        draft.set(editor.with_untracked(|e| e.draft.clone()));
    });

    let view_only = Signal::derive(move || editor.with(|e| e.is_view_only()));

    let submit = move || {
        let current = draft.get_untracked();
        let id = editor.with_untracked(|e| e.submit_id());
        on_save.run((current, id));
    };

    move || {
        if !is_open.get() {
            return None;
        }
        let title = editor.with_untracked(|e| match (&e.target, e.editing) {
            (None, _) => "New table".to_string(),
            (Some(t), true) => format!("Edit table {}", t.table_number),
            (Some(t), false) => format!("Table {}", t.table_number),
        });

        Some(view! {
            <Modal title=title on_close=on_cancel modal_class="table-modal">
                <form
                    class="details-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <div class="modal-body">
                        <TableForm draft=draft disabled=view_only />
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            {icon("x")}
                            " Cancel"
                        </button>
                        <Show when=move || !view_only.get()>
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

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

const GENERIC_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Text of the delete confirmation. Falls back to a generic message when
/// the target has no usable name.
pub fn confirmation_message(target_name: Option<&str>) -> String {
    match target_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Are you sure you want to delete {name}?"),
        None => GENERIC_MESSAGE.to_string(),
    }
}

/// Delete confirmation dialog.
///
/// Stateless: shows the message and forwards Confirm/Cancel. Errors from the
/// delete itself are reported by the owning page, not here.
#[component]
pub fn ConfirmationModal(
    #[prop(into)]
    open: Signal<bool>,
    /// Display name of the entity to delete
    #[prop(into)]
    target_name: Signal<Option<String>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    move || {
        open.get().then(|| {
            view! {
                <Modal title="Confirm deletion" on_close=on_cancel modal_class="modal--confirm">
                    <div class="modal-body">
                        <p class="modal__message">
                            {move || confirmation_message(target_name.get().as_deref())}
                        </p>
                        <p class="modal__hint">"This action cannot be undone."</p>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            {icon("delete")}
                            " Delete"
                        </Button>
                    </div>
                </Modal>
            }
        })
    }
}

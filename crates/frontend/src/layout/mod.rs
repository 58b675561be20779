pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell: navigation on the left, routed page on the right.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <Sidebar />
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}

use crate::domain::a001_booking::ui::list::BookingsPage;
use crate::domain::a002_table::ui::details::page::TableDetailsPage;
use crate::domain::a002_table::ui::list::TablesPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="empty-state">"Page not found"</div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/bookings" /> } />
                    <Route path=path!("/bookings") view=BookingsPage />
                    <Route path=path!("/tables") view=TablesPage />
                    <Route path=path!("/tables/:id") view=TableDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}

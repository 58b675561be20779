//! Left navigation menu

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            path: "/bookings",
            label: "Bookings",
            icon: "bookings",
        },
        MenuItem {
            path: "/tables",
            label: "Tables",
            icon: "tables",
        },
    ]
}

/// `/tables/7` keeps the "Tables" entry highlighted
fn is_active(current: &str, item_path: &str) -> bool {
    current == item_path
        || current
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Hospitality admin"</div>
            <ul class="sidebar__menu">
                {menu_items()
                    .into_iter()
                    .map(|item| {
                        let active = move || location.pathname.with(|p| is_active(p, item.path));
                        view! {
                            <li class="sidebar__item" class:sidebar__item--active=active>
                                <A href=item.path>
                                    <span class="sidebar__icon">{icon(item.icon)}</span>
                                    <span class="sidebar__label">{item.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_matching() {
        assert!(is_active("/tables", "/tables"));
        assert!(is_active("/tables/t-1", "/tables"));
        assert!(!is_active("/tablesx", "/tables"));
        assert!(!is_active("/bookings", "/tables"));
    }

    #[test]
    fn test_menu_covers_both_pages() {
        let paths: Vec<_> = menu_items().iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/bookings", "/tables"]);
    }
}

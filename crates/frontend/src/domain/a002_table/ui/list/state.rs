use crate::shared::api_client::ApiError;
use crate::shared::resource_page::{self, ResourceApi, ResourceState};
use crate::shared::state_cell::StateCell;
use contracts::domain::a002_table::aggregate::{Table, TableDto};
use leptos::prelude::*;

pub type TablesPageState = ResourceState<Table>;

pub fn create_state() -> RwSignal<TablesPageState> {
    RwSignal::new(TablesPageState::default())
}

/// Floor overview computed from the loaded list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSummary {
    pub total: u64,
    pub active: u64,
    /// Seats at active tables only
    pub active_seats: u64,
}

impl TableSummary {
    pub fn from_tables(tables: &[Table]) -> Self {
        tables.iter().fold(Self::default(), |mut acc, t| {
            acc.total += 1;
            if t.is_active {
                acc.active += 1;
                acc.active_seats += u64::from(t.capacity);
            }
            acc
        })
    }
}

/// Route of the read-only table page
pub fn detail_path(table: &Table) -> String {
    format!("/tables/{}", urlencoding::encode(&table.id))
}

pub async fn load<A, C>(api: &A, cell: &C)
where
    A: ResourceApi<Entity = Table> + ?Sized,
    C: StateCell<TablesPageState>,
{
    resource_page::refresh::<A, TablesPageState, C>(api, cell).await;
}

pub async fn save_table<A, C>(
    api: &A,
    cell: &C,
    draft: TableDto,
    id: Option<String>,
) -> Result<(), ApiError>
where
    A: ResourceApi<Entity = Table> + ?Sized,
    C: StateCell<TablesPageState>,
{
    resource_page::save::<A, TablesPageState, C>(api, cell, draft, id).await
}

pub async fn delete_table<A, C>(api: &A, cell: &C) -> Result<(), ApiError>
where
    A: ResourceApi<Entity = Table> + ?Sized,
    C: StateCell<TablesPageState>,
{
    resource_page::confirm_delete::<A, TablesPageState, C>(api, cell).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource_page::fake::FakeApi;
    use contracts::enums::table_feature::TableFeature;
    use contracts::enums::table_location::TableLocation;
    use contracts::enums::table_shape::TableShape;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn table(id: &str, number: &str, capacity: u32, active: bool) -> Table {
        Table {
            id: id.into(),
            table_number: number.into(),
            capacity,
            location: TableLocation::Indoor,
            shape: TableShape::Round,
            features: Vec::new(),
            is_active: active,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn materialize(id: &str, draft: &TableDto) -> Table {
        Table {
            id: id.into(),
            table_number: draft.table_number.clone(),
            capacity: draft.capacity,
            location: draft.location,
            shape: draft.shape,
            features: draft.features.clone(),
            is_active: draft.is_active,
            notes: (!draft.notes.is_empty()).then(|| draft.notes.clone()),
            created_at: None,
            updated_at: None,
        }
    }

    fn fixture() -> (FakeApi<Table>, RefCell<TablesPageState>) {
        let mut patio = table("t-2", "2", 2, true);
        patio.location = TableLocation::Patio;
        patio.notes = Some("Heater nearby".into());
        let api = FakeApi::new(
            vec![table("t-1", "1", 4, true), patio, table("t-3", "30", 8, false)],
            materialize,
        );
        (api, RefCell::new(TablesPageState::default()))
    }

    #[test]
    fn test_summary_counts_active_seats_only() {
        let (api, _) = fixture();
        let summary = TableSummary::from_tables(&api.items.borrow());
        assert_eq!(
            summary,
            TableSummary {
                total: 3,
                active: 2,
                active_seats: 6
            }
        );
        assert_eq!(TableSummary::from_tables(&[]), TableSummary::default());
    }

    #[test]
    fn test_create_table_closes_modal_and_lists_it() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        cell.borrow_mut().editor.open_create();

        let draft = TableDto::default()
            .with_named_field("tableNumber", "12")
            .and_then(|d| d.with_named_field("capacity", "4"))
            .and_then(|d| d.with_named_field("location", "indoor"))
            .and_then(|d| d.with_named_field("shape", "square"))
            .unwrap();
        block_on(save_table(&api, &cell, draft, None)).unwrap();

        assert_eq!(api.count("create"), 1);
        let state = cell.borrow();
        assert!(!state.editor.open);
        let created = state
            .items
            .iter()
            .find(|t| t.table_number == "12")
            .expect("table 12 listed");
        assert_eq!(created.capacity, 4);
        assert_eq!(created.shape, TableShape::Square);
    }

    #[test]
    fn test_update_sends_toggled_features() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        let target = cell.borrow().items[0].clone();
        cell.borrow_mut().editor.open_edit(target.clone());

        let draft = TableDto::from(&target).toggle_feature(TableFeature::WindowView);
        block_on(save_table(&api, &cell, draft, Some(target.id.clone()))).unwrap();

        assert_eq!(api.calls(), vec!["list", "update:t-1", "list"]);
        let state = cell.borrow();
        assert_eq!(state.items[0].features, vec![TableFeature::WindowView]);
    }

    #[test]
    fn test_failed_delete_closes_confirmation_and_keeps_list() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        api.fail_delete.set(true);
        let target = cell.borrow().items[2].clone();
        cell.borrow_mut().open_delete(target);

        assert!(block_on(delete_table(&api, &cell)).is_err());
        let state = cell.borrow();
        assert!(!state.is_delete_open());
        assert_eq!(state.items.len(), 3);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to delete table. Please try again.")
        );

        // A second confirm has nothing to delete
        drop(state);
        block_on(delete_table(&api, &cell)).unwrap();
        assert_eq!(api.count("delete:t-3"), 1);
    }

    #[test]
    fn test_search_by_location_and_notes() {
        let (api, cell) = fixture();
        block_on(load(&api, &cell));
        let mut state = cell.borrow_mut();

        state.set_search("PATIO");
        assert_eq!(state.visible_items().len(), 1);
        state.set_search("heater");
        assert_eq!(state.visible_items()[0].id, "t-2");
        state.set_search("8");
        assert_eq!(state.visible_items()[0].id, "t-3");
        state.set_search("");
        assert_eq!(state.visible_items().len(), 3);
    }

    #[test]
    fn test_load_failure_sets_banner() {
        let (api, cell) = fixture();
        api.fail_list.set(true);
        block_on(load(&api, &cell));

        let state = cell.borrow();
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load tables. Please try again.")
        );
    }

    #[test]
    fn test_detail_path_encodes_id() {
        assert_eq!(detail_path(&table("t-1", "1", 2, true)), "/tables/t-1");
        assert_eq!(detail_path(&table("a/b", "1", 2, true)), "/tables/a%2Fb");
    }
}

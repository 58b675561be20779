use crate::shared::list_utils::Searchable;
use crate::shared::resource_page::Resource;
use contracts::domain::a002_table::aggregate::{Table, TableDto};

impl Searchable for Table {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.table_number.clone(),
            self.capacity.to_string(),
            self.location.code().to_string(),
            self.location.display_name().to_string(),
            self.shape.code().to_string(),
            self.shape.display_name().to_string(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

impl Resource for Table {
    type Draft = TableDto;

    const LOAD_ERROR: &'static str = "Failed to load tables. Please try again.";
    const SAVE_ERROR: &'static str = "Failed to save table. Please try again.";
    const DELETE_ERROR: &'static str = "Failed to delete table. Please try again.";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> Option<String> {
        Table::display_name(self)
    }

    fn to_draft(&self) -> TableDto {
        TableDto::from(self)
    }
}

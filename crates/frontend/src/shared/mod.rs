pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod resource_page;
pub mod state_cell;

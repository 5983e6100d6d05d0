pub mod dialogs;
pub mod event_data_table;
pub mod loader_spinner;
pub mod profile;

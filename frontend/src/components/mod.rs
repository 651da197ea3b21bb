pub mod loader;
pub mod results_table;
pub mod upload_form;

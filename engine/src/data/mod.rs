pub mod csv_parser;
pub mod loader;
pub mod series_store;

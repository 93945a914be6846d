mod get_statistics;

pub use get_statistics::{__path_get_statistics_handler, get_statistics_handler};

//! Report module - terminal views of the scale catalog

pub mod catalog_table;

pub use catalog_table::*;

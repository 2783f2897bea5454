//! filecat: In-Memory File Catalog
//!
//! An in-memory catalog of file metadata records with derived views (sorted
//! copies, group-by mappings, aggregate statistics) and an interactive console
//! menu. Views are rebuilt from the single record sequence on every request.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tooling;
pub mod views;

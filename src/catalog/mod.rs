//! Catalog commands: the service over the record store, its result types, and
//! their text rendering.

mod commands;
mod format;
mod types;

pub use commands::CatalogCommandService;
pub use format::*;
pub use types::*;

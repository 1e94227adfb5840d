//! Terminal frontend for the Folio catalog browser.
//!
//! Loads the catalog once, applies the filter and sort given on the command
//! line, and prints either the table or the detail display.

pub mod args;
pub mod loader;
pub mod render;

pub use args::{Args, OutputFormat};
pub use loader::{load_catalog, source_for, CatalogSource, FileSource, HttpSource, LoadError};
pub use render::{render_detail, render_json, render_table};

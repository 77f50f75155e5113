//! Outer layer of the curated-gems reader.
//!
//! [`loader`] fetches the dataset from disk or over HTTP, [`render`] turns a
//! [`gems_core::Session`] into static HTML, and [`app_dirs`] and [`logging`]
//! carry the process-level plumbing shared with the `gems` binary.

pub mod app_dirs;
pub mod loader;
pub mod logging;
pub mod render;

pub use loader::{DatasetLoader, DatasetLocation, InvalidLocation};
pub use render::{PageModel, render_page};

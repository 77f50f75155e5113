//! Configuration loading and resolution utilities.
//!
//! `load` layers the default config files, any `--config` files, `GEMS__*`
//! environment variables and finally the CLI flags, then resolves the result
//! into a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;

/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_deco_config, load_deco_config};
pub use types::{DecoConfig, ManifestSection};

//! Configuration: typed schema and loading.

pub mod loader;
pub mod schema;

pub use loader::{ENV_SOURCE_KEY, ENV_SOURCE_URL, from_env, load};
pub use schema::{SiteConfig, SourceConfig};

pub mod catalog;
pub mod source;

// Re-exports for convenience
pub use catalog::{provider, resolve_template, TileProvider, TILE_PROVIDERS};
pub use source::{TileSource, UrlTemplateSource};

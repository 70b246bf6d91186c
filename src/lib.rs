//! # leafmark
//!
//! A convenience facade for describing Leaflet-style web maps from Rust.
//!
//! The crate does not render anything itself. It normalises caller input
//! (coordinates, zoom, tile sources, icon styling, popup content) into plain
//! descriptors that a map-rendering engine consumes:
//!
//! - [`create_map`] builds a [`MapConfig`] for the map canvas.
//! - [`create_icon`] builds an [`IconDescriptor`] for a marker symbol.
//! - [`PopupBuilder`] produces HTML [`PopupContent`] in three flavours.
//! - [`create_marker`] combines all of the above into a [`MarkerDescriptor`].
//!
//! Every call is independent and holds no shared state, so markers can be
//! built from as many threads as the caller likes.

use std::path::PathBuf;

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod tiles;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{EscapeMode, MimePolicy, PopupConfig, PopupProfile},
    geo::{LatLng, TileCoord},
    map::{create_map, MapConfig, TileLayerSpec},
};

pub use layers::{
    icon::{create_icon, IconDescriptor, SymbolSet},
    marker::{create_marker, MarkerDescriptor},
};

pub use ui::popup::{PopupBuilder, PopupContent, PopupKind};

pub use data::encoding::ImageEncoder;

pub use rendering::{scene::SceneRecorder, MapRenderer};

pub use tiles::{source::TileSource, source::UrlTemplateSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinate(String),

    #[error("Missing attribution: {0}")]
    MissingAttribution(String),

    #[error("Image file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Image file unreadable: {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;

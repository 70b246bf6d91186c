//! Prelude module for common leafmark types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use leafmark::prelude::*;`

pub use crate::core::{
    config::{EscapeMode, MimePolicy, PopupConfig, PopupProfile},
    geo::{LatLng, TileCoord},
    map::{create_map, MapConfig, TileLayerSpec},
};

pub use crate::layers::{
    icon::{create_icon, IconDescriptor, SymbolSet},
    marker::{create_marker, MarkerDescriptor},
};

pub use crate::ui::popup::{PopupBuilder, PopupContent, PopupKind};

pub use crate::data::encoding::ImageEncoder;

pub use crate::rendering::{scene::SceneRecorder, MapRenderer};

pub use crate::tiles::source::{TileSource, UrlTemplateSource};

pub use crate::{Error as MapError, Result};

//! Built-in tile providers
//!
//! Reference data only. A map may use any URL template; these names are a
//! shorthand that [`resolve_template`] expands.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProvider {
    pub name: &'static str,
    pub url_template: &'static str,
}

pub const TILE_PROVIDERS: [TileProvider; 4] = [
    TileProvider {
        name: "OpenStreetMap",
        url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    },
    TileProvider {
        name: "OpenTopoMap",
        url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
    },
    TileProvider {
        name: "Esri WorldImagery",
        url_template:
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
    },
    TileProvider {
        name: "Esri NatGeoWorldMap",
        url_template:
            "https://server.arcgisonline.com/ArcGIS/rest/services/NatGeo_World_Map/MapServer/tile/{z}/{y}/{x}",
    },
];

static BY_NAME: Lazy<FxHashMap<&'static str, TileProvider>> =
    Lazy::new(|| TILE_PROVIDERS.iter().map(|p| (p.name, *p)).collect());

/// Looks up a built-in provider by its exact name
pub fn provider(name: &str) -> Option<TileProvider> {
    BY_NAME.get(name).copied()
}

/// Expands a provider name to its URL template; anything else is returned as is
pub fn resolve_template(name_or_url: &str) -> &str {
    match BY_NAME.get(name_or_url) {
        Some(p) => p.url_template,
        None => name_or_url,
    }
}

//! Map canvas configuration

use crate::{
    core::{
        constants::MAX_ZOOM,
        geo::{LatLng, TileCoord},
    },
    tiles::{catalog::resolve_template, source::UrlTemplateSource},
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// A non-default base layer. Template and attribution always travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayerSpec {
    /// Built-in provider name or a URL template
    pub source: String,
    pub attribution: String,
}

impl TileLayerSpec {
    /// URL template with built-in provider names expanded
    pub fn url_template(&self) -> &str {
        resolve_template(&self.source)
    }
}

/// Everything the rendering engine needs to open a map canvas.
///
/// Only [`create_map`] validates; values built or deserialized directly
/// are taken as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom_level: u8,
    /// `None` lets the engine apply its own default tiles
    pub tile_layer: Option<TileLayerSpec>,
}

impl MapConfig {
    pub fn tile_source(&self) -> Option<UrlTemplateSource> {
        self.tile_layer
            .as_ref()
            .map(|layer| UrlTemplateSource::new(layer.url_template()))
    }

    /// The tile containing the map center at the initial zoom, `None` when
    /// the zoom is deeper than tile indices can address
    pub fn center_tile(&self) -> Option<TileCoord> {
        TileCoord::from_lat_lng(&self.center, self.zoom_level)
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "center": self.center.to_array(),
            "zoom": self.zoom_level,
            "tileLayer": self.tile_layer.as_ref().map(|layer| serde_json::json!({
                "urlTemplate": layer.url_template(),
                "attribution": layer.attribution,
            })),
        })
    }
}

/// Builds a map configuration centered on `center` at `zoom_level`.
///
/// A custom tile source needs an attribution and the other way round;
/// supplying only one of them fails with `MapError::MissingAttribution`.
/// Blank strings count as absent.
pub fn create_map(
    center: LatLng,
    zoom_level: u8,
    tile_source: Option<&str>,
    attribution: Option<&str>,
) -> Result<MapConfig> {
    let center = center.validated()?;
    if zoom_level > MAX_ZOOM {
        log::warn!("zoom {} is above what the bundled providers serve ({})", zoom_level, MAX_ZOOM);
    }

    let tile_source = tile_source.filter(|s| !s.trim().is_empty());
    let attribution = attribution.filter(|s| !s.trim().is_empty());

    let tile_layer = match (tile_source, attribution) {
        (Some(source), Some(attribution)) => Some(TileLayerSpec {
            source: source.to_string(),
            attribution: attribution.to_string(),
        }),
        (Some(source), None) => {
            return Err(MapError::MissingAttribution(format!(
                "tile source '{}' was given without attribution text",
                source
            )))
        }
        (None, Some(_)) => {
            return Err(MapError::MissingAttribution(
                "attribution was given without a tile source".to_string(),
            ))
        }
        (None, None) => None,
    };

    log::debug!(
        "map at ({:.6}, {:.6}) zoom {} tiles {:?}",
        center.lat,
        center.lng,
        zoom_level,
        tile_layer.as_ref().map(|l| l.source.as_str())
    );

    Ok(MapConfig {
        center,
        zoom_level,
        tile_layer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::source::TileSource;

    fn florianopolis() -> LatLng {
        LatLng::new(-27.5954, -48.548)
    }

    #[test]
    fn test_default_tiles() {
        let map = create_map(florianopolis(), 12, None, None).unwrap();

        assert_eq!(map.center, florianopolis());
        assert_eq!(map.zoom_level, 12);
        assert!(map.tile_layer.is_none());
        assert!(map.tile_source().is_none());
        assert!(map.options()["tileLayer"].is_null());
    }

    #[test]
    fn test_custom_tiles_need_attribution() {
        let err = create_map(florianopolis(), 12, Some("OpenTopoMap"), None).unwrap_err();
        assert!(matches!(err, MapError::MissingAttribution(_)));

        let err = create_map(florianopolis(), 12, Some("OpenTopoMap"), Some("  ")).unwrap_err();
        assert!(matches!(err, MapError::MissingAttribution(_)));

        let err = create_map(florianopolis(), 12, None, Some("© someone")).unwrap_err();
        assert!(matches!(err, MapError::MissingAttribution(_)));
    }

    #[test]
    fn test_named_provider_resolves() {
        let map = create_map(florianopolis(), 5, Some("OpenTopoMap"), Some("© OpenTopoMap")).unwrap();
        let layer = map.tile_layer.as_ref().unwrap();

        assert_eq!(layer.source, "OpenTopoMap");
        assert_eq!(layer.url_template(), "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png");

        let options = map.options();
        assert_eq!(options["tileLayer"]["attribution"], "© OpenTopoMap");
        assert_eq!(options["zoom"], 5);
        assert_eq!(options["center"][0], -27.5954);
    }

    #[test]
    fn test_center_tile_url() {
        let map = create_map(
            LatLng::new(0.0, 0.0),
            1,
            Some("https://{s}.tiles.example.org/{z}/{x}/{y}.png"),
            Some("example"),
        )
        .unwrap();

        let tile = map.center_tile().unwrap();
        assert_eq!(tile, TileCoord::new(1, 1, 1));
        assert_eq!(
            map.tile_source().unwrap().url(tile),
            "https://c.tiles.example.org/1/1/1.png"
        );
    }

    #[test]
    fn test_center_tile_beyond_addressable_zoom() {
        let map = create_map(LatLng::new(0.0, 0.0), 40, None, None).unwrap();
        assert_eq!(map.zoom_level, 40);
        assert_eq!(map.center_tile(), None);

        let map = create_map(LatLng::new(0.0, 0.0), 64, None, None).unwrap();
        assert_eq!(map.center_tile(), None);

        let map = create_map(LatLng::new(0.0, 0.0), 32, None, None).unwrap();
        assert!(map.center_tile().unwrap().is_valid());
    }

    #[test]
    fn test_invalid_center() {
        let err = create_map(LatLng::new(120.0, 0.0), 3, None, None).unwrap_err();
        assert!(matches!(err, MapError::InvalidCoordinate(_)));
    }
}

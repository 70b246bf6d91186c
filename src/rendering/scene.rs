use crate::{
    core::map::MapConfig, layers::marker::MarkerDescriptor, rendering::MapRenderer, Result,
};

/// Collects a map and its markers into one JSON document that a JavaScript
/// Leaflet page can replay:
///
/// ```json
/// { "map": { "center": [lat, lng], "zoom": 12, "tileLayer": null },
///   "markers": [ { "position": {...}, "icon": {...}, "popup": null, "tooltip": null } ] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SceneRecorder {
    map: Option<serde_json::Value>,
    markers: Vec<serde_json::Value>,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "map": self.map,
            "markers": self.markers,
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }

    pub fn clear(&mut self) {
        self.map = None;
        self.markers.clear();
    }
}

impl MapRenderer for SceneRecorder {
    fn load_map(&mut self, config: &MapConfig) -> Result<()> {
        if self.map.is_some() {
            log::debug!("replacing previously loaded map");
        }
        self.map = Some(config.options());
        Ok(())
    }

    fn place_marker(&mut self, marker: MarkerDescriptor) -> Result<()> {
        self.markers.push(marker.options());
        Ok(())
    }
}

use crate::{
    core::geo::LatLng,
    layers::icon::IconDescriptor,
    ui::popup::PopupContent,
    Result,
};
use serde::{Deserialize, Serialize};

/// A point of interest ready to hand to the rendering engine.
///
/// Only [`create_marker`] validates the position; values built or
/// deserialized directly are taken as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub position: LatLng,
    pub icon: IconDescriptor,
    pub popup: Option<PopupContent>,
    pub tooltip: Option<String>,
}

impl MarkerDescriptor {
    pub fn with_popup(mut self, popup: PopupContent) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "icon": self.icon.options(),
            "popup": self.popup.as_ref().map(PopupContent::options),
            "tooltip": self.tooltip
        })
    }
}

/// Combines a coordinate, an icon and optional popup/tooltip content.
/// Fails with `MapError::InvalidCoordinate` for out-of-range positions.
pub fn create_marker(
    coordinate: LatLng,
    icon: IconDescriptor,
    popup: Option<PopupContent>,
    tooltip: Option<String>,
) -> Result<MarkerDescriptor> {
    let position = coordinate.validated()?;

    log::debug!(
        "marker at ({:.6}, {:.6}) popup {:?} tooltip {}",
        position.lat,
        position.lng,
        popup.as_ref().map(PopupContent::kind),
        tooltip.is_some()
    );

    Ok(MarkerDescriptor {
        position,
        icon,
        popup,
        tooltip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layers::icon::{create_icon, SymbolSet},
        ui::popup::{PopupBuilder, PopupKind},
        MapError,
    };

    fn pin() -> IconDescriptor {
        create_icon(SymbolSet::FontAwesome, "home", "white", "red", 0)
    }

    #[test]
    fn test_bare_marker() {
        let marker = create_marker(LatLng::new(-27.6, -48.5), pin(), None, None).unwrap();

        assert_eq!(marker.position(), LatLng::new(-27.6, -48.5));
        assert!(marker.popup.is_none());
        assert!(marker.tooltip.is_none());

        let options = marker.options();
        assert!(options["popup"].is_null());
        assert!(options["tooltip"].is_null());
        assert_eq!(options["icon"]["icon"], "home");
    }

    #[test]
    fn test_marker_with_content() {
        let popup = PopupBuilder::default().build_text_link("IFSC", "Campus", "https://ifsc.edu.br", None);
        let marker = create_marker(
            LatLng::new(-27.6, -48.5),
            pin(),
            Some(popup.clone()),
            Some("IFSC".to_string()),
        )
        .unwrap();

        assert_eq!(marker.popup.as_ref().map(PopupContent::kind), Some(PopupKind::TextLink));
        assert_eq!(marker.options()["tooltip"], "IFSC");
        assert_eq!(marker.options()["popup"]["html"], popup.html());
    }

    #[test]
    fn test_builder_style_setters() {
        let popup = PopupBuilder::default().build_text_link("T", "B", "http://x", None);
        let marker = create_marker(LatLng::new(1.0, 2.0), pin(), None, None)
            .unwrap()
            .with_popup(popup)
            .with_tooltip("hover");

        assert!(marker.popup.is_some());
        assert_eq!(marker.tooltip.as_deref(), Some("hover"));
    }

    #[test]
    fn test_invalid_position() {
        let err = create_marker(LatLng::new(0.0, 181.0), pin(), None, None).unwrap_err();
        assert!(matches!(err, MapError::InvalidCoordinate(_)));
    }
}

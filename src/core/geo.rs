use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator latitude limit
const MAX_LATITUDE: f64 = 85.0511287798;

/// Deepest zoom whose tile indices (up to 2^z - 1) still fit a `u32`
pub const MAX_TILE_ZOOM: u8 = 32;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Returns the coordinate unchanged if it is in range, otherwise
    /// `MapError::InvalidCoordinate`. NaN never passes.
    pub fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(MapError::InvalidCoordinate(format!(
                "({}, {}) is outside lat [-90, 90], lng [-180, 180]",
                self.lat, self.lng
            )))
        }
    }

    /// Clamps latitude to the Web Mercator range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// `[lat, lng]` pair, the order Leaflet expects
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates a tile coordinate from a LatLng and zoom level.
    /// `None` above [`MAX_TILE_ZOOM`], where indices no longer fit a `u32`.
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Option<Self> {
        if zoom > MAX_TILE_ZOOM {
            return None;
        }

        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let n = 2_f64.powi(zoom as i32);
        let max_index = n - 1.0;

        // lng = 180 lands exactly on the far edge; keep it in the last column
        let x = ((lat_lng.lng + 180.0) / 360.0 * n).floor().clamp(0.0, max_index) as u32;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n)
            .floor()
            .clamp(0.0, max_index) as u32;

        Some(Self::new(x, y, zoom))
    }

    /// Converts tile coordinate to LatLng (northwest corner)
    pub fn to_lat_lng(&self) -> LatLng {
        let n = 2_f64.powi(self.z as i32);
        let lng = self.x as f64 / n * 360.0 - 180.0;
        let lat_rad = (PI * (1.0 - 2.0 * self.y as f64 / n)).sinh().atan();

        LatLng::new(lat_rad.to_degrees(), lng)
    }

    /// Checks if the tile is valid for the given zoom level
    pub fn is_valid(&self) -> bool {
        if self.z > MAX_TILE_ZOOM {
            return false;
        }
        match 1_u64.checked_shl(self.z as u32) {
            Some(max_coord) => (self.x as u64) < max_coord && (self.y as u64) < max_coord,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(-27.5954, -48.548);
        assert_eq!(coord.lat, -27.5954);
        assert_eq!(coord.lng, -48.548);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_validated_rejects_out_of_range() {
        assert!(LatLng::new(90.0, 180.0).validated().is_ok());
        assert!(LatLng::new(-90.0, -180.0).validated().is_ok());

        for bad in [
            LatLng::new(90.01, 0.0),
            LatLng::new(0.0, -180.5),
            LatLng::new(f64::NAN, 0.0),
        ] {
            match bad.validated() {
                Err(MapError::InvalidCoordinate(_)) => {}
                other => panic!("expected InvalidCoordinate, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_tile_coord_conversion() {
        let lat_lng = LatLng::new(-27.5954, -48.548);
        let tile = TileCoord::from_lat_lng(&lat_lng, 10).unwrap();
        let back_to_lat_lng = tile.to_lat_lng();

        assert!(tile.is_valid());
        assert!((back_to_lat_lng.lat - lat_lng.lat).abs() < 1.0);
        assert!((back_to_lat_lng.lng - lat_lng.lng).abs() < 1.0);
    }

    #[test]
    fn test_tile_coord_edges_stay_in_range() {
        let tile = TileCoord::from_lat_lng(&LatLng::new(-90.0, 180.0), 3).unwrap();
        assert!(tile.is_valid());
        assert_eq!(tile, TileCoord::new(7, 7, 3));

        assert_eq!(
            TileCoord::from_lat_lng(&LatLng::new(10.0, 20.0), 0),
            Some(TileCoord::new(0, 0, 0))
        );
    }

    #[test]
    fn test_tile_coord_deep_zoom() {
        let deepest = TileCoord::from_lat_lng(&LatLng::new(0.0, 0.0), MAX_TILE_ZOOM).unwrap();
        assert_eq!(deepest, TileCoord::new(1 << 31, 1 << 31, 32));
        assert!(deepest.is_valid());

        let edge = TileCoord::from_lat_lng(&LatLng::new(-90.0, 180.0), MAX_TILE_ZOOM).unwrap();
        assert_eq!(edge, TileCoord::new(u32::MAX, u32::MAX, 32));

        assert_eq!(TileCoord::from_lat_lng(&LatLng::new(0.0, 0.0), 40), None);
        assert_eq!(TileCoord::from_lat_lng(&LatLng::new(0.0, 0.0), 64), None);
        assert_eq!(TileCoord::from_lat_lng(&LatLng::new(0.0, 0.0), u8::MAX), None);
    }

    #[test]
    fn test_is_valid_never_overflows() {
        assert!(!TileCoord::new(0, 0, 40).is_valid());
        assert!(!TileCoord::new(0, 0, 64).is_valid());
        assert!(!TileCoord::new(0, 0, u8::MAX).is_valid());
        assert!(TileCoord::new(u32::MAX, 0, 32).is_valid());
        assert!(!TileCoord::new(8, 0, 3).is_valid());
    }
}

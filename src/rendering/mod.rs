//! Hand-off point to the map-rendering engine
//!
//! The engine itself lives outside this crate. It receives a [`MapConfig`]
//! once and then any number of [`MarkerDescriptor`]s; after `place_marker`
//! the descriptor belongs to the engine.

pub mod scene;

pub use scene::SceneRecorder;

use crate::{core::map::MapConfig, layers::marker::MarkerDescriptor, Result};

pub trait MapRenderer {
    /// Open (or replace) the map canvas
    fn load_map(&mut self, config: &MapConfig) -> Result<()>;

    /// Place a marker on the map
    fn place_marker(&mut self, marker: MarkerDescriptor) -> Result<()>;

    fn place_markers(&mut self, markers: Vec<MarkerDescriptor>) -> Result<()> {
        for marker in markers {
            self.place_marker(marker)?;
        }
        Ok(())
    }
}

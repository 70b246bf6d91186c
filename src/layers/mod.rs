pub mod icon;
pub mod marker;

pub use icon::{create_icon, IconDescriptor, SymbolSet};
pub use marker::{create_marker, MarkerDescriptor};

use crate::{
    core::constants::DEFAULT_ICON_ROTATION,
    ui::style::{is_known_color, FONT_AWESOME_SYMBOLS, GLYPHICON_SYMBOLS},
};
use serde::{Deserialize, Serialize};

/// Icon font a marker symbol is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolSet {
    FontAwesome,
    Glyphicon,
}

impl SymbolSet {
    /// CSS class prefix used by the awesome-markers plugin
    pub fn prefix(&self) -> &'static str {
        match self {
            SymbolSet::FontAwesome => "fa",
            SymbolSet::Glyphicon => "glyphicon",
        }
    }

    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            SymbolSet::FontAwesome => &FONT_AWESOME_SYMBOLS,
            SymbolSet::Glyphicon => &GLYPHICON_SYMBOLS,
        }
    }

    pub fn is_known_symbol(&self, name: &str) -> bool {
        self.catalog().contains(&name)
    }
}

impl std::fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolSet::FontAwesome => write!(f, "font-awesome"),
            SymbolSet::Glyphicon => write!(f, "glyphicon"),
        }
    }
}

/// Styling request for a marker pin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub symbol_set: SymbolSet,
    pub symbol_name: String,
    pub symbol_color: String,
    pub background_color: String,
    pub rotation_degrees: i32,
}

impl IconDescriptor {
    /// Unrotated icon; no catalog checks
    pub fn new(
        symbol_set: SymbolSet,
        symbol_name: impl Into<String>,
        symbol_color: impl Into<String>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            symbol_set,
            symbol_name: symbol_name.into(),
            symbol_color: symbol_color.into(),
            background_color: background_color.into(),
            rotation_degrees: DEFAULT_ICON_ROTATION,
        }
    }

    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Options in the shape `L.AwesomeMarkers.icon` takes
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "prefix": self.symbol_set.prefix(),
            "icon": self.symbol_name,
            "iconColor": self.symbol_color,
            "markerColor": self.background_color,
            "extraClasses": format!("fa-rotate-{}", self.rotation_degrees),
        })
    }
}

/// Builds an icon descriptor. Names outside the bundled catalogs are kept
/// as given; they only produce a warning.
pub fn create_icon(
    symbol_set: SymbolSet,
    symbol_name: &str,
    symbol_color: &str,
    background_color: &str,
    rotation_degrees: i32,
) -> IconDescriptor {
    if !symbol_set.is_known_symbol(symbol_name) {
        log::warn!("'{}' is not a known {} symbol", symbol_name, symbol_set);
    }
    if !is_known_color(background_color) {
        log::warn!("'{}' is not a known marker color", background_color);
    }

    IconDescriptor::new(symbol_set, symbol_name, symbol_color, background_color)
        .with_rotation(rotation_degrees)
}

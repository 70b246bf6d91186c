//! Marker styling catalogs
//!
//! Names the awesome-markers plugin understands. They are reference data:
//! icons built with other values are still accepted and passed through.

/// Background colors available for marker pins
pub const ICON_COLORS: [&str; 19] = [
    "lightblue",
    "darkblue",
    "green",
    "darkred",
    "cadetblue",
    "gray",
    "darkpurple",
    "orange",
    "purple",
    "black",
    "blue",
    "lightgreen",
    "red",
    "white",
    "beige",
    "darkgreen",
    "pink",
    "lightgray",
    "lightred",
];

/// Common Font Awesome symbol names
pub const FONT_AWESOME_SYMBOLS: [&str; 23] = [
    "bicycle",
    "location-crosshairs",
    "map",
    "bug",
    "cloud",
    "remove",
    "question",
    "info",
    "exclamation",
    "plus",
    "minus",
    "asterisk",
    "euro",
    "map-marker",
    "home",
    "building",
    "arrow-up",
    "arrow-down",
    "arrow-left",
    "arrow-right",
    "traffic-light",
    "flag",
    "star",
];

/// Common Glyphicon symbol names
pub const GLYPHICON_SYMBOLS: [&str; 11] = [
    "ok-sign",
    "remove-sign",
    "question-sign",
    "info-sign",
    "exclamation-sign",
    "plus-sign",
    "minus-sign",
    "asterisk",
    "euro",
    "cloud",
    "heart",
];

pub fn is_known_color(color: &str) -> bool {
    ICON_COLORS.contains(&color)
}

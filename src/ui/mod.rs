pub mod markup;
pub mod popup;
pub mod style;

pub use markup::escape_html;

pub use popup::{PopupBuilder, PopupContent, PopupKind};

pub use style::{is_known_color, FONT_AWESOME_SYMBOLS, GLYPHICON_SYMBOLS, ICON_COLORS};

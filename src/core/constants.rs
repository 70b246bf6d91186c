//! Defaults shared by the map, icon and popup builders.
//! Keeping them in a single place makes it easier to tweak facade-wide values.

/// Highest zoom level the bundled tile providers serve.
pub const MAX_ZOOM: u8 = 18;

/// Subdomains rotated through for `{s}` in tile URL templates.
pub const DEFAULT_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// Visible label of a popup link when the caller gives none.
pub const DEFAULT_LINK_LABEL: &str = "Clique aqui";

/// Embedded popup images are drawn at this size (width, height) in pixels.
pub const DEFAULT_EMBEDDED_IMAGE_SIZE: (u32, u32) = (150, 150);

/// `alt` text of popup images.
pub const DEFAULT_IMAGE_ALT: &str = "Imagem Exemplo";

/// MIME type declared for embedded images unless sniffing is enabled.
pub const EMBEDDED_IMAGE_MIME: &str = "image/jpeg";

/// Rotation applied to marker icons when the caller gives none.
pub const DEFAULT_ICON_ROTATION: i32 = 0;

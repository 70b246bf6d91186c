//! Configuration for popup markup generation
//!
//! Popups are built from caller-supplied strings. This module decides how
//! those strings reach the markup (escaped or verbatim) and how embedded
//! images declare their MIME type. Presets cover the common cases and
//! resolve into a plain [`PopupConfig`], which can also be built by hand.

use crate::core::constants::{
    DEFAULT_EMBEDDED_IMAGE_SIZE, DEFAULT_IMAGE_ALT, DEFAULT_LINK_LABEL,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupProfile {
    /// Escape caller text, declare embedded images as JPEG.
    #[default]
    Safe,
    /// Insert caller text exactly as given. Only for trusted content.
    Verbatim,
    /// Escape caller text and declare the MIME type found in the file header.
    Sniffed,
    Custom(PopupConfig),
}

impl PopupProfile {
    pub fn resolve(&self) -> PopupConfig {
        match self {
            Self::Safe => PopupConfig::default(),
            Self::Verbatim => PopupConfig {
                escape: EscapeMode::Raw,
                ..PopupConfig::default()
            },
            Self::Sniffed => PopupConfig {
                mime: MimePolicy::Sniff,
                ..PopupConfig::default()
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

/// How caller text is inserted into popup markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeMode {
    /// `& < > " '` become entities, in text and in attribute values.
    #[default]
    Escape,
    /// Strings are copied into the markup untouched.
    Raw,
}

/// Which MIME type an embedded image's data URI declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MimePolicy {
    /// Always `image/jpeg`, whatever the bytes are.
    #[default]
    FixedJpeg,
    /// Detect from magic bytes, falling back to `image/jpeg`.
    Sniff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    pub escape: EscapeMode,
    pub mime: MimePolicy,
    pub image_alt: String,
    pub default_link_label: String,
    /// (width, height) of embedded images in pixels
    pub embedded_image_size: (u32, u32),
}

impl PopupConfig {
    pub fn is_escaping(&self) -> bool {
        self.escape == EscapeMode::Escape
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            escape: EscapeMode::Escape,
            mime: MimePolicy::FixedJpeg,
            image_alt: DEFAULT_IMAGE_ALT.to_string(),
            default_link_label: DEFAULT_LINK_LABEL.to_string(),
            embedded_image_size: DEFAULT_EMBEDDED_IMAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_profile_presets() {
        let safe = PopupProfile::Safe.resolve();
        let verbatim = PopupProfile::Verbatim.resolve();
        let sniffed = PopupProfile::Sniffed.resolve();

        assert_eq!(safe, PopupConfig::default());
        assert!(safe.is_escaping());
        assert_eq!(safe.mime, MimePolicy::FixedJpeg);

        assert!(!verbatim.is_escaping());
        assert_eq!(verbatim.mime, MimePolicy::FixedJpeg);

        assert!(sniffed.is_escaping());
        assert_eq!(sniffed.mime, MimePolicy::Sniff);
    }

    #[test]
    fn test_custom_profile_passes_through() {
        let custom = PopupConfig {
            image_alt: "Foto".to_string(),
            embedded_image_size: (64, 48),
            ..PopupConfig::default()
        };

        assert_eq!(PopupProfile::Custom(custom.clone()).resolve(), custom);
    }

    #[test]
    fn test_defaults() {
        let config = PopupConfig::default();
        assert_eq!(config.default_link_label, "Clique aqui");
        assert_eq!(config.image_alt, "Imagem Exemplo");
        assert_eq!(config.embedded_image_size, (150, 150));
    }
}

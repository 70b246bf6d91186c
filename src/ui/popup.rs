//! HTML content for marker popups
//!
//! Three layouts are produced, all ending in a link that opens in a new tab:
//!
//! ```text
//! text-link       <h3>title</h3> <p>body</p> <a>label</a>
//! embedded-image  <h3>title</h3> <img src="data:..."><br> <p>body</p> <a>label</a>
//! remote-image    <h3>title</h3> <img src="https://..."><br> <p>body</p> <a>label</a>
//! ```
//!
//! Caller text goes through [`PopupConfig::escape`]; the markup itself is
//! fixed, so every popup of a kind has the same element structure.

use crate::{
    core::{
        config::{MimePolicy, PopupConfig, PopupProfile},
        constants::EMBEDDED_IMAGE_MIME,
    },
    data::encoding::ImageEncoder,
    ui::markup,
    Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopupKind {
    TextLink,
    EmbeddedImage,
    RemoteImage,
}

impl std::fmt::Display for PopupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopupKind::TextLink => write!(f, "text-link"),
            PopupKind::EmbeddedImage => write!(f, "embedded-image"),
            PopupKind::RemoteImage => write!(f, "remote-image"),
        }
    }
}

/// Finished popup markup. The engine treats `html` as an opaque blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupContent {
    pub html: String,
    pub kind: PopupKind,
    /// Popup width cap in pixels; the engine default applies when `None`
    pub max_width: Option<u32>,
}

impl PopupContent {
    pub fn new(html: String, kind: PopupKind) -> Self {
        Self {
            html,
            kind,
            max_width: None,
        }
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn kind(&self) -> PopupKind {
        self.kind
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "html": self.html,
            "kind": self.kind.to_string(),
            "maxWidth": self.max_width,
        })
    }
}

/// Builds popup markup under one [`PopupConfig`]. Holds no other state, so
/// a single builder can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PopupBuilder {
    config: PopupConfig,
}

impl PopupBuilder {
    pub fn new(profile: PopupProfile) -> Self {
        Self::with_config(profile.resolve())
    }

    pub fn with_config(config: PopupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Heading, paragraph and link. `link_label` falls back to the
    /// configured default label ("Clique aqui").
    pub fn build_text_link(
        &self,
        title: &str,
        body_text: &str,
        link_url: &str,
        link_label: Option<&str>,
    ) -> PopupContent {
        let label = link_label.unwrap_or(&self.config.default_link_label);
        let html = format!(
            "{}\n{}\n{}",
            self.heading(title),
            self.paragraph(body_text),
            self.anchor(link_url, label)
        );

        log::debug!("built text-link popup '{}'", title);
        PopupContent::new(html, PopupKind::TextLink)
    }

    /// Reads `image_path` once and inlines it as a base64 data URI.
    ///
    /// Missing dimensions fall back to the configured embedded size
    /// (150×150 px by default). Read failures surface as
    /// `MapError::FileNotFound` or `MapError::FileUnreadable`.
    #[allow(clippy::too_many_arguments)]
    pub fn build_embedded_image(
        &self,
        title: &str,
        body_text: &str,
        image_path: impl AsRef<Path>,
        link_url: &str,
        link_label: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<PopupContent> {
        let image_path = image_path.as_ref();
        let bytes = ImageEncoder::read_file(image_path)?;

        let mime = match self.config.mime {
            MimePolicy::FixedJpeg => EMBEDDED_IMAGE_MIME,
            MimePolicy::Sniff => ImageEncoder::sniff_mime(&bytes).unwrap_or(EMBEDDED_IMAGE_MIME),
        };
        let src = format!("data:{};base64,{}", mime, ImageEncoder::encode_bytes(&bytes));

        let (default_width, default_height) = self.config.embedded_image_size;
        let html = self.image_layout(
            title,
            body_text,
            &src,
            link_url,
            link_label,
            Some(width.unwrap_or(default_width)),
            Some(height.unwrap_or(default_height)),
        );

        log::debug!(
            "built embedded-image popup '{}' from {} ({} bytes, {})",
            title,
            image_path.display(),
            bytes.len(),
            mime
        );
        Ok(PopupContent::new(html, PopupKind::EmbeddedImage))
    }

    /// References `image_url` directly. Only the dimensions given are
    /// written; with neither, the browser sizes the image.
    #[allow(clippy::too_many_arguments)]
    pub fn build_remote_image(
        &self,
        title: &str,
        body_text: &str,
        image_url: &str,
        link_url: &str,
        link_label: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> PopupContent {
        let src = markup::apply(self.config.escape, image_url);
        let html = self.image_layout(title, body_text, &src, link_url, link_label, width, height);

        log::debug!("built remote-image popup '{}' -> {}", title, image_url);
        PopupContent::new(html, PopupKind::RemoteImage)
    }

    /// `src` must already be safe to place in an attribute.
    #[allow(clippy::too_many_arguments)]
    fn image_layout(
        &self,
        title: &str,
        body_text: &str,
        src: &str,
        link_url: &str,
        link_label: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> String {
        format!(
            "{}\n<img src=\"{}\" alt=\"{}\"{}><br>\n{}\n{}",
            self.heading(title),
            src,
            self.text(&self.config.image_alt),
            size_style(width, height),
            self.paragraph(body_text),
            self.anchor(link_url, link_label)
        )
    }

    fn text<'a>(&self, input: &'a str) -> std::borrow::Cow<'a, str> {
        markup::apply(self.config.escape, input)
    }

    fn heading(&self, title: &str) -> String {
        format!("<h3>{}</h3>", self.text(title))
    }

    fn paragraph(&self, body_text: &str) -> String {
        format!("<p>{}</p>", self.text(body_text))
    }

    fn anchor(&self, href: &str, label: &str) -> String {
        format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            self.text(href),
            self.text(label)
        )
    }
}

/// ` style="width:Wpx; height:Hpx;"`, or nothing when no dimension is set
fn size_style(width: Option<u32>, height: Option<u32>) -> String {
    let rules: Vec<String> = [
        width.map(|w| format!("width:{}px;", w)),
        height.map(|h| format!("height:{}px;", h)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if rules.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", rules.join(" "))
    }
}

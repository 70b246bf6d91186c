use crate::core::{constants::DEFAULT_SUBDOMAINS, geo::TileCoord};

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Expands a Leaflet-style `{s}/{z}/{x}/{y}` URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplateSource {
    template: String,
    subdomains: Vec<String>,
}

impl UrlTemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            subdomains: DEFAULT_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_subdomains(mut self, subdomains: Vec<String>) -> Self {
        self.subdomains = subdomains;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl TileSource for UrlTemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        // An empty list leaves `{s}` with nothing to rotate through; drop it
        // together with its trailing dot.
        let url = if self.subdomains.is_empty() {
            self.template.replace("{s}.", "").replace("{s}", "")
        } else {
            let idx = ((coord.x as u64 + coord.y as u64) % self.subdomains.len() as u64) as usize;
            self.template.replace("{s}", &self.subdomains[idx])
        };

        url.replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

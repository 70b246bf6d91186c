//! Image bytes to base64 text, for inlining pictures into popup markup.
//!
//! Files are read whole into memory, which is fine for marker thumbnails
//! and not meant for large media.

use crate::{MapError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Stateless helper turning local image files into base64 text
pub struct ImageEncoder;

impl ImageEncoder {
    /// Reads the whole file. The handle is closed when this returns,
    /// whether the read succeeded or not.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let classify = |source: io::Error| match source.kind() {
            io::ErrorKind::NotFound => MapError::FileNotFound(path.to_path_buf()),
            _ => MapError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            },
        };

        let mut file = File::open(path).map_err(classify)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(classify)?;

        log::debug!("read image {} ({} bytes)", path.display(), bytes.len());
        Ok(bytes)
    }

    /// Standard (padded) base64 of `bytes`
    pub fn encode_bytes(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    /// Reads `path` and returns its content as base64 text
    pub fn encode_file(path: impl AsRef<Path>) -> Result<String> {
        let bytes = Self::read_file(path)?;
        Ok(Self::encode_bytes(&bytes))
    }

    /// MIME type recognised from the leading magic bytes, if any
    pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
        image::guess_format(bytes).ok().map(|format| format.to_mime_type())
    }
}

//! Interpreting the configured data location.

use std::path::PathBuf;

use url::Url;

use crate::error::{LoadError, LoadResult};

/// Where the payload lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// `http://` or `https://` URL.
    Http(Url),
    /// Local file, from a bare path or a `file://` URL.
    File(PathBuf),
}

impl DataSource {
    /// Parse a location string.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidSource` for empty input, unsupported URL
    /// schemes, or `file://` URLs that don't name a local path.
    pub fn parse(raw: &str) -> LoadResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LoadError::InvalidSource("empty data source".to_string()));
        }

        match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::File)
                    .map_err(|()| LoadError::InvalidSource(format!("not a local path: {raw}"))),
                // A single-letter "scheme" is a Windows drive letter.
                scheme if scheme.len() == 1 => Ok(Self::File(PathBuf::from(raw))),
                scheme => Err(LoadError::InvalidSource(format!("unsupported scheme '{scheme}'"))),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self::File(PathBuf::from(raw))),
            Err(e) => Err(LoadError::InvalidSource(format!("{raw}: {e}"))),
        }
    }
}

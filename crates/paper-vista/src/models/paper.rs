//! Paper record and payload envelope.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// A paper record as delivered by the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,

    /// Author names, as a display string.
    pub authors: String,

    /// Publication date in ISO format (YYYY-MM-DD or RFC 3339).
    pub published_at: String,

    /// Number of citations this paper has received.
    pub citation_count: u64,

    /// Publication venue.
    pub journal: String,

    /// Paper abstract.
    pub r#abstract: String,

    /// Payload fields beyond the ones above, kept so exports carry records as received.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Paper {
    /// Calendar year of `published_at`, or `None` if the date does not parse.
    ///
    /// Timestamps with an offset are converted to local time before the year
    /// is read; bare dates and naive timestamps are already local.
    ///
    /// A bare `YYYY-MM-DD` yields its own year, not the year of UTC midnight
    /// seen from the local zone, so dates west of UTC never shift back a year.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        parse_year(&self.published_at)
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Local).year());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.year());
        }
    }

    // Year-month and bare-year forms are still ISO 8601.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date.year());
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok();
    }

    None
}

/// The payload envelope: `{ "papers": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Paper records in payload order.
    pub papers: Vec<Paper>,
}

impl Dataset {
    /// Parse a payload, distinguishing malformed JSON from a wrong shape.
    ///
    /// # Errors
    ///
    /// `LoadError::Parse` if the bytes are not JSON, `LoadError::InvalidShape`
    /// if there is no `papers` array or a record is malformed.
    pub fn from_slice(bytes: &[u8]) -> LoadResult<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Validate an already-parsed JSON document.
    ///
    /// # Errors
    ///
    /// `LoadError::InvalidShape` if there is no `papers` array or a record is
    /// malformed.
    pub fn from_value(mut value: serde_json::Value) -> LoadResult<Self> {
        let Some(papers) = value.get_mut("papers").map(serde_json::Value::take) else {
            return Err(LoadError::invalid_shape("Expected an array under 'papers'."));
        };

        if !papers.is_array() {
            return Err(LoadError::invalid_shape("Expected an array under 'papers'."));
        }

        let papers: Vec<Paper> = serde_json::from_value(papers)
            .map_err(|e| LoadError::invalid_shape(format!("Malformed paper record: {e}")))?;

        Ok(Self { papers })
    }
}

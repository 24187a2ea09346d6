//! Enumeration types for command parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Export format for the filtered set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON array of paper records.
    #[default]
    Json,
    /// Comma-separated values.
    Csv,
    /// BibTeX format.
    Bibtex,
}

impl ExportFormat {
    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Bibtex => "bib",
        }
    }

    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Bibtex => "application/x-bibtex",
        }
    }

    /// Name of the downloadable artifact.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("filtered_data.{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "bib" | "bibtex" => Ok(Self::Bibtex),
            other => Err(format!("unknown export format '{other}' (expected json, csv or bibtex)")),
        }
    }
}

//! Export of the filtered set as a downloadable artifact.

use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportResult};
use crate::models::{ExportFormat, Paper};

/// A serialized export, ready to be written or offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name (e.g. `filtered_data.json`).
    pub file_name: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// Serialized content.
    pub bytes: Vec<u8>,
}

/// Serialize the whole filtered set (not just the current page).
///
/// # Errors
///
/// Returns `ExportError::Empty` if there is nothing to export.
pub fn export_papers(papers: &[Paper], format: ExportFormat) -> ExportResult<ExportArtifact> {
    if papers.is_empty() {
        return Err(ExportError::Empty);
    }

    let bytes = match format {
        ExportFormat::Json => serde_json::to_vec(papers)?,
        ExportFormat::Csv => format_csv(papers).into_bytes(),
        ExportFormat::Bibtex => format_bibtex(papers).into_bytes(),
    };

    Ok(ExportArtifact {
        file_name: format.file_name(),
        content_type: format.mime_type(),
        bytes,
    })
}

/// Write an artifact into `dir`, returning the full path.
///
/// # Errors
///
/// Returns `ExportError::Io` if the directory or file cannot be written.
pub async fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> ExportResult<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&artifact.file_name);
    tokio::fs::write(&path, &artifact.bytes).await?;

    tracing::info!(
        path = %path.display(),
        bytes = artifact.bytes.len(),
        content_type = artifact.content_type,
        "Exported filtered papers"
    );
    Ok(path)
}

/// Export and write in one step.
///
/// # Errors
///
/// `ExportError::Empty` when nothing matches; no file is created in that case.
pub async fn export_to_dir(
    papers: &[Paper],
    format: ExportFormat,
    dir: &Path,
) -> ExportResult<PathBuf> {
    let artifact = export_papers(papers, format)?;
    write_artifact(dir, &artifact).await
}

/// Format papers as CSV.
fn format_csv(papers: &[Paper]) -> String {
    let mut output = String::from("title,authors,published_at,citation_count,journal,abstract\n");

    for paper in papers {
        output.push_str(&format!(
            "{},{},{},{},{},{}\n",
            csv_escape(&paper.title),
            csv_escape(&paper.authors),
            csv_escape(&paper.published_at),
            paper.citation_count,
            csv_escape(&paper.journal),
            csv_escape(&paper.r#abstract),
        ));
    }

    output
}

/// Format papers as BibTeX.
fn format_bibtex(papers: &[Paper]) -> String {
    let mut output = String::new();

    for (i, paper) in papers.iter().enumerate() {
        let first_author = paper.authors.split(',').next().unwrap_or("").trim();
        let surname = first_author.split_whitespace().last().unwrap_or("Unknown");
        let year = paper.year();
        let key = format!(
            "{}{}_{}",
            surname.chars().filter(|c| c.is_alphanumeric()).collect::<String>(),
            year.map_or(String::new(), |y| y.to_string()),
            i + 1
        );

        output.push_str(&format!("@article{{{key},\n"));
        output.push_str(&format!("  title = {{{}}},\n", escape_bibtex(&paper.title)));
        output.push_str(&format!(
            "  author = {{{}}},\n",
            escape_bibtex(&paper.authors.replace(", ", " and "))
        ));

        if let Some(year) = year {
            output.push_str(&format!("  year = {{{year}}},\n"));
        }

        if !paper.journal.is_empty() {
            output.push_str(&format!("  journal = {{{}}},\n", escape_bibtex(&paper.journal)));
        }

        if !paper.r#abstract.is_empty() {
            output.push_str(&format!("  abstract = {{{}}},\n", escape_bibtex(&paper.r#abstract)));
        }

        output.push_str(&format!("  note = {{Cited by {}}},\n", paper.citation_count));
        output.push_str("}\n\n");
    }

    output
}

/// Escape a string for BibTeX output.
fn escape_bibtex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '{' | '}' | '&' | '%' | '$' | '#' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for CSV output, guarding against spreadsheet formulas.
fn csv_escape(s: &str) -> String {
    let formula = s.starts_with(['=', '+', '-', '@']);

    if s.contains([',', '"', '\n', '\r']) {
        let escaped = s.replace('"', "\"\"");
        if formula { format!("\"'{escaped}\"") } else { format!("\"{escaped}\"") }
    } else if formula {
        format!("'{s}")
    } else {
        s.to_string()
    }
}

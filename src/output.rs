//! Rendering crawl results to their on-disk encodings.
//!
//! Formatting here is a compatibility surface: downstream readers pick a
//! parser by file suffix and, for JSON, rely on the `url`/`title`/`content`
//! field names. Change the shapes only in lockstep with those readers.

use crate::crawler::CrawlRecord;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed array of record objects.
    Json,
    /// Flat text: URL/title lines, a separator rule, then the content.
    Txt,
    /// Markdown document with a generation header and one section per page.
    Markdown,
}

impl OutputFormat {
    /// File suffix downstream readers dispatch on.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Txt => "txt",
            Self::Markdown => "md",
        }
    }
}

const SEPARATOR_WIDTH: usize = 80;

/// Renders the record sequence into the requested encoding.
pub fn render(
    records: &[CrawlRecord],
    format: OutputFormat,
    generated_at: DateTime<Local>,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records).map_err(OutputError::Encode),
        OutputFormat::Txt => Ok(render_txt(records)),
        OutputFormat::Markdown => Ok(render_markdown(records, generated_at)),
    }
}

fn render_txt(records: &[CrawlRecord]) -> String {
    let rule = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "URL: {}", record.url);
        let _ = writeln!(out, "Title: {}", record.title);
        let _ = writeln!(out, "{rule}");
        out.push_str(&record.content);
        let _ = write!(out, "\n\n{rule}\n\n");
    }
    out
}

fn render_markdown(records: &[CrawlRecord], generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("# Scraped Documentation\n\n");
    let _ = writeln!(
        out,
        "**Scraped at:** {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "**Total pages:** {}\n", records.len());
    out.push_str("---\n\n");

    for (index, record) in records.iter().enumerate() {
        let _ = writeln!(out, "## {}. {}\n", index + 1, record.title);
        let _ = writeln!(out, "**URL:** {}\n", record.url);
        out.push_str(&record.content);
        out.push_str("\n\n---\n\n");
    }
    out
}

/// Output filename for a run: `scraped_data_<YYYYMMDD_HHMMSS>.<ext>`. The
/// embedded timestamp keeps successive runs from clobbering each other.
pub fn output_filename(format: OutputFormat, generated_at: DateTime<Local>) -> String {
    format!(
        "scraped_data_{}.{}",
        generated_at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Renders and writes the results into the current working directory,
/// returning the path written.
pub fn save_results(records: &[CrawlRecord], format: OutputFormat) -> Result<PathBuf, OutputError> {
    save_results_in(records, format, Path::new("."))
}

/// Directory-parameterized form of [`save_results`].
pub fn save_results_in(
    records: &[CrawlRecord],
    format: OutputFormat,
    dir: &Path,
) -> Result<PathBuf, OutputError> {
    let generated_at = Local::now();
    let rendered = render(records, format, generated_at)?;
    let path = dir.join(output_filename(format, generated_at));
    fs::write(&path, rendered).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Unrecoverable failure while producing the output artifact.
#[derive(Debug)]
pub enum OutputError {
    /// The record sequence could not be encoded.
    Encode(serde_json::Error),
    /// The output file could not be written.
    Io {
        /// Path of the attempted write.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode results: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl Error for OutputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_records() -> Vec<CrawlRecord> {
        let html = "<html><head><title>First</title></head>\
                    <body><main><p>alpha</p><p>beta</p></main></body></html>";
        let document = scraper::Html::parse_document(html);
        let url = url::Url::parse("https://ex.test/first").unwrap();
        let extracted = crate::extractor::Extractor::new().extract(&document, &url);
        let one = CrawlRecord {
            url: url.to_string(),
            title: extracted.title,
            content: extracted.text,
            length: 10,
            timestamp: Local::now(),
        };
        let two = CrawlRecord {
            url: "https://ex.test/second".to_string(),
            title: "Second".to_string(),
            content: "gamma".to_string(),
            length: 5,
            timestamp: Local::now(),
        };
        vec![one, two]
    }

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap()
    }

    #[test]
    fn json_round_trips_record_fields() {
        let records = sample_records();
        let rendered = render(&records, OutputFormat::Json, stamp()).unwrap();
        let parsed: Vec<CrawlRecord> = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed.len(), records.len());
        for (before, after) in records.iter().zip(&parsed) {
            assert_eq!(after.url, before.url);
            assert_eq!(after.title, before.title);
            assert_eq!(after.content, before.content);
            assert_eq!(after.length, before.length);
            // RFC 3339 with nanoseconds: the capture instant survives intact.
            assert_eq!(after.timestamp, before.timestamp);
        }
    }

    #[test]
    fn txt_layout_matches_the_reference_shape() {
        let records = sample_records();
        let rendered = render(&records, OutputFormat::Txt, stamp()).unwrap();
        let rule = "=".repeat(80);

        let expected = format!(
            "URL: https://ex.test/first\nTitle: First\n{rule}\nalpha\nbeta\n\n{rule}\n\n\
             URL: https://ex.test/second\nTitle: Second\n{rule}\ngamma\n\n{rule}\n\n"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn markdown_has_header_block_and_numbered_sections() {
        let records = sample_records();
        let rendered = render(&records, OutputFormat::Markdown, stamp()).unwrap();

        let expected = "# Scraped Documentation\n\n\
                        **Scraped at:** 2024-03-09 14:30:05\n\n\
                        **Total pages:** 2\n\n\
                        ---\n\n\
                        ## 1. First\n\n\
                        **URL:** https://ex.test/first\n\n\
                        alpha\nbeta\n\n---\n\n\
                        ## 2. Second\n\n\
                        **URL:** https://ex.test/second\n\n\
                        gamma\n\n---\n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn filenames_embed_the_generation_stamp() {
        assert_eq!(
            output_filename(OutputFormat::Json, stamp()),
            "scraped_data_20240309_143005.json"
        );
        assert_eq!(
            output_filename(OutputFormat::Txt, stamp()),
            "scraped_data_20240309_143005.txt"
        );
        assert_eq!(
            output_filename(OutputFormat::Markdown, stamp()),
            "scraped_data_20240309_143005.md"
        );
    }

    #[test]
    fn save_results_writes_one_file_into_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let records = sample_records();
        let path = save_results_in(&records, OutputFormat::Markdown, dir.path()).unwrap();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("md"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Scraped Documentation"));
        assert!(written.contains("**URL:** https://ex.test/second"));
    }
}

//! Browser file plumbing for CSV import and export.
//!
//! Import reads the picked file as a data URL for transmission; the server
//! parses the CSV fields. Export builds the blob and object URL a download
//! link hangs off; the view names the link `csv::EXPORT_FILE_NAME`.

use anyhow::{bail, Context, Result};
use gloo::file::futures::read_as_data_url;
use gloo::file::{Blob, File, ObjectUrl};

use crate::domain::csv::{self, CSV_MIME_TYPE};

/// True when the file name carries a real `.csv` extension,
/// case-insensitively. A bare `csv` or a dotfile like `.csv` does not
/// qualify.
pub fn is_csv_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, extension)) => !stem.is_empty() && extension.eq_ignore_ascii_case("csv"),
        None => false,
    }
}

/// Read a user-picked import file as a data URL. Rejects non-CSV
/// extensions locally, before reading a byte.
pub async fn read_import_file(file: &File) -> Result<String> {
    let name = file.name();
    if !is_csv_file(&name) {
        bail!("selected file {:?} is not a CSV file", name);
    }
    read_as_data_url(file)
        .await
        .with_context(|| format!("failed to read selected file {:?}", name))
}

/// Build the export download: a `text/csv` blob behind an object URL.
pub fn csv_download_url(lines: &[String]) -> ObjectUrl {
    let contents = csv::csv_file_contents(lines);
    let blob = Blob::new_with_options(contents.as_str(), Some(CSV_MIME_TYPE));
    ObjectUrl::from(blob)
}

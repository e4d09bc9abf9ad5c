use anyhow::{anyhow, bail, Context, Result};
use csv::ReaderBuilder;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};
use tracing::{debug, instrument, trace};
use zip::ZipArchive;

use super::raw_table::{clean_cell, RawTable};

/// Open `zip_path`, decompress its single file entry into memory and parse it
/// as a comma-separated table.
///
/// The archive must contain exactly one file; directory entries and
/// `__MACOSX/` resource forks are ignored.
#[instrument(level = "debug", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn read_zipped_csv<P: AsRef<Path>>(zip_path: P) -> Result<RawTable> {
    let zip_path = zip_path.as_ref();

    // 1) Open the ZIP
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {:?}", zip_path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP archive: {:?}", zip_path))?;

    // 2) Find the one data entry
    let mut data_entry: Option<(usize, String)> = None;
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to access ZIP entry #{} in {:?}", i, zip_path))?;
        let name = entry.name().to_string();
        if !entry.is_file() || name.starts_with("__MACOSX/") {
            trace!(entry = %name, "skipping");
            continue;
        }
        if let Some((_, first)) = &data_entry {
            bail!(
                "Multiple files found in ZIP archive {:?}: {} and {}",
                zip_path,
                first,
                name
            );
        }
        data_entry = Some((i, name));
    }
    let (index, name) =
        data_entry.ok_or_else(|| anyhow!("Zero files found in ZIP archive {:?}", zip_path))?;

    // 3) Decompress into memory
    let mut entry = archive.by_index(index)?;
    let mut buf = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {} into memory", name))?;
    drop(entry);
    debug!(entry = %name, bytes = buf.len(), "decompressed");

    parse_csv(&name, Cursor::new(buf))
}

/// Parse a headed CSV whose first column is an unnamed row index.
///
/// The index column is dropped, header names are trimmed and null tokens are
/// turned into empty cells. Lines shorter than the header are padded with
/// empty cells; longer lines are an error.
pub fn parse_csv<R: Read>(source: &str, reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = rdr
        .headers()
        .with_context(|| format!("CSV header error in {}", source))?
        .clone();
    if header.is_empty() {
        bail!("No columns to parse from {}", source);
    }
    let headers: Vec<String> = header.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {} at record {}", source, idx))?;
        if record.len() > header.len() {
            bail!(
                "CSV parse error in {} at record {}: expected {} fields, saw {}",
                source,
                idx,
                header.len(),
                record.len()
            );
        }
        let mut row: Vec<String> = record.iter().skip(1).map(clean_cell).collect();
        // short lines are padded with missing values
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    debug!(source, columns = headers.len(), rows = rows.len(), "parsed");
    Ok(RawTable { headers, rows })
}

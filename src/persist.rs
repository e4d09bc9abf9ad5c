// src/persist.rs
use anyhow::{anyhow, Context, Result};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::{fs, path::Path};
use tracing::{debug, instrument};

/// A row type written to one output CSV.
pub trait OutputRecord: Serialize {
    /// Column names, in the order the struct serializes its fields.
    const HEADER: &'static [&'static str];
}

/// Write `records` to `path` as a headed CSV, replacing whatever was there.
///
/// Parent directories are created. Rows go to a hidden sibling temp file
/// first which is then renamed over `path`; a failed write leaves neither the
/// temp file nor a changed `path` behind.
#[instrument(level = "info", skip(path, records), fields(path = %path.as_ref().display(), rows = records.len()))]
pub fn write_table<T: OutputRecord, P: AsRef<Path>>(path: P, records: &[T]) -> Result<()> {
    let path = path.as_ref();

    // 1) Make sure the directory exists
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating output directory {:?}", dir))?;

    // 2) Write to a hidden temp file beside the destination
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("output path {:?} has no file name", path))?
        .to_string_lossy();
    let prefix = format!(".{}.", file_name);
    let mut tmp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("creating temp file in {:?}", dir))?;
    let tmp_path = tmp.path().to_path_buf();
    {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(tmp.as_file_mut());
        wtr.write_record(T::HEADER)
            .with_context(|| format!("writing header to {:?}", tmp_path))?;
        for (idx, record) in records.iter().enumerate() {
            wtr.serialize(record)
                .with_context(|| format!("writing row {} to {:?}", idx, tmp_path))?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {:?}", tmp_path))?;
    }

    // 3) Rename over the destination
    tmp.persist(path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    debug!("written");
    Ok(())
}

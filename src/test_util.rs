// src/test_util.rs
use anyhow::Result;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// Header line of the campaign extracts, leading unnamed index column included.
pub const HEADER: &str = ",age,job,marital,education,credit_default,mortgage,month,day,\
contact_duration,number_contacts,previous_campaign_contacts,previous_outcome,\
cons_price_idx,euribor_three_months,campaign_outcome";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,campaign_clean=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// One data line with the given index, job, education, month and day; other
/// fields take fixed values and both outcomes are negative.
pub fn row(index: usize, job: &str, education: &str, month: &str, day: u32) -> String {
    full_row(index, job, education, month, day, "nonexistent", "no")
}

/// Like `row` but with explicit `previous_outcome` and `campaign_outcome`.
pub fn outcome_row(index: usize, month: &str, day: u32, previous: &str, outcome: &str) -> String {
    full_row(index, "admin.", "basic.4y", month, day, previous, outcome)
}

fn full_row(
    index: usize,
    job: &str,
    education: &str,
    month: &str,
    day: u32,
    previous: &str,
    outcome: &str,
) -> String {
    format!(
        "{index},{age},{job},married,{education},no,yes,{month},{day},261,1,0,{previous},93.994,4.857,{outcome}",
        age = 30 + index,
    )
}

pub fn csv_text(rows: &[String]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for r in rows {
        text.push_str(r);
        text.push('\n');
    }
    text
}

/// Build an in-memory ZIP holding the given `(entry name, contents)` pairs.
pub fn zip_bytes(entries: &[(&str, &str)]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, content) in entries {
            zip.start_file(*name, options)?;
            zip.write_all(content.as_bytes())?;
        }
        zip.finish()?;
    }
    Ok(buf)
}

/// Write `<dir>/<name>` as a single-entry ZIP of `content`.
pub fn write_zip(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let entry = name.trim_end_matches(".zip");
    let path = dir.join(name);
    fs::write(&path, zip_bytes(&[(entry, content)])?)?;
    Ok(path)
}

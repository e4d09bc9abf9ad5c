use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

/// Year attached to every contact date; the extracts only carry day and month.
pub const CONTACT_YEAR: i32 = 2022;

/// `"jan"` → 1 … `"dec"` → 12.
pub fn month_number(abbrev: &str) -> Option<u32> {
    let m = match abbrev {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(m)
}

/// Combine a raw `day` and `month` with `CONTACT_YEAR`.
pub fn contact_date(day: &str, month: &str) -> Result<NaiveDate> {
    let m = month_number(month).ok_or_else(|| anyhow!("unrecognized month {:?}", month))?;
    let d: u32 = day
        .trim()
        .parse()
        .with_context(|| format!("invalid day {:?}", day))?;
    NaiveDate::from_ymd_opt(CONTACT_YEAR, m, d)
        .ok_or_else(|| anyhow!("day {} is out of range for month {:?}", d, month))
}

/// `contact_date` rendered as `YYYY-MM-DD`.
pub fn format_contact_date(day: &str, month: &str) -> Result<String> {
    Ok(contact_date(day, month)?.format("%Y-%m-%d").to_string())
}

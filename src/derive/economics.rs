use anyhow::Result;
use serde::Serialize;

use crate::load::raw_table::{cell, RawTable};
use crate::persist::OutputRecord;

/// One row of `economics.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EconomicsRecord {
    pub client_id: usize,
    pub cons_price_idx: String,
    pub euribor_three_months: String,
}

impl OutputRecord for EconomicsRecord {
    const HEADER: &'static [&'static str] = &["client_id", "cons_price_idx", "euribor_three_months"];
}

pub fn derive_economics(raw: &RawTable) -> Result<Vec<EconomicsRecord>> {
    let cons_price_idx = raw.column("cons_price_idx")?;
    let euribor_three_months = raw.column("euribor_three_months")?;

    Ok(raw
        .rows
        .iter()
        .enumerate()
        .map(|(client_id, row)| EconomicsRecord {
            client_id,
            cons_price_idx: cell(row, cons_price_idx).to_string(),
            euribor_three_months: cell(row, euribor_three_months).to_string(),
        })
        .collect())
}

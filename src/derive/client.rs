use anyhow::Result;
use serde::Serialize;

use super::recode::{clean_education, clean_job, flag};
use crate::load::raw_table::{cell, RawTable};
use crate::persist::OutputRecord;

/// One row of `client.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub client_id: usize,
    pub age: String,
    pub job: String,
    pub marital: String,
    pub education: Option<String>,
    pub credit_default: u8,
    pub mortgage: u8,
}

impl OutputRecord for ClientRecord {
    const HEADER: &'static [&'static str] = &[
        "client_id",
        "age",
        "job",
        "marital",
        "education",
        "credit_default",
        "mortgage",
    ];
}

pub fn derive_clients(raw: &RawTable) -> Result<Vec<ClientRecord>> {
    let age = raw.column("age")?;
    let job = raw.column("job")?;
    let marital = raw.column("marital")?;
    let education = raw.column("education")?;
    let credit_default = raw.column("credit_default")?;
    let mortgage = raw.column("mortgage")?;

    Ok(raw
        .rows
        .iter()
        .enumerate()
        .map(|(client_id, row)| ClientRecord {
            client_id,
            age: cell(row, age).to_string(),
            job: clean_job(cell(row, job)),
            marital: cell(row, marital).to_string(),
            education: clean_education(cell(row, education)),
            credit_default: flag(cell(row, credit_default), "yes"),
            mortgage: flag(cell(row, mortgage), "yes"),
        })
        .collect())
}

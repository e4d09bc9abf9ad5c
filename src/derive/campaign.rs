use anyhow::{Context, Result};
use serde::Serialize;

use super::date_parser::format_contact_date;
use super::recode::flag;
use crate::load::raw_table::{cell, RawTable};
use crate::persist::OutputRecord;

/// One row of `campaign.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRecord {
    pub client_id: usize,
    pub number_contacts: String,
    pub contact_duration: String,
    pub previous_campaign_contacts: String,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    pub last_contact_date: String,
}

impl OutputRecord for CampaignRecord {
    const HEADER: &'static [&'static str] = &[
        "client_id",
        "number_contacts",
        "contact_duration",
        "previous_campaign_contacts",
        "previous_outcome",
        "campaign_outcome",
        "last_contact_date",
    ];
}

/// Fails on the first row whose day/month do not form a 2022 calendar date.
pub fn derive_campaigns(raw: &RawTable) -> Result<Vec<CampaignRecord>> {
    let number_contacts = raw.column("number_contacts")?;
    let contact_duration = raw.column("contact_duration")?;
    let previous_campaign_contacts = raw.column("previous_campaign_contacts")?;
    let previous_outcome = raw.column("previous_outcome")?;
    let campaign_outcome = raw.column("campaign_outcome")?;
    let day = raw.column("day")?;
    let month = raw.column("month")?;

    raw.rows
        .iter()
        .enumerate()
        .map(|(client_id, row)| -> Result<CampaignRecord> {
            let last_contact_date = format_contact_date(cell(row, day), cell(row, month))
                .with_context(|| {
                    format!("building last_contact_date for client_id {}", client_id)
                })?;
            Ok(CampaignRecord {
                client_id,
                number_contacts: cell(row, number_contacts).to_string(),
                contact_duration: cell(row, contact_duration).to_string(),
                previous_campaign_contacts: cell(row, previous_campaign_contacts).to_string(),
                previous_outcome: flag(cell(row, previous_outcome), "success"),
                campaign_outcome: flag(cell(row, campaign_outcome), "yes"),
                last_contact_date,
            })
        })
        .collect()
}

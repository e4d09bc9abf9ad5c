// src/derive/mod.rs
pub mod campaign;
pub mod client;
pub mod date_parser;
pub mod economics;
pub mod recode;

pub use campaign::{derive_campaigns, CampaignRecord};
pub use client::{derive_clients, ClientRecord};
pub use economics::{derive_economics, EconomicsRecord};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::load::RawTable;

/// The three normalized tables, row `i` of each describing `client_id == i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTables {
    pub clients: Vec<ClientRecord>,
    pub campaigns: Vec<CampaignRecord>,
    pub economics: Vec<EconomicsRecord>,
}

impl DerivedTables {
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// Build every output table from `raw`; nothing is returned unless all succeed.
#[instrument(level = "info", skip(raw), fields(rows = raw.len()))]
pub fn derive_all(raw: &RawTable) -> Result<DerivedTables> {
    let clients = derive_clients(raw).context("deriving client table")?;
    let campaigns = derive_campaigns(raw).context("deriving campaign table")?;
    let economics = derive_economics(raw).context("deriving economics table")?;
    debug!(
        clients = clients.len(),
        campaigns = campaigns.len(),
        economics = economics.len(),
        "derived"
    );
    Ok(DerivedTables {
        clients,
        campaigns,
        economics,
    })
}

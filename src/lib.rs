pub mod config;
pub mod derive;
pub mod load;
pub mod persist;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::Config;
pub use pipeline::{clean_campaign_data, RunSummary};

use anyhow::Result;
use campaign_clean::{clean_campaign_data, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) split the extracts ───────────────────────────────────────
    let config = Config::default();
    let summary = clean_campaign_data(&config)?;
    info!(
        files = summary.input_files.len(),
        rows = summary.rows,
        "all done"
    );
    Ok(())
}

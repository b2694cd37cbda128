use anyhow::Result;
use capscraper::{
    cli::Args,
    export,
    fetch::pages::{HttpCapSource, USER_AGENT},
    pipeline::{collect_years, Pacer},
    process::clean::clean_tables,
};
use clap::Parser;
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) configuration ────────────────────────────────────────────
    let config = Args::parse().into_config()?;
    info!(
        "seasons {}-{} → {}",
        config.years.start(),
        config.years.end(),
        config.out.display()
    );

    // ─── 3) one shared client, one request at a time ─────────────────
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let source = HttpCapSource::new(client, config.base.clone());
    let pacer = Pacer::new(config.delay);

    // ─── 4) fetch + extract, one season per iteration ────────────────
    let tables = collect_years(&source, config.years.clone(), &pacer).await;
    info!(
        "{} of {} seasons produced a table",
        tables.len(),
        config.years.clone().count()
    );

    // ─── 5) clean + export ───────────────────────────────────────────
    let records = clean_tables(&tables)?;
    export::write_csv(&config.out, &records)?;
    export::report(&export::summarize(&records), &config.out);

    info!("all done");
    Ok(())
}

use config::Config;
use profile::ProfileContext;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod profile;
mod source;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env file is fine, configuration can come from elsewhere
        if !e.not_found() {
            return Err(e.into());
        }
    }
    setup_tracing_subscriber();

    info!("Loading configuration");
    let config = Config::load(std::env::args().nth(1)).await?;

    info!("Loading match records from {}", config.data_source);
    let source = source::from_location(&config.data_source);
    let context = ProfileContext::load(source.as_ref(), &config.table).await;
    if !context.is_ready() {
        warn!("Match data is unavailable, every player lookup will fail");
    }

    info!("Reading player ids from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let player_id = line.trim();
        if player_id.is_empty() {
            continue;
        }
        println!("{}", view::respond(&context, player_id, config.output)?);
    }

    Ok(())
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}

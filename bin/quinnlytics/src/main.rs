use anyhow::Context as _;
use config::Config;
use ddragon::DataDragon;
use quinnlytics_analytics::Report;
use quinnlytics_db::DbHandler;
use quinnlytics_ingest::catalog::load_catalog;
use quinnlytics_ingest::normalize::short_version;
use quinnlytics_ingest::{prepare_reference_data, Ingestor};
use riot_api::RiotClient;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod ddragon;
mod report;
mod riot_api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing_subscriber();

    info!("Loading configuration");
    let config = Config::load(std::env::args().nth(1)).await?;

    info!("Setting up DB client");
    let db_handler = DbHandler::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    info!("Setting up Riot API client");
    let riot_client = RiotClient::new(config.rgapi_key.clone(), config.region);
    let data_dragon = DataDragon::new();

    let puuid = riot_client
        .get_puuid(&config.game_name, &config.tag_line)
        .await
        .context("Failed to look up tracked player")?;
    let match_ids = riot_client
        .get_match_ids(&puuid, config.match_count)
        .await
        .context("Failed to fetch match IDs")?;

    let reference = prepare_reference_data(&db_handler, &data_dragon, &config.items)
        .await
        .context("Failed to read stored game version")?;
    let catalog = load_catalog(&db_handler)
        .await
        .context("Failed to load item catalog")?;

    info!("Ingesting {} matches", match_ids.len());
    let ingestor = Ingestor::new(&db_handler, &riot_client, puuid, &reference.runes, &catalog);
    ingestor.ingest_all(&match_ids).await;

    let Some(version) = reference.version else {
        error!("No game version available, skipping report");
        return Ok(());
    };
    let game_version = short_version(&version);
    let matches = db_handler
        .get_matches_by_version(&game_version)
        .await
        .context("Failed to load matches")?;
    let report = Report::from_matches(game_version, &matches);
    print!("{}", report::render(&report));

    Ok(())
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .pretty()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_thread_ids(false)
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}

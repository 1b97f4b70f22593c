use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yaps_analyzer::{
    app::{load_logo, App},
    cli,
    ScoreFetcher,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yaps_analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli::get_args().into_config()?;
    info!(
        endpoint = %config.fetcher.endpoint,
        timeout_secs = config.fetcher.timeout.as_secs(),
        retries = config.fetcher.retries,
        "starting yaps influence analyzer"
    );

    let fetcher = Arc::new(ScoreFetcher::new(config.fetcher)?);
    let logo = load_logo(&config.logo);

    App::new(fetcher, logo).run()
}

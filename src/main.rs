use course_catalog::{Config, State, StateTrait};
use migration::{Migrator, MigratorTrait};
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();

    if let Ok(path) = dotenv {
        info!("loaded environment from {}", path.display());
    }

    if let Err(err) = run().await {
        error!("{err:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let state = State::new(&config).await?;

    if config.auto_migrate {
        info!("applying pending migrations");
        Migrator::up(state.db(), None).await?;
    }

    let listener = TcpListener::bind(config.listen_addr).await?;

    course_catalog::run(listener, state).await
}

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod models;
mod repository;
mod state;
mod utils;

use crate::{middlewares::middlewares, utils::SignalHandler};
pub use config::Config;
use error::Error;
pub use state::*;
use tokio::net::TcpListener;

/// Serves the catalog on `listener` until the process receives a shutdown
/// signal.
pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    let routes = handlers::routes::<S>();
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(SignalHandler::new())
        .await?;

    Ok(())
}

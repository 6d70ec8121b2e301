use std::sync::Arc;

use common::herald_err;
use common::proxy::{BUS_NAME, OBJECT_PATH};
use common::utils::errors::{HeraldError, HeraldErrorKind};
use tracing_subscriber::EnvFilter;

use crate::config::load_config;
use crate::notify::DaemonHandle;
use crate::sink::LogSink;

mod config;
mod notify;
mod registry;
mod sink;

#[tokio::main]
async fn main() -> Result<(), HeraldError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let capabilities = config.capability_set()?;
    tracing::info!("{capabilities}");

    let handle = DaemonHandle::new(config.identity(), capabilities, Arc::new(LogSink));

    let _conn = zbus::connection::Builder::session()
        .map_err(|e| herald_err!(HeraldErrorKind::DBusConnect, e.to_string()))?
        .name(BUS_NAME)
        .map_err(|e| herald_err!(HeraldErrorKind::NameAcquire, e.to_string()))?
        .serve_at(OBJECT_PATH, handle)
        .map_err(|e| herald_err!(HeraldErrorKind::Serve, e.to_string()))?
        .build()
        .await
        .map_err(|e| herald_err!(HeraldErrorKind::NameAcquire, e.to_string()))?;

    tracing::info!("serving {BUS_NAME} at {OBJECT_PATH} on the session bus");

    std::future::pending::<()>().await;
    Ok(())
}

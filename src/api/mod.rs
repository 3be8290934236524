//! Local HTTP API in front of the storage layer.
//!
//! The server binds loopback only, on the first free port of a small range,
//! and hands back its base URL once the listener is bound.

mod error;
mod handlers;
pub mod routes;
pub mod sanitize;
mod state;
mod static_assets;


use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ApiError, HandlerError};
pub use state::AppState;

use crate::db::Database;

/// Environment variable overriding the asset directory.
pub const ASSETS_DIR_ENV: &str = "NEOFOCUS_ASSETS_DIR";

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Candidate ports, tried in order
    pub ports: RangeInclusive<u16>,
    /// Directory holding the built front end
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ports: 8000..=8009,
            assets_dir: PathBuf::from("out"),
        }
    }
}

impl Config {
    /// Defaults, with the asset directory taken from `NEOFOCUS_ASSETS_DIR` when set.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os(ASSETS_DIR_ENV) {
            config.assets_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn with_ports(mut self, ports: RangeInclusive<u16>) -> Self {
        self.ports = ports;
        self
    }

    pub fn with_assets_dir(mut self, assets_dir: PathBuf) -> Self {
        self.assets_dir = assets_dir;
        self
    }
}

/// A running server.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: CancellationToken,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// URL the front end should load, e.g. `http://127.0.0.1:8000`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(self) -> Result<(), ApiError> {
        self.shutdown.cancel();
        self.task.await.map_err(std::io::Error::other)??;
        Ok(())
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neofocus=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Bind the first free loopback port in `ports`.
///
/// Ports are tried in ascending order; a failed bind moves on to the next
/// candidate. Nothing stays bound when the whole range is taken.
pub async fn bind_in_range(ports: RangeInclusive<u16>) -> Result<TcpListener, ApiError> {
    for port in ports.clone() {
        match TcpListener::bind((Ipv4Addr::LOCALHOST, port)).await {
            Ok(listener) => return Ok(listener),
            Err(e) => debug!(port, error = %e, "port unavailable"),
        }
    }

    Err(ApiError::PortsExhausted {
        start: *ports.start(),
        end: *ports.end(),
    })
}

/// Start serving `db` in the background and return once the listener is bound.
pub async fn start_server<D: Database>(config: Config, db: D) -> Result<ServerHandle, ApiError> {
    if !config.assets_dir.is_dir() {
        return Err(ApiError::AssetsNotFound {
            path: config.assets_dir,
        });
    }

    let listener = bind_in_range(config.ports.clone()).await?;
    let addr = listener.local_addr()?;

    let app = routes::create_router(AppState::new(db), &config.assets_dir)
        .layer(TraceLayer::new_for_http());

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone().cancelled_owned();
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await
    });

    info!("API server listening on http://{}", addr);
    Ok(ServerHandle {
        addr,
        shutdown,
        task,
    })
}

/// Run the API server until Ctrl-C.
pub async fn run<D: Database>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing();

    let server = start_server(config, db).await?;
    println!("{}", server.base_url());

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    server.shutdown().await
}

mod args;
mod config;
mod dirs;

use std::io;
use std::net::SocketAddr;

use app_api::AppContext;
use cost_app::{AppConfig, AppState};
use http_api::HttpState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = args::parse_args(std::env::args().skip(1)).map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;
    if args.help {
        args::print_help();
        return Ok(());
    }

    let config_dir = dirs::config_dir().map_err(io::Error::other)?;
    let config = config::load_or_create(&config_dir).map_err(io::Error::other)?;
    if config.created {
        tracing::info!(
            path = %config.file.display(),
            port = config.config.port,
            "created default config"
        );
    }

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => dirs::data_dir().map_err(io::Error::other)?,
    };
    tracing::info!(path = %data_dir.display(), "using data dir");

    let mut app_config = AppConfig::new(data_dir.clone());
    app_config.db_name = config.config.db_name.clone();
    app_config.schema_version = config.config.schema_version;
    app_config.rates_timeout_ms = config.config.rates_timeout_ms;

    let app_state = AppState::new(app_config).map_err(io::Error::other)?;
    if let Err(err) = app_state.initialize().await {
        tracing::error!(error = %err, "failed to open cost store");
        return Err(io::Error::other(format!("failed to open cost store: {}", err)).into());
    }

    let context = AppContext {
        app_state,
        app_data_dir: data_dir,
    };
    let router = http_api::router(HttpState::new(context));

    let port = args.port.unwrap_or(config.config.port);
    let (listener, actual_port, used_fallback) = bind_port(port).await?;
    if used_fallback {
        tracing::warn!(
            configured = port,
            actual = actual_port,
            "configured port was unavailable"
        );
    }

    tracing::info!(url = %format!("http://127.0.0.1:{actual_port}"), "cost manager is running");
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    let ephemeral = SocketAddr::from(([127, 0, 0, 1], 0));
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(ephemeral).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    match tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port))).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener = tokio::net::TcpListener::bind(ephemeral).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

// Application server configuration and setup

use std::{net::SocketAddr, time::Duration};
use axum::{
    Router,
    middleware::from_fn,
    error_handling::HandleErrorLayer,
    serve,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::{error, info};

use crate::api::fallback::fallback_handler;
use crate::api::ping::ping_routes;
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::middlewares::{
    method_guard::method_guard,
    request_logger::{request_logger, start_time_middleware},
};
use crate::utils::error_handler::handle_global_error;

/// Creates the router with the ping route, the 404 fallback and all middleware layers
pub fn create_app(state: AppState) -> Router {
    let routes: Router<AppState> = Router::new()
        .merge(ping_routes())
        .fallback(fallback_handler);

    with_middleware(routes, &state.environment).with_state(state)
}

/// Wraps any router in the logging, method and timeout layers the server uses
pub fn with_middleware(
    router: Router<AppState>,
    env: &EnvironmentVariables,
) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            // Outermost: every response, 501s included, gets timed and logged
            .layer(from_fn(start_time_middleware))
            .layer(from_fn(request_logger))
            .layer(from_fn(method_guard))
            .layer(HandleErrorLayer::new(handle_global_error))
            .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
    )
}

/// Takes the socket passed in by systemfd/listenfd, or binds HOST:PORT
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            info!("Using inherited listener");
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install TERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}

/// Line printed to stdout once the listener is bound
pub fn startup_message(port: u16) -> String {
    format!("Serving on port {port}")
}

/// Announces the port, then serves until a shutdown signal arrives
pub async fn run(state: AppState) -> Result<()> {
    let listener: TcpListener = setup_listener(&state.environment).await?;
    let addr: SocketAddr = listener.local_addr()?;

    println!("{}", startup_message(addr.port()));
    info!(
        environment = %state.environment.environment,
        "Server listening on: {addr}"
    );

    serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server loop failed")?;

    info!("Server stopped");
    Ok(())
}

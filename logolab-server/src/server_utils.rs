use anyhow::Result;
use logolab_types::GatewayConfig;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

pub async fn create_listener(config: &GatewayConfig) -> Result<tokio::net::TcpListener> {
    let bind_addr = config.get_bind_address();
    let ip: std::net::IpAddr = bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", bind_addr, e))?;
    let addr = SocketAddr::new(ip, config.port);

    Ok(tokio::net::TcpListener::bind(addr).await?)
}

#[allow(
    clippy::expect_used,
    reason = "Signal handlers are critical infrastructure, panic is appropriate on failure"
)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("🛑 Received Ctrl+C, initiating graceful shutdown..."),
        () = terminate => info!("🛑 Received SIGTERM, initiating graceful shutdown..."),
    }

    info!("⏳ Draining in-flight requests...");
}

use tokio::net::TcpListener;
use tokio::signal;

use crate::app::{self, OPENAPI_PATH, SWAGGER_UI_PATH};
use crate::config::Config;
use crate::errors::ServerError;

pub async fn run(config: Config) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, &config).await
}

pub async fn serve(listener: TcpListener, config: &Config) -> Result<(), ServerError> {
    let local = listener.local_addr().map_err(ServerError::LocalAddr)?;
    tracing::info!("Server running on http://{}", local);
    if config.docs_enabled() {
        tracing::info!("Swagger UI: http://{}{}", local, SWAGGER_UI_PATH);
        tracing::debug!("OpenAPI document: http://{}{}", local, OPENAPI_PATH);
    }

    axum::serve(listener, app::router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

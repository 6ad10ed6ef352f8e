mod router;
pub mod server;
pub mod tracing;

use crate::config;
use crate::error::ServerError;
use crate::sink::{LogSink, TracingSink};
use std::sync::Arc;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), ServerError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings =
        config::get_configuration().map_err(|e| ServerError::Config(e.to_string()))?;
    ::tracing::info!("Loaded settings");

    let sink: Arc<dyn LogSink> = Arc::new(TracingSink);
    let app = router::app_router(sink);

    server::serve(app, settings.http_port).await
}

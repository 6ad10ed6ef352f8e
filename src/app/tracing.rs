use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber.
///
/// Output is JSON unless `RUST_LOG_FORMAT` is set to something other than
/// `json`; `RUST_LOG` narrows the INFO default filter as usual.
pub fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

    let plain = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v != "json");

    if plain {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .init();
    }
}

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::engine::Engine;

mod commands;
mod engine;

fn main() {
    let _guard = init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "engine started");

    let mut engine = Engine::new();
    let mut buffer = String::new();

    loop {
        buffer.clear();

        match std::io::stdin().read_line(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        tracing::debug!(command = buffer.trim_end(), "interface -> engine");

        if !commands::execute(&mut engine, &buffer) {
            break;
        }
    }
}

/// Appends timestamped diagnostics to `felis.log` next to the binary; the
/// guard flushes the writer on shutdown. `RUST_LOG` overrides the level.
fn init_logging() -> WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "felis.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

use std::sync::Arc;

use hello_server::config::{AppState, Config};
use hello_server::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config path as the first argument, `config.toml` otherwise
    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(AppState::new(cfg));
    logger::log_server_start(&addr, &state.config);
    server::start_signal_handler(Arc::clone(&state.shutdown));

    // Connections are served with spawn_local; the set must outlive the drain
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            server::serve(listener, Arc::clone(&state)).await;
            server::drain(&state).await;
        })
        .await;
    Ok(())
}

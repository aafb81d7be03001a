use static_responder::{logging, ServerConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = ServerConfig::default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .map_err(static_responder::ServerError::from);
    let result = runtime.and_then(|runtime| runtime.block_on(static_responder::run(config)));

    match result {
        Ok(never) => match never {},
        Err(err) => {
            tracing::error!(message = "Server failed to start", error = %err);
            Err(err.into())
        }
    }
}

use roster_server::{Config, Server, ServerState, init_logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    init_logger();

    let config = Config::from_env();
    tracing::info!("Starting roster-server (env: {})", config.environment);

    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}

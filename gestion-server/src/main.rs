use gestion_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment setup (dotenv, logging)
    setup_environment();

    print_banner();

    tracing::info!("Gestion server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state — schema failure aborts startup here
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

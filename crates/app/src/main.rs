mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "giftbook={level},server={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    // The ledger starts empty on every boot: there is no durable backing
    // store, and losing the records on restart is accepted behavior.
    let ledger = ledger::Ledger::new();

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let minimum_guarantee = settings.server.minimum_guarantee.unwrap_or(0);
    server::run_with_listener(ledger, minimum_guarantee, listener).await?;

    Ok(())
}

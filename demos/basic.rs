//! Basic usage example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Required: loaded from DATABASE_URL, fails when empty or unset
    #[env(var = "DATABASE_URL", required)]
    pub database_url: String,

    // Falls back to the literal when SERVER_PORT is empty or unset
    #[env(var = "SERVER_PORT", default = "8080")]
    pub server_port: i64,

    // Keeps its current value when MAX_CONNECTIONS is empty or unset
    #[env(var = "MAX_CONNECTIONS")]
    pub max_connections: i64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", "32");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Port: {}", config.server_port);
    println!("  Max Connections: {}", config.max_connections);

    Ok(())
}

//! Example demonstrating nested records and error paths

use envbind::{BindError, EnvBind};

#[derive(Debug, Default, EnvBind)]
struct Database {
    #[env(var = "DB_HOST", required)]
    pub host: String,

    #[env(var = "DB_PORT", default = "5432")]
    pub port: i64,
}

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env(var = "PORT", default = "8080")]
    pub port: i64,

    // No `var` directive: bound field by field
    pub db: Database,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    std::env::remove_var("DB_HOST");

    let mut config = Config::default();
    if let Err(err) = envbind::bind(&mut config) {
        println!("First attempt failed: {err}");
        println!("  Field path: {}", err.field_path().join("."));
        if let BindError::RequiredValueMissing { name } = err.root_cause() {
            println!("  Missing variable: {name}");
        }
    }

    std::env::set_var("DB_HOST", "db.internal");
    envbind::bind(&mut config)?;

    println!("Configuration loaded:");
    println!("  Port: {}", config.port);
    println!("  DB: {}:{}", config.db.host, config.db.port);

    Ok(())
}

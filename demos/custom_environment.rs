//! Example binding from an explicit environment snapshot

use std::collections::HashMap;

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env(var = "KAFKA_URL", required)]
    pub kafka_url: String,

    #[env(var = "WORKERS", default = "4")]
    pub workers: i64,
}

fn main() -> anyhow::Result<()> {
    // Any `Environment` works; maps are handy for tests and snapshots
    let snapshot = HashMap::from([(
        "KAFKA_URL".to_string(),
        "kafka1:9092,kafka2:9092".to_string(),
    )]);

    let config = Config::from_env_with(&snapshot)?;

    println!("Configuration loaded from snapshot:");
    println!("  Kafka URL: {}", config.kafka_url);
    println!("  Workers: {}", config.workers);

    Ok(())
}

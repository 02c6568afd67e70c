mod repair;
mod replacements;

use std::path::PathBuf;
use tracing::{error, info};

use crate::replacements::REPLACEMENTS;

const DEFAULT_TARGET: &str = "public/index.html";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded .env from: {:?}", path),
        Err(e) => error!("Failed to load .env: {}", e),
    }

    let target = PathBuf::from(
        std::env::var("TARGET_FILE").unwrap_or_else(|_| DEFAULT_TARGET.to_string()),
    );

    info!("Fixing encoding of {}", target.display());
    repair::repair_file(&target, &REPLACEMENTS)?;

    println!("✅ Encoding fixed successfully!");

    Ok(())
}

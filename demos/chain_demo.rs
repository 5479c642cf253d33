// Walks a two-tier chain (memory in front of files) through the cache
// lifecycle. Run with: cargo run --example chain_demo

use cachelayer::cache::errors::CacheError;
use cachelayer::cache::traits::cache_backend::CacheBackend;
use cachelayer::drivers::structs::chain_cache::ChainCache;
use cachelayer::drivers::structs::file_cache::FileCache;
use cachelayer::drivers::structs::memory_cache::MemoryCache;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use std::sync::Arc;
use std::time::Duration;

fn setup_logging() {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

#[tokio::main]
async fn main() -> Result<(), CacheError> {
    setup_logging();

    let directory = std::env::temp_dir().join("cachelayer-demo");
    std::fs::create_dir_all(&directory)
        .map_err(|e| CacheError::OperationError(format!("Unable to create demo directory: {}", e)))?;

    let memory = Arc::new(MemoryCache::new());
    let file = Arc::new(FileCache::new(&directory));
    let chain = ChainCache::new(vec![
        memory.clone() as Arc<dyn CacheBackend>,
        file.clone(),
    ]);

    chain
        .save("greeting", "hello from the chain", Some(Duration::from_secs(60)))
        .await?;
    info!("saved 'greeting' into both tiers");

    // Losing the front tier leaves the file tier to answer.
    memory.flush().await?;
    let value = chain.fetch("greeting").await?;
    info!("fetched 'greeting' via fallback: {}", value);

    if let Err(miss) = chain.fetch("absent").await {
        info!("a total miss aggregates driver errors: {}", miss);
    }

    chain.flush().await?;
    info!("flushed both tiers");
    Ok(())
}

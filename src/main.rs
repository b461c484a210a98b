use std::sync::Arc;

use tracing::{error, info};

use opine::store::{CommentStore, MemoryCommentStore, MemoryPostStore, PostStore, SqlCommentStore, SqlPostStore};
use opine::web::{AppState, WebServer};
use opine::{Config, Database, Result, StorageBackend};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = opine::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        opine::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = run(config).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    info!("opine - posts and comments service");
    info!("Storage backend: {}", config.storage.backend);

    let (post_store, comment_store): (Arc<dyn PostStore>, Arc<dyn CommentStore>) =
        match config.storage.backend {
            StorageBackend::Memory => (
                Arc::new(MemoryPostStore::new()),
                Arc::new(MemoryCommentStore::new()),
            ),
            StorageBackend::Database => {
                let db = Database::connect(&config.storage).await?;
                (
                    Arc::new(SqlPostStore::new(db.pool().clone())),
                    Arc::new(SqlCommentStore::new(db.pool().clone())),
                )
            }
        };

    let app_state = Arc::new(AppState::new(post_store, comment_store));
    let server = WebServer::new(&config.server, app_state)?;
    server.run().await
}

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Open a pooled connection to the store.
///
/// SQL statement logging is enabled (sqlx emits through `tracing`). In-memory
/// SQLite URLs are pinned to a single pooled connection so every query sees
/// the same database.
pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(url.to_owned());
    let max_connections = if url.contains(":memory:") {
        1
    } else {
        max_connections.max(1)
    };
    opts.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(true);
    tracing::info!(max_connections, "connecting to database");
    Database::connect(opts).await
}

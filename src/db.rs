use sqlx::SqlitePool;

/// Creates the three catalog tables if they do not exist yet.
///
/// Movie relations are deliberately stored as plain integer columns without
/// FOREIGN KEY clauses: a movie may point at a director or genre id that was
/// never created or has since been deleted, and deleting a director or genre
/// must not cascade into the movies table.
pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance (best-effort, log failures)
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS directors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS genres (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NULL,
            description TEXT NULL,
            trailer TEXT NULL,
            year INTEGER NULL,
            rating REAL NULL,
            genre_id INTEGER NULL,
            director_id INTEGER NULL
        )"#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        ("idx_movies_director", "CREATE INDEX IF NOT EXISTS idx_movies_director ON movies(director_id)"),
        ("idx_movies_genre", "CREATE INDEX IF NOT EXISTS idx_movies_genre ON movies(genre_id)"),
    ];
    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            match &e {
                sqlx::Error::Database(db_err) => {
                    let msg = db_err.message().to_lowercase();
                    if msg.contains("already exists") || msg.contains("duplicate") {
                        tracing::debug!("Index {} already exists, skipping", name);
                    } else {
                        tracing::warn!("Failed to create index {}: {}", name, e);
                    }
                }
                _ => {
                    tracing::warn!("Failed to create index {}: {}", name, e);
                }
            }
        }
    }

    Ok(())
}

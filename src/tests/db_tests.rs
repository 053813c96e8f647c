#[cfg(test)]
mod tests {
    use crate::db;
    use sqlx::migrate::MigrateDatabase;
    use sqlx::sqlite::SqlitePoolOptions;
    use tempfile::NamedTempFile;

    async fn setup_test_db() -> sqlx::SqlitePool {
        let temp_db = NamedTempFile::new().unwrap();
        let db_url = format!("sqlite:{}", temp_db.path().display());

        sqlx::Sqlite::create_database(&db_url).await.unwrap();

        let pool = SqlitePoolOptions::new().max_connections(1).connect(&db_url).await.unwrap();
        db::init_db(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_init_db_creates_tables() {
        let pool = setup_test_db().await;

        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();

        assert!(tables.contains(&"movies".to_string()));
        assert!(tables.contains(&"directors".to_string()));
        assert!(tables.contains(&"genres".to_string()));
    }

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let pool = setup_test_db().await;
        // A second bootstrap over an existing schema must not fail
        db::init_db(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_movie_relations_are_unenforced() {
        let pool = setup_test_db().await;

        // Inserting a movie pointing at ids that do not exist must succeed
        sqlx::query("INSERT INTO movies (title, director_id, genre_id) VALUES ('X', 500, 600)")
            .execute(&pool)
            .await
            .unwrap();

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM movies").fetch_one(&pool).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_delete_director_does_not_cascade() {
        let pool = setup_test_db().await;

        sqlx::query("INSERT INTO directors (id, name) VALUES (1, 'Kurosawa')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO movies (title, director_id) VALUES ('Ran', 1)")
            .execute(&pool)
            .await
            .unwrap();

        sqlx::query("DELETE FROM directors WHERE id = 1").execute(&pool).await.unwrap();

        // The movie row survives with its director_id intact
        let (count, director_id): (i64, Option<i64>) = (
            sqlx::query_scalar("SELECT COUNT(*) FROM movies").fetch_one(&pool).await.unwrap(),
            sqlx::query_scalar("SELECT director_id FROM movies WHERE title = 'Ran'")
                .fetch_one(&pool)
                .await
                .unwrap(),
        );
        assert_eq!(count, 1);
        assert_eq!(director_id, Some(1));
    }

    #[tokio::test]
    async fn test_ids_are_store_assigned_and_unique() {
        let pool = setup_test_db().await;

        for title in ["A", "B", "C"] {
            sqlx::query("INSERT INTO movies (title) VALUES (?1)").bind(title).execute(&pool).await.unwrap();
        }
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM movies ORDER BY id").fetch_all(&pool).await.unwrap();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}

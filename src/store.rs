//! Entity store: all SQL for the movies, directors and genres tables.
//!
//! Every function borrows the pool; sqlx checks a connection out per
//! statement and returns it on all exit paths. Mutations auto-commit.
//! Lookups return `Option` and mutations return the affected row count so
//! callers decide how to treat a missing id - nothing in here ever panics
//! on absence.

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::types::{MovieDto, NamedDto, NewMovie};

const MOVIE_SELECT: &str = "SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating, \
     d.name AS director, g.name AS genre \
     FROM movies m \
     LEFT JOIN directors d ON d.id = m.director_id \
     LEFT JOIN genres g ON g.id = m.genre_id";

fn movie_from_row(r: &SqliteRow) -> MovieDto {
    MovieDto {
        id: r.get::<i64, _>("id"),
        title: r.get::<Option<String>, _>("title"),
        description: r.get::<Option<String>, _>("description"),
        trailer: r.get::<Option<String>, _>("trailer"),
        year: r.get::<Option<i64>, _>("year"),
        rating: r.get::<Option<f64>, _>("rating"),
        director: r.get::<Option<String>, _>("director"),
        genre: r.get::<Option<String>, _>("genre"),
    }
}

/// Returns all movies, restricted by the given equality filters.
///
/// Each provided filter contributes one AND clause, so passing both yields
/// the intersection of the director-filtered and genre-filtered sets.
/// Without filters this is a full scan ordered by id.
pub async fn list_movies(
    pool: &SqlitePool,
    director_id: Option<i64>,
    genre_id: Option<i64>,
) -> sqlx::Result<Vec<MovieDto>> {
    let mut sql = String::from(MOVIE_SELECT);
    let mut clauses: Vec<String> = Vec::new();
    let mut idx = 1;
    if director_id.is_some() {
        clauses.push(format!("m.director_id = ?{}", idx));
        idx += 1;
    }
    if genre_id.is_some() {
        clauses.push(format!("m.genre_id = ?{}", idx));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY m.id ASC");

    let mut qx = sqlx::query(&sql);
    if let Some(d) = director_id {
        qx = qx.bind(d);
    }
    if let Some(g) = genre_id {
        qx = qx.bind(g);
    }

    let rows = qx.fetch_all(pool).await?;
    Ok(rows.iter().map(movie_from_row).collect())
}

pub async fn get_movie(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<MovieDto>> {
    let sql = format!("{} WHERE m.id = ?1", MOVIE_SELECT);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row.as_ref().map(movie_from_row))
}

/// Inserts the caller-supplied fields verbatim and returns the assigned id.
/// Referenced director/genre ids are not checked for existence.
pub async fn insert_movie(pool: &SqlitePool, new: &NewMovie) -> sqlx::Result<i64> {
    let res = sqlx::query(
        r#"INSERT INTO movies (title, description, trailer, year, rating, genre_id, director_id)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.trailer)
    .bind(new.year)
    .bind(new.rating)
    .bind(new.genre_id)
    .bind(new.director_id)
    .execute(pool)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn delete_movie(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query("DELETE FROM movies WHERE id = ?1").bind(id).execute(pool).await?;
    Ok(res.rows_affected())
}

fn named_from_row(r: &SqliteRow) -> NamedDto {
    NamedDto { id: r.get::<i64, _>("id"), name: r.get::<Option<String>, _>("name") }
}

pub async fn get_director(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<NamedDto>> {
    let row = sqlx::query("SELECT id, name FROM directors WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.as_ref().map(named_from_row))
}

pub async fn update_director_name(pool: &SqlitePool, id: i64, name: &str) -> sqlx::Result<u64> {
    let res = sqlx::query("UPDATE directors SET name = ?1 WHERE id = ?2")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

/// Deletes the director row only. Movies pointing at it keep their
/// director_id and simply render a null label from then on.
pub async fn delete_director(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query("DELETE FROM directors WHERE id = ?1").bind(id).execute(pool).await?;
    Ok(res.rows_affected())
}

pub async fn get_genre(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<NamedDto>> {
    let row =
        sqlx::query("SELECT id, name FROM genres WHERE id = ?1").bind(id).fetch_optional(pool).await?;
    Ok(row.as_ref().map(named_from_row))
}

pub async fn update_genre_name(pool: &SqlitePool, id: i64, name: &str) -> sqlx::Result<u64> {
    let res = sqlx::query("UPDATE genres SET name = ?1 WHERE id = ?2")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

/// See [`delete_director`]; same non-cascading semantics.
pub async fn delete_genre(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query("DELETE FROM genres WHERE id = ?1").bind(id).execute(pool).await?;
    Ok(res.rows_affected())
}

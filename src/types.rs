use serde::{Deserialize, Serialize};

/// Wire representation of a movie.
///
/// Scalar columns map one to one. `director` and `genre` carry the *name* of
/// the referenced entity as an opaque display label rather than a nested
/// object; they are `null` when the reference is unset or points at a row
/// that no longer exists. The raw `director_id`/`genre_id` columns are not
/// exposed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub director: Option<String>,
    pub genre: Option<String>,
}

/// Wire representation of a director or genre: identity mapping of `{id, name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedDto {
    pub id: i64,
    pub name: Option<String>,
}

/// Create body for `POST /movies`.
///
/// Every field is optional; missing fields are stored as NULL. Unknown keys
/// are rejected by serde so a typoed field never silently vanishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

/// PUT body for renaming a director or genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rename {
    pub name: String,
}

/// Query parameters of `GET /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieFilter {
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
}

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Movies joined with the rating values that reference them. Movies without
/// ratings yield an empty array rather than `{NULL}`.
const MOVIE_WITH_RATINGS: &str = "SELECT m.id, m.name, m.genre, m.release_year,
        COALESCE(array_agg(r.rating) FILTER (WHERE r.rating IS NOT NULL), '{}') AS ratings
    FROM movies m
    LEFT JOIN user_movie_ratings r ON r.movie_id = m.id";

const MOVIE_COLUMNS: &str = "id, name, genre, release_year";

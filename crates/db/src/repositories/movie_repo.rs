//! Repository for the `movies` table and its `movie_genres` associations.
//!
//! Catalog listing (filter + paginate + aggregate) and the multi-table write
//! steps used by the movie service live here. Writes that touch more than one
//! table take an open transaction from the caller.

use std::collections::HashMap;

use reelrate_core::catalog::partial_match_pattern;
use reelrate_core::pagination::{Page, PageRequest};
use reelrate_core::types::DbId;
use sqlx::{Executor, PgConnection, PgPool, Postgres, Transaction};

use crate::models::genre::Genre;
use crate::models::movie::{
    CreateMovie, Movie, MovieDetail, MovieFilter, MovieListItem, MovieListRow, UpdateMovie,
};
use crate::repositories::{DirectorRepo, GenreRepo, RatingRepo};

/// Column list for the `movies` table.
const COLUMNS: &str =
    "id, title, director_id, release_year, cast_members, created_at, updated_at";

/// WHERE clause shared by the catalog count and page queries.
///
/// `$1` title pattern, `$2` release year, `$3` genre pattern. A NULL binding
/// disables that filter.
const LIST_FILTER: &str = "\
    ($1::TEXT IS NULL OR m.title ILIKE $1) \
    AND ($2::INT IS NULL OR m.release_year = $2) \
    AND ($3::TEXT IS NULL OR EXISTS ( \
        SELECT 1 FROM movie_genres mg \
        JOIN genres g ON g.id = mg.genre_id \
        WHERE mg.movie_id = m.id AND g.name ILIKE $3))";

/// Provides catalog queries and CRUD steps for movies.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// One page of the catalog plus the total number of matching movies.
    ///
    /// Items are ordered by `id` so consecutive pages never overlap or skip.
    /// A page past the end yields no items but still reports the total.
    pub async fn list(
        pool: &PgPool,
        filter: &MovieFilter,
        page: PageRequest,
    ) -> Result<Page<MovieListItem>, sqlx::Error> {
        let title = filter.title.as_deref().map(partial_match_pattern);
        let genre = filter.genre.as_deref().map(partial_match_pattern);

        let count_query = format!("SELECT COUNT(*) FROM movies m WHERE {LIST_FILTER}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(&title)
            .bind(filter.release_year)
            .bind(&genre)
            .fetch_one(pool)
            .await?;

        let page_query = format!(
            "SELECT m.id, m.title, m.release_year, m.director_id, \
                    d.name AS director_name, \
                    d.birth_year AS director_birth_year, \
                    d.description AS director_description, \
                    (SELECT AVG(r.score)::FLOAT8 FROM movie_ratings r WHERE r.movie_id = m.id) \
                        AS average_rating, \
                    (SELECT COUNT(*) FROM movie_ratings r WHERE r.movie_id = m.id) \
                        AS ratings_count \
             FROM movies m \
             JOIN directors d ON d.id = m.director_id \
             WHERE {LIST_FILTER} \
             ORDER BY m.id \
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, MovieListRow>(&page_query)
            .bind(&title)
            .bind(filter.release_year)
            .bind(&genre)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let mut genres_by_movie: HashMap<DbId, Vec<String>> = HashMap::new();
        for link in GenreRepo::list_for_movies(pool, &ids).await? {
            genres_by_movie
                .entry(link.movie_id)
                .or_default()
                .push(link.name);
        }

        let items = rows
            .into_iter()
            .map(|row| {
                let genres = genres_by_movie.remove(&row.id).unwrap_or_default();
                MovieListItem::from_row(row, genres)
            })
            .collect();

        Ok(Page::new(items, total, page))
    }

    /// Find a movie row by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Movie>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Full detail for a movie: director, genres and a freshly computed
    /// rating aggregate. Returns `None` if the movie does not exist.
    ///
    /// Takes a connection so a write transaction can read back its own rows
    /// before committing.
    pub async fn find_detail(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<MovieDetail>, sqlx::Error> {
        let Some(movie) = Self::find_by_id(&mut *conn, id).await? else {
            return Ok(None);
        };
        // The FK guarantees the director row.
        let director = DirectorRepo::find_by_id(&mut *conn, movie.director_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let genres: Vec<Genre> = GenreRepo::list_for_movie(&mut *conn, movie.id).await?;
        let stats = RatingRepo::stats_for_movie(&mut *conn, movie.id).await?;

        Ok(Some(MovieDetail::assemble(movie, director, genres, stats)))
    }

    /// Whether a movie with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Transactional write steps
    // -----------------------------------------------------------------------

    /// Insert the movie row. Genre links are written separately with
    /// [`MovieRepo::replace_genres`].
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateMovie,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, director_id, release_year, cast_members) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(input.title.trim())
            .bind(input.director_id)
            .bind(input.release_year)
            .bind(&input.cast)
            .fetch_one(&mut **tx)
            .await
    }

    /// Lock a movie row for the rest of the transaction.
    ///
    /// Returns `false` if no such movie exists.
    pub async fn lock_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, DbId>("SELECT id FROM movies WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(found.is_some())
    }

    /// Apply the scalar fields of a partial update. Only non-`None` fields are
    /// written; `updated_at` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                title = COALESCE($2, title), \
                director_id = COALESCE($3, director_id), \
                release_year = COALESCE($4, release_year), \
                cast_members = COALESCE($5, cast_members), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(input.director_id)
            .bind(input.release_year)
            .bind(&input.cast)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Replace every genre link of a movie with `genre_ids`.
    ///
    /// Existing links are deleted first, then the new set is inserted, so the
    /// result is exactly `genre_ids` regardless of what was linked before.
    pub async fn replace_genres(
        tx: &mut Transaction<'_, Postgres>,
        movie_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut **tx)
            .await?;

        if !genre_ids.is_empty() {
            sqlx::query(
                "INSERT INTO movie_genres (movie_id, genre_id) \
                 SELECT $1, UNNEST($2::BIGINT[])",
            )
            .bind(movie_id)
            .bind(genre_ids)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Delete a movie together with its ratings and genre links.
    ///
    /// Returns `false` if the movie did not exist; the caller should then
    /// roll back.
    pub async fn delete_cascade(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let ratings = sqlx::query("DELETE FROM movie_ratings WHERE movie_id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        let genre_links = sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected()
            > 0;

        if deleted {
            tracing::debug!(movie_id = id, ratings, genre_links, "Removed movie and dependents");
        }
        Ok(deleted)
    }
}

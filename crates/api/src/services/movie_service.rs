//! Movie catalog rules: listing, detail, create, partial update and delete.

use reelrate_core::catalog::{
    first_missing_id, normalize_filter, normalize_genre_ids, validate_release_year,
};
use reelrate_core::error::CoreError;
use reelrate_core::pagination::{Page, PageLimits, PageRequest};
use reelrate_core::types::DbId;
use reelrate_core::validation::validate_request;
use reelrate_db::models::movie::{CreateMovie, MovieDetail, MovieFilter, MovieListItem, UpdateMovie};
use reelrate_db::repositories::{DirectorRepo, GenreRepo, MovieRepo};
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;

/// Stateless service over [`MovieRepo`].
pub struct MovieService;

impl MovieService {
    /// Resolve paging and filters, then fetch one catalog page.
    pub async fn list(
        pool: &PgPool,
        params: &MovieListParams,
        limits: &PageLimits,
    ) -> AppResult<Page<MovieListItem>> {
        let page = PageRequest::resolve(params.page, params.page_size, limits)?;
        if let Some(year) = params.release_year {
            validate_release_year(year)?;
        }
        let filter = MovieFilter {
            title: normalize_filter(params.title.as_deref()),
            release_year: params.release_year,
            genre: normalize_filter(params.genre.as_deref()),
        };

        let result = MovieRepo::list(pool, &filter, page).await?;
        tracing::debug!(
            page = page.page,
            page_size = page.page_size,
            total = result.total,
            returned = result.items.len(),
            "Listed movies",
        );
        Ok(result)
    }

    /// Full detail with a freshly computed rating aggregate.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<MovieDetail> {
        let mut conn = pool.acquire().await?;
        MovieRepo::find_detail(&mut conn, id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie", id))
    }

    /// Create a movie and its genre links atomically, returning the detail as
    /// read inside the same transaction.
    ///
    /// An unknown director or genre aborts the transaction, leaving no row behind.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> AppResult<MovieDetail> {
        validate_request(input)?;
        let genre_ids = normalize_genre_ids(&input.genre_ids);

        let mut tx = pool.begin().await?;
        ensure_director(&mut tx, input.director_id).await?;
        ensure_genres(&mut tx, &genre_ids).await?;

        let movie = MovieRepo::insert(&mut tx, input).await?;
        MovieRepo::replace_genres(&mut tx, movie.id, &genre_ids).await?;
        let detail = read_back(&mut tx, movie.id).await?;
        tx.commit().await?;

        tracing::info!(
            movie_id = movie.id,
            director_id = movie.director_id,
            genres = genre_ids.len(),
            "Movie created",
        );
        Ok(detail)
    }

    /// Apply a partial update. A supplied genre list replaces the existing
    /// links; every step runs in one transaction.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateMovie) -> AppResult<MovieDetail> {
        validate_request(input)?;
        let genre_ids = input.genre_ids.as_deref().map(normalize_genre_ids);

        let mut tx = pool.begin().await?;
        if !MovieRepo::lock_for_update(&mut tx, id).await? {
            return Err(AppError::not_found("Movie", id));
        }
        if let Some(director_id) = input.director_id {
            ensure_director(&mut tx, director_id).await?;
        }
        if let Some(ids) = &genre_ids {
            ensure_genres(&mut tx, ids).await?;
        }

        MovieRepo::update(&mut tx, id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Movie", id))?;
        if let Some(ids) = &genre_ids {
            MovieRepo::replace_genres(&mut tx, id, ids).await?;
        }
        let detail = read_back(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(
            movie_id = id,
            genres_replaced = genre_ids.is_some(),
            "Movie updated",
        );
        Ok(detail)
    }

    /// Delete a movie with its ratings and genre links.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let mut tx = pool.begin().await?;
        if !MovieRepo::delete_cascade(&mut tx, id).await? {
            return Err(AppError::not_found("Movie", id));
        }
        tx.commit().await?;

        tracing::info!(movie_id = id, "Movie deleted");
        Ok(())
    }
}

/// Detail of a movie written earlier in the same transaction.
async fn read_back(tx: &mut Transaction<'_, Postgres>, id: DbId) -> AppResult<MovieDetail> {
    MovieRepo::find_detail(&mut **tx, id).await?.ok_or_else(|| {
        CoreError::Internal(format!("movie {id} vanished inside its own transaction")).into()
    })
}

/// Fail with NotFound unless the director exists.
async fn ensure_director(tx: &mut Transaction<'_, Postgres>, director_id: DbId) -> AppResult<()> {
    if !DirectorRepo::exists_for_share(tx, director_id).await? {
        return Err(AppError::not_found("Director", director_id));
    }
    Ok(())
}

/// Fail with NotFound naming the first unknown genre id.
async fn ensure_genres(tx: &mut Transaction<'_, Postgres>, genre_ids: &[DbId]) -> AppResult<()> {
    let found = GenreRepo::existing_ids_for_share(tx, genre_ids).await?;
    if let Some(missing) = first_missing_id(genre_ids, &found) {
        return Err(AppError::not_found("Genre", missing));
    }
    Ok(())
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads take
//! `&PgPool`; steps of a multi-table write take the caller's open
//! `Transaction` so the caller decides where the unit of work begins and ends.

pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod rating_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use rating_repo::RatingRepo;

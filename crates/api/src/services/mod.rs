//! Business rules between the HTTP handlers and the repositories.
//!
//! Services validate input before any write, decide transaction boundaries
//! for multi-table operations and translate missing references into
//! [`AppError`](crate::error::AppError) values.

pub mod movie_service;
pub mod rating_service;

pub use movie_service::MovieService;
pub use rating_service::RatingService;

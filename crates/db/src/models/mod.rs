//! Row models and request DTOs, one module per table.

pub mod director;
pub mod genre;
pub mod movie;
pub mod rating;

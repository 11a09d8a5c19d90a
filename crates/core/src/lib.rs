//! Domain building blocks for the movie rating service.
//!
//! Everything here is free of I/O: shared id/timestamp types, the error
//! taxonomy, pagination resolution and the catalog validation rules used by
//! both the repository and the HTTP layers.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;

pub mod directors;
pub mod genres;
pub mod movies;
pub mod ratings;

pub mod entity;
pub mod invariants;

pub use entity::Genre;
pub use invariants::{validate_genre, validate_genre_name};

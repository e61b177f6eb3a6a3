pub mod entity;
pub mod invariants;

pub use entity::{dedup_ids, Movie, NewMovie};
pub use invariants::{is_valid_rating, validate_new_movie, MAX_AUDIENCE_RATING};

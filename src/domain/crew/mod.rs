pub mod entity;
pub mod invariants;

pub use entity::CrewMember;
pub use invariants::{validate_crew_member, validate_crew_name};

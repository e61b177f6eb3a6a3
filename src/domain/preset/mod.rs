pub mod entity;
pub mod invariants;

pub use entity::PresetRecord;
pub use invariants::validate_preset_record;

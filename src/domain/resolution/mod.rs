// src/domain/resolution/mod.rs
//
// Resolution Domain
//
// Value objects describing name -> id resolution. The resolving itself is a
// service concern (it talks to the backend); these types only carry results.

pub mod value_objects;

pub use value_objects::{ReferenceKind, ResolutionOutcome, ResolvedReference};

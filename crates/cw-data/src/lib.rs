//! Rules dataset for Charwright: races, subraces, classes, deities, and
//! ability scores.
//!
//! The dataset is an immutable snapshot of the published ruleset, loaded once
//! from JSON before any character is generated. Generation code receives a
//! shared read-only view and never mutates it; [`Dataset`] exposes no
//! mutation methods, so it is safe to share across concurrent readers.

pub mod dataset;
pub mod error;

pub use dataset::{Class, Dataset, Deity, Race, SkillChoice, Subrace};
pub use error::{DataError, DataResult};

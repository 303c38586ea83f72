//! Character generation engine for Charwright.
//!
//! Composes attributes drawn from the rules dataset (`cw-data`) into a
//! mutually consistent level-1 character: uniform core picks, subrace and
//! subclass rolls, ability scores with racial bonuses, derived combat
//! stats, skills, proficiencies, and a deity matched to race and class.
//! The steps run in a fixed dependency order and are deterministic for a
//! given RNG seed. Rendering the finished record into display strings
//! lives in [`sheet`].

pub mod abilities;
pub mod character;
pub mod error;
pub mod generate;
pub mod sheet;
pub mod tables;

pub use abilities::{AbilityMethod, AbilityScore, STANDARD_ARRAY, ability_modifier};
pub use character::{Character, Gender};
pub use error::{GenError, GenResult};
pub use generate::generate;
pub use sheet::CharacterSheet;
pub use tables::{ClassGroup, Pantheon, validate_tables};

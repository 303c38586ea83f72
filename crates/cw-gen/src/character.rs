//! The resolved character record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityScore;

/// A character's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
}

impl Gender {
    /// The initial used in the avatar key ('F' or 'M').
    pub fn initial(self) -> char {
        match self {
            Self::Female => 'F',
            Self::Male => 'M',
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Female => write!(f, "Female"),
            Self::Male => write!(f, "Male"),
        }
    }
}

/// A fully resolved character.
///
/// Built field by field by [`generate`](crate::generate::generate) in a
/// fixed dependency order; once generation returns, the record is complete
/// and read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// The character's gender.
    pub gender: Gender,
    /// Alignment, e.g. "Chaotic Good".
    pub alignment: String,
    /// Race name.
    pub race: String,
    /// Class name.
    pub class_name: String,
    /// The class's hit die, the base for level-1 hit points.
    pub base_hit_die: i32,
    /// Walking speed in feet.
    pub speed: u32,
    /// Saving throw proficiencies (ability names).
    pub saving_throws: Vec<String>,
    /// Racial trait names.
    pub traits: Vec<String>,
    /// Known languages.
    pub languages: Vec<String>,
    /// Starting equipment, item name to quantity.
    pub equipment: BTreeMap<String, u32>,
    /// The rolled subrace. `None` when the race has no subraces.
    pub subrace: Option<String>,
    /// The rolled subclass. `None` when the class has no subclasses.
    pub subclass: Option<String>,
    /// Ability scores with racial bonuses applied, in dataset order.
    pub abilities: Vec<AbilityScore>,
    /// Portrait lookup key: `{archetype group}_{race}_{gender initial}`.
    pub avatar_key: String,
    /// Level-1 hit points: hit die plus CON modifier.
    pub hit_points: i32,
    /// Base armor class: 10 plus DEX modifier.
    pub armor_class: i32,
    /// Skill proficiencies.
    pub skills: Vec<String>,
    /// Non-skill proficiencies (armor, weapons, tools).
    pub proficiencies: Vec<String>,
    /// The character's deity.
    pub deity: String,
}

impl Character {
    /// The subrace name, falling back to the race when no subrace exists.
    pub fn subrace_name(&self) -> &str {
        self.subrace.as_deref().unwrap_or(&self.race)
    }

    /// The subclass name, falling back to the class when no subclass exists.
    pub fn subclass_name(&self) -> &str {
        self.subclass.as_deref().unwrap_or(&self.class_name)
    }

    /// Look up an ability by name.
    pub fn ability(&self, name: &str) -> Option<&AbilityScore> {
        self.abilities.iter().find(|a| a.ability == name)
    }

    /// Look up an ability modifier by name.
    pub fn modifier(&self, name: &str) -> Option<i32> {
        self.ability(name).map(|a| a.modifier)
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) - {} - {}",
            self.subrace_name(),
            self.class_name,
            self.subclass_name(),
            self.alignment,
            self.gender
        )
    }
}

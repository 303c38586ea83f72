//! The rules dataset: every table a generated character draws from.
//!
//! Maps are `BTreeMap` rather than `HashMap` so that uniform picks over
//! their keys iterate in a stable order; seeded generation must be
//! deterministic.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

/// Number of ability scores every character has.
pub const ABILITY_COUNT: usize = 6;

/// The complete rules dataset, loaded once per generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// The six ability score names, in assignment order.
    pub ability_scores: Vec<String>,
    /// All alignments a character can roll.
    pub alignments: Vec<String>,
    /// Races by name.
    pub races: BTreeMap<String, Race>,
    /// Subraces by name.
    pub subraces: BTreeMap<String, Subrace>,
    /// Classes by name.
    pub classes: BTreeMap<String, Class>,
    /// Deities grouped by pantheon name.
    pub deities: BTreeMap<String, BTreeMap<String, Deity>>,
}

/// A playable race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    /// Languages every member of the race speaks.
    pub languages: Vec<String>,
    /// Racial trait names.
    pub racial_traits: Vec<String>,
    /// Proficiencies granted by the race. For Elf and Half-Orc these are
    /// skills carrying a `"Skill: "` prefix.
    pub starting_proficiencies: Vec<String>,
    /// Walking speed in feet.
    pub speed: u32,
    /// Ability score bonuses, keyed by ability name.
    pub ability_bonus: BTreeMap<String, i32>,
    /// Names of the race's subraces. Empty when the race has none.
    #[serde(default)]
    pub subraces: Vec<String>,
}

/// A narrower variant of a race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subrace {
    /// The parent race's name.
    pub race: String,
    /// Extra racial trait names.
    pub racial_traits: Vec<String>,
    /// Extra proficiencies granted by the subrace.
    pub starting_proficiencies: Vec<String>,
    /// Extra ability score bonuses, keyed by ability name.
    pub ability_bonus: BTreeMap<String, i32>,
}

/// A character class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    /// Hit die size (also the level-1 hit point base).
    pub hit_die: i32,
    /// Ability names the class is proficient in saving throws for.
    pub saving_throws: Vec<String>,
    /// Proficiency names. Some entries carry a `"Saving Throw"` marker and
    /// are filtered out of the proficiency list during generation.
    pub proficiencies: Vec<String>,
    /// The class's skill choice: how many to pick, and from which list.
    pub chose_skills: SkillChoice,
    /// Starting equipment, item name to quantity.
    pub starting_equipment: BTreeMap<String, u32>,
    /// Names of the class's subclasses. Empty when the class has none.
    #[serde(default)]
    pub subclasses: Vec<String>,
}

/// A class's skill selection rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillChoice {
    /// How many skills to choose.
    pub chose: usize,
    /// The skills available to choose from.
    pub skills: Vec<String>,
}

/// A deity within a pantheon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deity {
    /// The deity's alignment.
    pub deity_alignment: String,
    /// The domains the deity grants to clerics.
    pub deity_domains: Vec<String>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    ///
    /// The file handle is held only for the duration of the read; parsing
    /// and validation happen on the in-memory text.
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a dataset from a JSON string and validate its invariants.
    pub fn from_json_str(text: &str) -> DataResult<Self> {
        let dataset: Self = serde_json::from_str(text)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the structural invariants generation relies on.
    ///
    /// Deep ruleset consistency is out of scope; this covers only what the
    /// generation steps assume: exactly six ability scores, non-empty pick
    /// lists, skill choices that can be satisfied, and subrace links that
    /// resolve both ways.
    pub fn validate(&self) -> DataResult<()> {
        if self.ability_scores.len() != ABILITY_COUNT {
            return Err(DataError::Invalid(format!(
                "expected {ABILITY_COUNT} ability scores, found {}",
                self.ability_scores.len()
            )));
        }
        if self.alignments.is_empty() {
            return Err(DataError::Invalid("no alignments listed".into()));
        }
        if self.races.is_empty() {
            return Err(DataError::Invalid("no races listed".into()));
        }
        if self.classes.is_empty() {
            return Err(DataError::Invalid("no classes listed".into()));
        }

        for (name, class) in &self.classes {
            let choice = &class.chose_skills;
            if choice.chose > choice.skills.len() {
                return Err(DataError::Invalid(format!(
                    "class '{name}' chooses {} skills from a list of {}",
                    choice.chose,
                    choice.skills.len()
                )));
            }
            self.check_bonus_keys(name, &class.saving_throws)?;
        }

        for (name, race) in &self.races {
            self.check_bonus_keys(name, race.ability_bonus.keys())?;
            for subrace_name in &race.subraces {
                let Some(subrace) = self.subraces.get(subrace_name) else {
                    return Err(DataError::Invalid(format!(
                        "race '{name}' lists unknown subrace '{subrace_name}'"
                    )));
                };
                if subrace.race != *name {
                    return Err(DataError::Invalid(format!(
                        "subrace '{subrace_name}' belongs to '{}', not '{name}'",
                        subrace.race
                    )));
                }
            }
        }

        for (name, subrace) in &self.subraces {
            self.check_bonus_keys(name, subrace.ability_bonus.keys())?;
        }

        Ok(())
    }

    /// Verify that every name in `abilities` is a known ability score.
    fn check_bonus_keys<'a, I>(&self, owner: &str, abilities: I) -> DataResult<()>
    where
        I: IntoIterator<Item = &'a String>,
    {
        for ability in abilities {
            if !self.ability_scores.contains(ability) {
                return Err(DataError::Invalid(format!(
                    "'{owner}' references unknown ability '{ability}'"
                )));
            }
        }
        Ok(())
    }
}

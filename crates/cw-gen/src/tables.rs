//! Fixed mapping tables: class archetype groups and race pantheons.
//!
//! These encode ruleset knowledge that is not part of the dataset file.
//! [`validate_tables`] checks them against a loaded dataset up front so a
//! drifted dataset surfaces as a configuration error instead of failing in
//! the middle of generation.

use serde::{Deserialize, Serialize};

use cw_data::Dataset;

use crate::error::{GenError, GenResult};

/// Coarse archetype bucket a class belongs to, used for portrait lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassGroup {
    /// Fighter, Ranger, Paladin, Barbarian.
    Warrior,
    /// Cleric, Druid, Monk.
    Priest,
    /// Wizard, Warlock, Sorcerer.
    Wizard,
    /// Rogue, Bard.
    Rogue,
}

const CLASS_GROUPS: &[(&str, ClassGroup)] = &[
    ("Fighter", ClassGroup::Warrior),
    ("Ranger", ClassGroup::Warrior),
    ("Paladin", ClassGroup::Warrior),
    ("Barbarian", ClassGroup::Warrior),
    ("Cleric", ClassGroup::Priest),
    ("Druid", ClassGroup::Priest),
    ("Monk", ClassGroup::Priest),
    ("Wizard", ClassGroup::Wizard),
    ("Warlock", ClassGroup::Wizard),
    ("Sorcerer", ClassGroup::Wizard),
    ("Rogue", ClassGroup::Rogue),
    ("Bard", ClassGroup::Rogue),
];

impl ClassGroup {
    /// Look up the archetype group for a class name.
    pub fn of(class_name: &str) -> GenResult<Self> {
        CLASS_GROUPS
            .iter()
            .find(|(name, _)| *name == class_name)
            .map(|(_, group)| *group)
            .ok_or_else(|| GenError::UnknownClassGroup(class_name.to_string()))
    }
}

impl std::fmt::Display for ClassGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warrior => write!(f, "Warrior"),
            Self::Priest => write!(f, "Priest"),
            Self::Wizard => write!(f, "Wizard"),
            Self::Rogue => write!(f, "Rogue"),
        }
    }
}

/// A pantheon of deities tied to one or more races.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pantheon {
    /// The human pantheon, also serving Dragonborn and Tieflings.
    Human,
    /// The dwarven pantheon.
    Morndinsamman,
    /// The gnomish pantheon.
    GoldenHills,
    /// The halfling pantheon.
    YondallasChildren,
    /// The elven pantheon.
    Seldarine,
    /// The orcish pantheon.
    Orcish,
    /// The drow pantheon.
    DarkSeldarine,
}

const RACE_PANTHEONS: &[(&str, Pantheon)] = &[
    ("Dragonborn", Pantheon::Human),
    ("Dwarf", Pantheon::Morndinsamman),
    ("Gnome", Pantheon::GoldenHills),
    ("Halfling", Pantheon::YondallasChildren),
    ("Half-Elf", Pantheon::Seldarine),
    ("Half-Orc", Pantheon::Orcish),
    ("Human", Pantheon::Human),
    ("Elf", Pantheon::Seldarine),
    ("Drow", Pantheon::DarkSeldarine),
    ("Tiefling", Pantheon::Human),
];

impl Pantheon {
    /// The key this pantheon is stored under in the dataset.
    pub fn key(self) -> &'static str {
        match self {
            Self::Human => "Human deities",
            Self::Morndinsamman => "Morndinsamman",
            Self::GoldenHills => "Lords of the Golden Hills",
            Self::YondallasChildren => "Yondalla's Children",
            Self::Seldarine => "Seldarine",
            Self::Orcish => "Orcish pantheon",
            Self::DarkSeldarine => "Dark Seldarine",
        }
    }

    /// Map a race, or its subrace when one exists, to a pantheon.
    ///
    /// The subrace entry wins over the race entry: a Drow elf worships the
    /// Dark Seldarine, not the Seldarine.
    pub fn of(race: &str, subrace: Option<&str>) -> GenResult<Self> {
        RACE_PANTHEONS
            .iter()
            .find(|(name, _)| Some(*name) == subrace)
            .or_else(|| RACE_PANTHEONS.iter().find(|(name, _)| *name == race))
            .map(|(_, pantheon)| *pantheon)
            .ok_or_else(|| GenError::NoPantheonMapping {
                race: race.to_string(),
                subrace: subrace.map(str::to_string),
            })
    }
}

impl std::fmt::Display for Pantheon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Validate the fixed tables against a loaded dataset.
///
/// Every class must belong to an archetype group, and every race and
/// subrace must resolve to a pantheon that the dataset actually carries.
/// Run this once at startup; a failure means the dataset and the engine's
/// tables have drifted apart.
pub fn validate_tables(dataset: &Dataset) -> GenResult<()> {
    for class_name in dataset.classes.keys() {
        ClassGroup::of(class_name)?;
    }

    for (race_name, race) in &dataset.races {
        let pantheon = Pantheon::of(race_name, None)?;
        require_pantheon(dataset, pantheon)?;
        for subrace_name in &race.subraces {
            let pantheon = Pantheon::of(race_name, Some(subrace_name))?;
            require_pantheon(dataset, pantheon)?;
        }
        // The mixed-race deity rule draws from the human pantheon too.
        if race_name == "Half-Elf" || race_name == "Half-Orc" {
            require_pantheon(dataset, Pantheon::Human)?;
        }
    }

    Ok(())
}

fn require_pantheon(dataset: &Dataset, pantheon: Pantheon) -> GenResult<()> {
    let deities = dataset
        .deities
        .get(pantheon.key())
        .ok_or_else(|| GenError::UnknownPantheon(pantheon.key().to_string()))?;
    if deities.is_empty() {
        return Err(GenError::UnknownPantheon(pantheon.key().to_string()));
    }
    Ok(())
}

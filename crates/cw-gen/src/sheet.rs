//! Character sheet formatting: raw fields to human-readable strings.

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// A character's attributes rendered as display strings.
///
/// A pure derivation from a finished [`Character`]: building a sheet never
/// fails for a character produced by
/// [`generate`](crate::generate::generate), never mutates the character,
/// and is deterministic. Display and export collaborators read these
/// fields; they must not re-derive anything from the raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// One-line summary: subrace, class, subclass, alignment, gender.
    pub summary: String,
    /// One line per ability, `"STR\t15 (+2)"`, in dataset order.
    pub ability_scores: String,
    /// Level-1 hit points.
    pub hit_points: String,
    /// Base armor class.
    pub armor_class: String,
    /// Walking speed in feet.
    pub speed: String,
    /// Comma-joined skill proficiencies.
    pub skills: String,
    /// Comma-joined non-skill proficiencies.
    pub proficiencies: String,
    /// Comma-joined saving throw proficiencies.
    pub saving_throws: String,
    /// Comma-joined racial traits.
    pub traits: String,
    /// Comma-joined languages.
    pub languages: String,
    /// The character's deity.
    pub deity: String,
    /// Pluralized inventory line, e.g. `"2 Handaxes, 1 Longsword"`.
    pub inventory: String,
    /// Portrait lookup key for external asset resolution.
    pub avatar_key: String,
}

impl CharacterSheet {
    /// Render a finished character into display strings.
    pub fn from_character(character: &Character) -> Self {
        let ability_scores = character
            .abilities
            .iter()
            .map(|a| format!("{}\t{} ({:+})", a.ability, a.score, a.modifier))
            .collect::<Vec<_>>()
            .join("\n");

        // Naive pluralization: a trailing 's' when carrying more than one.
        let inventory = character
            .equipment
            .iter()
            .map(|(item, &quantity)| {
                if quantity > 1 {
                    format!("{quantity} {item}s")
                } else {
                    format!("{quantity} {item}")
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            summary: character.to_string(),
            ability_scores,
            hit_points: character.hit_points.to_string(),
            armor_class: character.armor_class.to_string(),
            speed: character.speed.to_string(),
            skills: character.skills.join(", "),
            proficiencies: character.proficiencies.join(", "),
            saving_throws: character.saving_throws.join(", "),
            traits: character.traits.join(", "),
            languages: character.languages.join(", "),
            deity: character.deity.clone(),
            inventory,
            avatar_key: character.avatar_key.clone(),
        }
    }

    /// Label/value pairs in display order, for collaborators that want the
    /// sheet as a mapping.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Ability scores", self.ability_scores.as_str()),
            ("Hit points", self.hit_points.as_str()),
            ("Armor class", self.armor_class.as_str()),
            ("Speed", self.speed.as_str()),
            ("Skills", self.skills.as_str()),
            ("Proficiencies", self.proficiencies.as_str()),
            ("Saving throws", self.saving_throws.as_str()),
            ("Traits", self.traits.as_str()),
            ("Languages", self.languages.as_str()),
            ("Deity", self.deity.as_str()),
            ("Base inventory", self.inventory.as_str()),
            ("Avatar", self.avatar_key.as_str()),
        ]
    }
}

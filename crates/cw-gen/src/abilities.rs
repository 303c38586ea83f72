//! Ability scores: rolling methods and the modifier formula.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// The fixed standard-array values, assigned to abilities by random
/// permutation.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// How raw ability scores are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityMethod {
    /// Distribute the fixed standard array across abilities at random.
    Standard,
    /// Roll 4d6 per ability and sum the highest three.
    Roll,
}

impl AbilityMethod {
    /// Parse a method from its lowercase name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "roll" => Some(Self::Roll),
            _ => None,
        }
    }
}

impl std::fmt::Display for AbilityMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Roll => write!(f, "roll"),
        }
    }
}

/// A single resolved ability: final score and derived modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    /// Ability name as listed in the dataset (e.g. "STR").
    pub ability: String,
    /// Final score, racial bonuses included.
    pub score: i32,
    /// Modifier derived from the score.
    pub modifier: i32,
}

/// The modifier for a score: `floor((score - 10) / 2)`.
///
/// Floors toward negative infinity, so a score of 7 gives -2, not -1.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Draw six raw scores (bonuses not yet applied) using the given method.
pub fn roll_raw_scores(method: AbilityMethod, rng: &mut StdRng) -> [i32; 6] {
    match method {
        AbilityMethod::Standard => {
            let mut values = STANDARD_ARRAY;
            values.shuffle(rng);
            values
        }
        AbilityMethod::Roll => std::array::from_fn(|_| roll_4d6_drop_lowest(rng)),
    }
}

/// Roll 4d6 and sum the highest three.
pub fn roll_4d6_drop_lowest(rng: &mut StdRng) -> i32 {
    let mut dice: [i32; 4] = std::array::from_fn(|_| rng.random_range(1..=6));
    dice.sort_unstable();
    dice.iter().skip(1).sum()
}

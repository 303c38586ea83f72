//! Error types for the generation engine.

/// Alias for `Result<T, GenError>`.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while resolving a character.
///
/// All of these indicate a data contract violation (dataset/engine table
/// drift or a malformed record), not a recoverable condition. Generation
/// is never retried.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A class name has no entry in the fixed archetype-group table.
    #[error("class '{0}' has no archetype group mapping")]
    UnknownClassGroup(String),

    /// A race (and its subrace, if any) has no entry in the fixed
    /// race-to-pantheon table.
    #[error("no pantheon mapping for race '{race}' (subrace {subrace:?})")]
    NoPantheonMapping {
        /// The character's race.
        race: String,
        /// The character's subrace, when one was rolled.
        subrace: Option<String>,
    },

    /// A class asks to choose more skills than its list offers.
    #[error("class '{class}' asks to choose {requested} skills but lists only {available}")]
    SkillChoice {
        /// The malformed class.
        class: String,
        /// How many skills the class wants chosen.
        requested: usize,
        /// How many skills the class lists.
        available: usize,
    },

    /// A race referenced during generation is missing from the dataset.
    #[error("race '{0}' not found in dataset")]
    UnknownRace(String),

    /// A subrace referenced during generation is missing from the dataset.
    #[error("subrace '{0}' not found in dataset")]
    UnknownSubrace(String),

    /// A class referenced during generation is missing from the dataset.
    #[error("class '{0}' not found in dataset")]
    UnknownClass(String),

    /// A pantheon named by the race-to-pantheon table is missing from the
    /// dataset.
    #[error("pantheon '{0}' not found in dataset")]
    UnknownPantheon(String),

    /// An ability required for a derived stat is missing from the character.
    #[error("ability '{0}' not present on character")]
    MissingAbility(String),

    /// A uniform pick was attempted over an empty list.
    #[error("cannot pick from empty list of {0}")]
    EmptyChoice(&'static str),
}

//! The resolution engine: ordered steps that turn independent random picks
//! into a mutually consistent character.
//!
//! Each step is a function of (character state, dataset, RNG). The order is
//! load-bearing: later steps read fields earlier steps produce, so no step
//! may be skipped or reordered.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use cw_data::{Class, Dataset, Race, Subrace};

use crate::abilities::{AbilityMethod, AbilityScore, ability_modifier, roll_raw_scores};
use crate::character::{Character, Gender};
use crate::error::{GenError, GenResult};
use crate::tables::{ClassGroup, Pantheon};

/// The class whose deity must match its subclass domain.
const CLERIC: &str = "Cleric";

/// Races whose starting proficiencies are skills and fold into the skill
/// list instead of the proficiency list. The published ruleset excludes
/// these two from the race+subrace proficiency union even when a distinct
/// subrace exists.
const SKILL_PROFICIENCY_RACES: &[&str] = &["Half-Orc", "Elf"];

/// Mixed-ancestry races that also draw deities from the human pantheon.
const MIXED_PANTHEON_RACES: &[&str] = &["Half-Elf", "Half-Orc"];

/// Generate a complete level-1 character from the dataset.
///
/// Deterministic for a given RNG seed. Any error indicates a data contract
/// violation (see [`GenError`]); run
/// [`validate_tables`](crate::tables::validate_tables) at startup to catch
/// table drift before consuming randomness.
pub fn generate(
    dataset: &Dataset,
    method: AbilityMethod,
    rng: &mut StdRng,
) -> GenResult<Character> {
    let mut character = pick_core(dataset, rng)?;
    roll_subrace(&mut character, dataset, rng)?;
    roll_subclass(&mut character, dataset, rng)?;
    roll_abilities(&mut character, dataset, method, rng)?;
    derive_avatar_key(&mut character)?;
    derive_combat_stats(&mut character)?;
    roll_skills(&mut character, dataset, rng)?;
    roll_proficiencies(&mut character, dataset)?;
    roll_deity(&mut character, dataset, rng)?;
    Ok(character)
}

/// Step 1 and 2: uniform core picks plus the fields copied straight from
/// the chosen race and class records.
fn pick_core(dataset: &Dataset, rng: &mut StdRng) -> GenResult<Character> {
    let gender = *[Gender::Female, Gender::Male]
        .choose(rng)
        .ok_or(GenError::EmptyChoice("genders"))?;
    let alignment = dataset
        .alignments
        .choose(rng)
        .ok_or(GenError::EmptyChoice("alignments"))?
        .clone();
    let (race_name, race) = pick_map_entry(&dataset.races, "races", rng)?;
    let (class_name, class) = pick_map_entry(&dataset.classes, "classes", rng)?;

    Ok(Character {
        gender,
        alignment,
        race: race_name.clone(),
        class_name: class_name.clone(),
        base_hit_die: class.hit_die,
        speed: race.speed,
        saving_throws: class.saving_throws.clone(),
        traits: race.racial_traits.clone(),
        languages: race.languages.clone(),
        equipment: class.starting_equipment.clone(),
        subrace: None,
        subclass: None,
        abilities: Vec::new(),
        avatar_key: String::new(),
        hit_points: 0,
        armor_class: 0,
        skills: Vec::new(),
        proficiencies: Vec::new(),
        deity: String::new(),
    })
}

/// Step 3: uniform pick among the race's subraces, when it has any.
fn roll_subrace(character: &mut Character, dataset: &Dataset, rng: &mut StdRng) -> GenResult<()> {
    let race = lookup_race(dataset, &character.race)?;
    character.subrace = race.subraces.choose(rng).cloned();
    Ok(())
}

/// Step 4: uniform pick among the class's subclasses, when it has any.
fn roll_subclass(character: &mut Character, dataset: &Dataset, rng: &mut StdRng) -> GenResult<()> {
    let class = lookup_class(dataset, &character.class_name)?;
    character.subclass = class.subclasses.choose(rng).cloned();
    Ok(())
}

/// Step 5: raw scores per the chosen method, racial bonuses, modifiers.
fn roll_abilities(
    character: &mut Character,
    dataset: &Dataset,
    method: AbilityMethod,
    rng: &mut StdRng,
) -> GenResult<()> {
    let race = lookup_race(dataset, &character.race)?;
    let subrace_bonus = match &character.subrace {
        Some(name) => Some(&lookup_subrace(dataset, name)?.ability_bonus),
        None => None,
    };

    let raw = roll_raw_scores(method, rng);
    character.abilities = dataset
        .ability_scores
        .iter()
        .zip(raw)
        .map(|(ability, roll)| {
            let mut score = roll + bonus_for(&race.ability_bonus, ability);
            if let Some(bonus) = subrace_bonus {
                score += bonus_for(bonus, ability);
            }
            AbilityScore {
                ability: ability.clone(),
                score,
                modifier: ability_modifier(score),
            }
        })
        .collect();
    Ok(())
}

/// Step 6: `{archetype group}_{race}_{gender initial}`.
fn derive_avatar_key(character: &mut Character) -> GenResult<()> {
    let group = ClassGroup::of(&character.class_name)?;
    character.avatar_key = format!(
        "{}_{}_{}",
        group,
        character.race,
        character.gender.initial()
    );
    Ok(())
}

/// Step 7: hit points and armor class from the rolled modifiers.
fn derive_combat_stats(character: &mut Character) -> GenResult<()> {
    let con = character
        .modifier("CON")
        .ok_or_else(|| GenError::MissingAbility("CON".to_string()))?;
    let dex = character
        .modifier("DEX")
        .ok_or_else(|| GenError::MissingAbility("DEX".to_string()))?;
    character.hit_points = character.base_hit_die + con;
    character.armor_class = 10 + dex;
    Ok(())
}

/// Step 8: sample the class's skill choice without replacement; Elf and
/// Half-Orc fold their skill-flavored racial proficiencies in on top.
fn roll_skills(character: &mut Character, dataset: &Dataset, rng: &mut StdRng) -> GenResult<()> {
    let class = lookup_class(dataset, &character.class_name)?;
    let choice = &class.chose_skills;
    if choice.chose > choice.skills.len() {
        return Err(GenError::SkillChoice {
            class: character.class_name.clone(),
            requested: choice.chose,
            available: choice.skills.len(),
        });
    }

    let mut skills: Vec<String> = choice
        .skills
        .choose_multiple(rng, choice.chose)
        .cloned()
        .collect();

    if SKILL_PROFICIENCY_RACES.contains(&character.race.as_str()) {
        let race = lookup_race(dataset, &character.race)?;
        for proficiency in &race.starting_proficiencies {
            let skill = proficiency.strip_prefix("Skill: ").unwrap_or(proficiency);
            if !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }
    }

    character.skills = skills;
    Ok(())
}

/// Step 9: class proficiencies minus saving-throw entries, plus the race's
/// and subrace's starting proficiencies when a distinct subrace exists and
/// the race is not one of the skill-folding pair.
fn roll_proficiencies(character: &mut Character, dataset: &Dataset) -> GenResult<()> {
    let class = lookup_class(dataset, &character.class_name)?;
    let mut proficiencies: Vec<String> = class
        .proficiencies
        .iter()
        .filter(|p| !p.contains("Saving Throw"))
        .cloned()
        .collect();

    let folds_into_skills = SKILL_PROFICIENCY_RACES.contains(&character.race.as_str());
    if let Some(subrace_name) = character.subrace.clone() {
        if !folds_into_skills {
            let race = lookup_race(dataset, &character.race)?;
            let subrace = lookup_subrace(dataset, &subrace_name)?;
            for proficiency in race
                .starting_proficiencies
                .iter()
                .chain(&subrace.starting_proficiencies)
            {
                if !proficiencies.contains(proficiency) {
                    proficiencies.push(proficiency.clone());
                }
            }
        }
    }

    character.proficiencies = proficiencies;
    Ok(())
}

/// Step 10: pantheon via the fixed table, then the cleric domain-match
/// rule, the mixed-race union rule, or a plain uniform pick.
fn roll_deity(character: &mut Character, dataset: &Dataset, rng: &mut StdRng) -> GenResult<()> {
    let pantheon = Pantheon::of(&character.race, character.subrace.as_deref())?;
    let deities = lookup_pantheon(dataset, pantheon)?;

    if character.class_name == CLERIC {
        let domain = character.subclass_name();
        let matching: Vec<&String> = deities
            .iter()
            .filter(|(_, deity)| deity.deity_domains.iter().any(|d| d == domain))
            .map(|(name, _)| name)
            .collect();
        if let Some(name) = matching.choose(rng) {
            character.deity = (*name).clone();
            return Ok(());
        }
        // No deity of the pantheon carries the rolled domain; any will do.
        character.deity = pick_deity_name(&deities.keys().collect::<Vec<_>>(), rng)?;
    } else if MIXED_PANTHEON_RACES.contains(&character.race.as_str()) {
        let human = lookup_pantheon(dataset, Pantheon::Human)?;
        let names: Vec<&String> = deities.keys().chain(human.keys()).collect();
        character.deity = pick_deity_name(&names, rng)?;
    } else {
        character.deity = pick_deity_name(&deities.keys().collect::<Vec<_>>(), rng)?;
    }

    Ok(())
}

fn pick_deity_name(names: &[&String], rng: &mut StdRng) -> GenResult<String> {
    names
        .choose(rng)
        .map(|name| (*name).clone())
        .ok_or(GenError::EmptyChoice("deities"))
}

fn pick_map_entry<'a, V>(
    map: &'a BTreeMap<String, V>,
    what: &'static str,
    rng: &mut StdRng,
) -> GenResult<(&'a String, &'a V)> {
    let entries: Vec<(&String, &V)> = map.iter().collect();
    entries.choose(rng).copied().ok_or(GenError::EmptyChoice(what))
}

fn lookup_race<'a>(dataset: &'a Dataset, name: &str) -> GenResult<&'a Race> {
    dataset
        .races
        .get(name)
        .ok_or_else(|| GenError::UnknownRace(name.to_string()))
}

fn lookup_subrace<'a>(dataset: &'a Dataset, name: &str) -> GenResult<&'a Subrace> {
    dataset
        .subraces
        .get(name)
        .ok_or_else(|| GenError::UnknownSubrace(name.to_string()))
}

fn lookup_class<'a>(dataset: &'a Dataset, name: &str) -> GenResult<&'a Class> {
    dataset
        .classes
        .get(name)
        .ok_or_else(|| GenError::UnknownClass(name.to_string()))
}

fn lookup_pantheon(
    dataset: &Dataset,
    pantheon: Pantheon,
) -> GenResult<&BTreeMap<String, cw_data::Deity>> {
    dataset
        .deities
        .get(pantheon.key())
        .ok_or_else(|| GenError::UnknownPantheon(pantheon.key().to_string()))
}

fn bonus_for(bonus: &BTreeMap<String, i32>, ability: &str) -> i32 {
    bonus.get(ability).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_data::{Deity, SkillChoice};
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn bonus(entries: &[(&str, i32)]) -> BTreeMap<String, i32> {
        entries
            .iter()
            .map(|(ability, delta)| (ability.to_string(), *delta))
            .collect()
    }

    fn race(
        speed: u32,
        proficiencies: &[&str],
        ability_bonus: &[(&str, i32)],
        subraces: &[&str],
    ) -> Race {
        Race {
            languages: strings(&["Common"]),
            racial_traits: strings(&["Trait"]),
            starting_proficiencies: strings(proficiencies),
            speed,
            ability_bonus: bonus(ability_bonus),
            subraces: strings(subraces),
        }
    }

    fn subrace(parent: &str, proficiencies: &[&str], ability_bonus: &[(&str, i32)]) -> Subrace {
        Subrace {
            race: parent.to_string(),
            racial_traits: strings(&["Subtrait"]),
            starting_proficiencies: strings(proficiencies),
            ability_bonus: bonus(ability_bonus),
        }
    }

    fn class(hit_die: i32, chose: usize, subclasses: &[&str]) -> Class {
        Class {
            hit_die,
            saving_throws: strings(&["STR", "CON"]),
            proficiencies: strings(&[
                "All Armor",
                "Shields",
                "Saving Throw: STR",
                "Saving Throw: CON",
            ]),
            chose_skills: SkillChoice {
                chose,
                skills: strings(&["Athletics", "Survival", "History", "Insight"]),
            },
            starting_equipment: [("Longsword".to_string(), 1), ("Handaxe".to_string(), 2)]
                .into_iter()
                .collect(),
            subclasses: strings(subclasses),
        }
    }

    fn deity(domains: &[&str]) -> Deity {
        Deity {
            deity_alignment: "Neutral Good".to_string(),
            deity_domains: strings(domains),
        }
    }

    fn pantheon(entries: &[(&str, &[&str])]) -> BTreeMap<String, Deity> {
        entries
            .iter()
            .map(|(name, domains)| (name.to_string(), deity(domains)))
            .collect()
    }

    /// A dataset exercising every special case: a subrace-less race, a
    /// subraced race, both skill-folding races, a mixed-ancestry race, a
    /// cleric, and a subclass-less class.
    fn test_dataset() -> Dataset {
        Dataset {
            ability_scores: strings(&["STR", "DEX", "CON", "INT", "WIS", "CHA"]),
            alignments: strings(&["Lawful Good", "Chaotic Neutral"]),
            races: [
                (
                    "Human".to_string(),
                    race(
                        30,
                        &[],
                        &[
                            ("STR", 1),
                            ("DEX", 1),
                            ("CON", 1),
                            ("INT", 1),
                            ("WIS", 1),
                            ("CHA", 1),
                        ],
                        &[],
                    ),
                ),
                (
                    "Dwarf".to_string(),
                    race(25, &["Battleaxes"], &[("CON", 2)], &["Hill Dwarf"]),
                ),
                (
                    "Elf".to_string(),
                    race(
                        30,
                        &["Skill: Perception"],
                        &[("DEX", 2)],
                        &["High Elf", "Drow"],
                    ),
                ),
                (
                    "Half-Orc".to_string(),
                    race(30, &["Skill: Intimidation"], &[("STR", 2), ("CON", 1)], &[]),
                ),
            ]
            .into_iter()
            .collect(),
            subraces: [
                (
                    "Hill Dwarf".to_string(),
                    subrace("Dwarf", &["Brewer's Supplies"], &[("WIS", 1)]),
                ),
                ("High Elf".to_string(), subrace("Elf", &[], &[("INT", 1)])),
                ("Drow".to_string(), subrace("Elf", &["Rapiers"], &[("CHA", 1)])),
            ]
            .into_iter()
            .collect(),
            classes: [
                ("Fighter".to_string(), class(10, 2, &["Champion"])),
                ("Cleric".to_string(), class(8, 2, &["Life", "War"])),
                ("Barbarian".to_string(), class(12, 2, &[])),
            ]
            .into_iter()
            .collect(),
            deities: [
                (
                    "Human deities".to_string(),
                    pantheon(&[("Lathander", &["Life"]), ("Tyr", &["War"])]),
                ),
                (
                    "Morndinsamman".to_string(),
                    pantheon(&[("Moradin", &["Knowledge", "War"]), ("Berronar", &["Life"])]),
                ),
                ("Seldarine".to_string(), pantheon(&[("Corellon", &["Light"])])),
                ("Dark Seldarine".to_string(), pantheon(&[("Lolth", &["Trickery"])])),
                ("Orcish pantheon".to_string(), pantheon(&[("Gruumsh", &["War"])])),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Restrict the dataset so the uniform race/class picks are forced.
    fn only(race_name: &str, class_name: &str) -> Dataset {
        let mut dataset = test_dataset();
        dataset.races.retain(|name, _| name == race_name);
        dataset.classes.retain(|name, _| name == class_name);
        dataset
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn race_without_subraces_yields_none() {
        let dataset = only("Human", "Fighter");
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            assert_eq!(character.subrace, None);
            assert_eq!(character.subrace_name(), "Human");
        }
    }

    #[test]
    fn race_with_subraces_always_yields_one() {
        let dataset = only("Dwarf", "Fighter");
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            assert_eq!(character.subrace.as_deref(), Some("Hill Dwarf"));
        }
    }

    #[test]
    fn class_without_subclasses_yields_none() {
        let dataset = only("Human", "Barbarian");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(7)).unwrap();
        assert_eq!(character.subclass, None);
        assert_eq!(character.subclass_name(), "Barbarian");
    }

    #[test]
    fn direct_derivation_copies_race_and_class_fields() {
        let dataset = only("Dwarf", "Fighter");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(3)).unwrap();
        assert_eq!(character.base_hit_die, 10);
        assert_eq!(character.speed, 25);
        assert_eq!(character.saving_throws, strings(&["STR", "CON"]));
        assert_eq!(character.traits, strings(&["Trait"]));
        assert_eq!(character.languages, strings(&["Common"]));
        assert_eq!(character.equipment["Handaxe"], 2);
    }

    #[test]
    fn subrace_bonuses_stack_on_race_bonuses() {
        let dataset = only("Dwarf", "Fighter");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(11)).unwrap();
        // Raw standard values plus CON +2 (Dwarf) and WIS +1 (Hill Dwarf):
        // the full multiset shifts by exactly those deltas.
        let mut scores: Vec<i32> = character.abilities.iter().map(|a| a.score).collect();
        let con = character.ability("CON").unwrap();
        let wis = character.ability("WIS").unwrap();
        assert!(STANDARD_SORTED.contains(&(con.score - 2)));
        assert!(STANDARD_SORTED.contains(&(wis.score - 1)));
        scores.sort_unstable();
        let total: i32 = scores.iter().sum();
        let base: i32 = crate::abilities::STANDARD_ARRAY.iter().sum();
        assert_eq!(total, base + 3);
    }

    const STANDARD_SORTED: [i32; 6] = [8, 10, 12, 13, 14, 15];

    #[test]
    fn elf_skills_absorb_racial_skill_proficiencies() {
        let dataset = only("Elf", "Fighter");
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Roll, &mut rng(seed)).unwrap();
            assert!(character.skills.iter().any(|s| s == "Perception"));
            // The union may exceed the chosen count but never shrinks it.
            assert!(character.skills.len() >= 2);
            // The prefix never leaks through.
            assert!(!character.skills.iter().any(|s| s.starts_with("Skill: ")));
        }
    }

    #[test]
    fn half_orc_skills_absorb_racial_skill_proficiencies() {
        let dataset = only("Half-Orc", "Fighter");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(5)).unwrap();
        assert!(character.skills.iter().any(|s| s == "Intimidation"));
    }

    #[test]
    fn skills_are_distinct() {
        let dataset = only("Elf", "Fighter");
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            let mut deduped = character.skills.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), character.skills.len());
        }
    }

    #[test]
    fn proficiencies_exclude_saving_throws() {
        let dataset = only("Human", "Fighter");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(1)).unwrap();
        assert_eq!(character.proficiencies, strings(&["All Armor", "Shields"]));
    }

    #[test]
    fn subraced_race_unions_starting_proficiencies() {
        let dataset = only("Dwarf", "Fighter");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(9)).unwrap();
        assert!(character.proficiencies.iter().any(|p| p == "Battleaxes"));
        assert!(character.proficiencies.iter().any(|p| p == "Brewer's Supplies"));
    }

    #[test]
    fn elf_is_excluded_from_proficiency_union_despite_subrace() {
        let dataset = only("Elf", "Fighter");
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            // Even a Drow (which grants Rapiers) keeps the class list only.
            assert_eq!(character.proficiencies, strings(&["All Armor", "Shields"]));
        }
    }

    #[test]
    fn overlong_skill_choice_is_fatal() {
        let mut dataset = only("Human", "Fighter");
        dataset
            .classes
            .get_mut("Fighter")
            .unwrap()
            .chose_skills
            .chose = 9;
        let err = generate(&dataset, AbilityMethod::Standard, &mut rng(2)).unwrap_err();
        assert!(matches!(
            err,
            GenError::SkillChoice {
                requested: 9,
                available: 4,
                ..
            }
        ));
    }

    #[test]
    fn avatar_key_combines_group_race_and_gender() {
        let dataset = only("Human", "Fighter");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(4)).unwrap();
        let expected = format!("Warrior_Human_{}", character.gender.initial());
        assert_eq!(character.avatar_key, expected);
    }

    #[test]
    fn combat_stats_follow_modifiers() {
        let dataset = test_dataset();
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Roll, &mut rng(seed)).unwrap();
            let con = character.modifier("CON").unwrap();
            let dex = character.modifier("DEX").unwrap();
            assert_eq!(character.hit_points, character.base_hit_die + con);
            assert_eq!(character.armor_class, 10 + dex);
        }
    }

    #[test]
    fn cleric_deity_matches_subclass_domain() {
        let mut dataset = only("Human", "Cleric");
        dataset.classes.get_mut("Cleric").unwrap().subclasses = strings(&["Life"]);
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            // Lathander is the only Life-domain deity in the pantheon.
            assert_eq!(character.deity, "Lathander");
        }
    }

    #[test]
    fn cleric_without_domain_match_falls_back_to_pantheon() {
        let mut dataset = only("Human", "Cleric");
        dataset.classes.get_mut("Cleric").unwrap().subclasses = strings(&["Trickery"]);
        for seed in 0..20 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            assert!(character.deity == "Lathander" || character.deity == "Tyr");
        }
    }

    #[test]
    fn half_orc_draws_from_orcish_and_human_pantheons() {
        let dataset = only("Half-Orc", "Fighter");
        let mut seen_human = false;
        for seed in 0..50 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            assert!(["Gruumsh", "Lathander", "Tyr"].contains(&character.deity.as_str()));
            if character.deity != "Gruumsh" {
                seen_human = true;
            }
        }
        assert!(seen_human, "union never produced a human deity in 50 draws");
    }

    #[test]
    fn drow_worships_the_dark_seldarine() {
        let dataset = only("Elf", "Fighter");
        let mut seen_drow = false;
        for seed in 0..50 {
            let character = generate(&dataset, AbilityMethod::Standard, &mut rng(seed)).unwrap();
            match character.subrace.as_deref() {
                Some("Drow") => {
                    seen_drow = true;
                    assert_eq!(character.deity, "Lolth");
                }
                Some("High Elf") => assert_eq!(character.deity, "Corellon"),
                other => panic!("unexpected subrace {other:?}"),
            }
        }
        assert!(seen_drow, "no Drow rolled in 50 draws");
    }

    #[test]
    fn same_seed_same_character() {
        let dataset = test_dataset();
        let a = generate(&dataset, AbilityMethod::Roll, &mut rng(99)).unwrap();
        let b = generate(&dataset, AbilityMethod::Roll, &mut rng(99)).unwrap();
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn seeded_human_fighter_end_to_end() {
        let dataset = only("Human", "Fighter");
        let character = generate(&dataset, AbilityMethod::Standard, &mut rng(42)).unwrap();

        assert_eq!(character.race, "Human");
        assert_eq!(character.class_name, "Fighter");
        assert_eq!(character.subrace, None);
        assert_eq!(character.subclass.as_deref(), Some("Champion"));

        // Standard array permuted, plus Human's +1 to every ability.
        let mut raw: Vec<i32> = character.abilities.iter().map(|a| a.score - 1).collect();
        raw.sort_unstable();
        assert_eq!(raw, STANDARD_SORTED.to_vec());

        let con = character.modifier("CON").unwrap();
        let dex = character.modifier("DEX").unwrap();
        assert_eq!(character.hit_points, 10 + con);
        assert_eq!(character.armor_class, 10 + dex);
        assert!(character.deity == "Lathander" || character.deity == "Tyr");
    }

    proptest! {
        #[test]
        fn every_field_is_populated(seed in any::<u64>(), roll_method in any::<bool>()) {
            let dataset = test_dataset();
            let method = if roll_method { AbilityMethod::Roll } else { AbilityMethod::Standard };
            let character = generate(&dataset, method, &mut rng(seed)).unwrap();

            prop_assert!(!character.alignment.is_empty());
            prop_assert!(!character.race.is_empty());
            prop_assert!(!character.class_name.is_empty());
            prop_assert!(character.base_hit_die > 0);
            prop_assert!(character.speed > 0);
            prop_assert!(!character.saving_throws.is_empty());
            prop_assert!(!character.traits.is_empty());
            prop_assert!(!character.languages.is_empty());
            prop_assert!(!character.equipment.is_empty());
            prop_assert_eq!(character.abilities.len(), 6);
            prop_assert!(!character.avatar_key.is_empty());
            prop_assert!(!character.skills.is_empty());
            prop_assert!(!character.proficiencies.is_empty());
            prop_assert!(!character.deity.is_empty());
            for ability in &character.abilities {
                prop_assert_eq!(ability.modifier, ability_modifier(ability.score));
            }
        }
    }
}

//! Skill, passive, rune and paragon rolls.

use rand::Rng;
use rand::seq::SliceRandom;

use super::class_data::{ClassData, PARAGON};
use super::{NO_RUNE, PASSIVE_SLOTS, RUNE_CODES, SKILL_SLOTS};

/// Attempts an elective roll gets before settling for its last shuffle.
pub const ELECTIVE_RETRIES: usize = 20;

/// Pick one random skill from each group, in group order.
pub fn standard_build<R: Rng + ?Sized>(class: &ClassData, rng: &mut R) -> String {
    class
        .active_groups
        .iter()
        .filter_map(|group| {
            let codes: Vec<char> = group.chars().collect();
            codes.choose(rng).copied()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectiveRoll {
    pub skills: String,
    /// Every retry was rejected; `skills` is the last attempt as rolled.
    pub exhausted: bool,
}

/// Pick any six skills such that slot 0 holds a left-click skill (or a
/// primary, with `force_primary`) and at most one code from `only_one`
/// is present.
pub fn elective_build<R: Rng + ?Sized>(
    class: &ClassData,
    only_one: &str,
    force_primary: bool,
    rng: &mut R,
) -> ElectiveRoll {
    let mut codes: Vec<char> = class.active_codes().chars().collect();
    let slots = SKILL_SLOTS.min(codes.len());

    for attempt in 1..=ELECTIVE_RETRIES {
        codes.shuffle(rng);

        let lead = codes[..slots].iter().position(|&code| {
            if force_primary {
                class.active_groups[0].contains(code)
            } else {
                !class.no_left.contains(code)
            }
        });
        let Some(lead) = lead else {
            tracing::debug!("Attempt {}: no skill fits slot 0", attempt);
            continue;
        };
        codes.swap(0, lead);

        let excluded = codes[..slots].iter().filter(|&&code| only_one.contains(code)).count();
        if excluded > 1 {
            tracing::debug!("Attempt {}: {} skills from exclusion group", attempt, excluded);
            continue;
        }

        return ElectiveRoll {
            skills: codes[..slots].iter().collect(),
            exhausted: false,
        };
    }

    tracing::warn!(
        "Elective {} roll ran out of tries; build may not be valid",
        class.name
    );
    ElectiveRoll {
        skills: codes[..slots].iter().collect(),
        exhausted: true,
    }
}

/// Four distinct passives.
pub fn roll_passives<R: Rng + ?Sized>(class: &ClassData, rng: &mut R) -> String {
    let codes: Vec<char> = class.passive_codes.chars().collect();
    codes.choose_multiple(rng, PASSIVE_SLOTS).collect()
}

/// Six rune selection codes, possibly including "no rune".
pub fn roll_runes<R: Rng + ?Sized>(allow_none: bool, rng: &mut R) -> String {
    let mut choices: Vec<char> = RUNE_CODES.chars().collect();
    if allow_none {
        choices.push(NO_RUNE);
    }
    (0..SKILL_SLOTS)
        .map(|_| choices[rng.gen_range(0..choices.len())])
        .collect()
}

/// One paragon category with its choices in rolled priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagonPriority {
    pub category: &'static str,
    pub order: Vec<&'static str>,
}

pub fn roll_paragon<R: Rng + ?Sized>(rng: &mut R) -> Vec<ParagonPriority> {
    PARAGON
        .iter()
        .map(|category| {
            let mut order = category.choices.to_vec();
            order.shuffle(rng);
            ParagonPriority {
                category: category.category,
                order,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::class_by_tag;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_standard_build_one_per_group() {
        let class = class_by_tag("barbarian").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let skills = standard_build(class, &mut rng);
            assert_eq!(skills.len(), SKILL_SLOTS);
            for (code, group) in skills.chars().zip(class.active_groups) {
                assert!(group.contains(code), "{code} not in {group}");
            }
        }
    }

    #[test]
    fn test_elective_left_click_and_exclusion() {
        let class = class_by_tag("monk").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let roll = elective_build(class, class.only_one, false, &mut rng);
            if roll.exhausted {
                continue;
            }
            let first = roll.skills.chars().next().unwrap();
            assert!(!class.no_left.contains(first));
            let mantras = roll.skills.chars().filter(|&c| class.only_one.contains(c)).count();
            assert!(mantras <= 1);
        }
    }

    #[test]
    fn test_elective_force_primary() {
        let class = class_by_tag("witch-doctor").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let roll = elective_build(class, "", true, &mut rng);
            if !roll.exhausted {
                let first = roll.skills.chars().next().unwrap();
                assert!(class.active_groups[0].contains(first));
            }
        }
    }

    #[test]
    fn test_elective_skills_are_distinct() {
        let class = class_by_tag("wizard").unwrap();
        let roll = elective_build(class, "fTO", false, &mut StdRng::seed_from_u64(4));
        let mut codes: Vec<char> = roll.skills.chars().collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), SKILL_SLOTS);
    }

    #[test]
    fn test_elective_exhaustion_is_soft() {
        // Every code excluded: no roll can pass, but six skills still come back.
        let class = class_by_tag("crusader").unwrap();
        let everything = class.active_codes();
        let roll = elective_build(class, &everything, false, &mut StdRng::seed_from_u64(5));
        assert!(roll.exhausted);
        assert_eq!(roll.skills.len(), SKILL_SLOTS);
    }

    #[test]
    fn test_roll_passives_distinct() {
        let class = class_by_tag("demon-hunter").unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let passives = roll_passives(class, &mut rng);
        assert_eq!(passives.len(), PASSIVE_SLOTS);
        let mut codes: Vec<char> = passives.chars().collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), PASSIVE_SLOTS);
        assert!(passives.chars().all(|c| class.passive_codes.contains(c)));
    }

    #[test]
    fn test_roll_runes_alphabet() {
        let mut rng = StdRng::seed_from_u64(8);
        let runes = roll_runes(false, &mut rng);
        assert_eq!(runes.len(), SKILL_SLOTS);
        assert!(runes.chars().all(|c| RUNE_CODES.contains(c)));

        let with_none: String = (0..50).map(|_| roll_runes(true, &mut rng)).collect();
        assert!(with_none.contains(NO_RUNE));
    }

    #[test]
    fn test_roll_paragon_permutes_each_category() {
        let paragon = roll_paragon(&mut StdRng::seed_from_u64(9));
        assert_eq!(paragon.len(), PARAGON.len());
        for (rolled, category) in paragon.iter().zip(PARAGON.iter()) {
            assert_eq!(rolled.category, category.category);
            let mut order = rolled.order.clone();
            let mut expected = category.choices.to_vec();
            order.sort_unstable();
            expected.sort_unstable();
            assert_eq!(order, expected);
        }
    }
}

//! Random build generator.
//!
//! Rolls six active skills, four passives and six rune choices for a class,
//! producing a calculator code and tooltip-ready links.

pub mod class_data;
pub mod generator;
pub mod render;

use rand::Rng;

pub use class_data::{ActiveSkill, CLASSES, ClassData, PARAGON, ParagonCategory};
pub use generator::{
    ELECTIVE_RETRIES, ElectiveRoll, ParagonPriority, elective_build, roll_paragon, roll_passives,
    roll_runes, standard_build,
};
pub use render::{SiteLinks, render_html, slugify};

use crate::{Error, Result};

/// Number of active skill slots in a build.
pub const SKILL_SLOTS: usize = 6;
/// Number of passive slots in a build.
pub const PASSIVE_SLOTS: usize = 4;
/// Rune selection codes, in rune-index order.
pub const RUNE_CODES: &str = "aZbYc";
/// Rune selection code meaning "no rune".
pub const NO_RUNE: char = '.';
/// Exclusion group applied to wizard armors on request.
pub const WIZARD_ARMOR_EXCLUSION: &str = "fTO";

/// Rune index for a selection code; `None` for [`NO_RUNE`] or an unknown code.
pub fn rune_index(code: char) -> Option<usize> {
    RUNE_CODES.chars().position(|c| c == code)
}

/// Look up a class by its URL tag.
pub fn class_by_tag(tag: &str) -> Result<&'static ClassData> {
    CLASSES
        .iter()
        .find(|class| class.tag == tag)
        .ok_or_else(|| Error::UnknownClass(tag.to_string()))
}

impl ClassData {
    /// All active skill codes, group by group.
    pub fn active_codes(&self) -> String {
        self.active_groups.concat()
    }

    /// Index of the group an active skill belongs to.
    pub fn group_of(&self, code: char) -> Option<usize> {
        self.active_groups.iter().position(|group| group.contains(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// One skill from each group.
    Standard,
    /// Any six skills, subject to the left-click and exclusion rules.
    Elective,
}

impl BuildMode {
    pub fn label(&self) -> &'static str {
        match self {
            BuildMode::Standard => "standard mode",
            BuildMode::Elective => "elective mode",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Class tag; a random class when `None`.
    pub class: Option<String>,
    pub elective: bool,
    /// Elective only: slot 0 must hold a primary skill.
    pub force_primary: bool,
    pub allow_no_rune: bool,
    /// Allow at most one wizard armor per build.
    pub wizard_armor_exclusion: bool,
    pub paragon: bool,
}

impl BuildOptions {
    /// Codes of which at most one may be rolled for `class`.
    pub fn exclusion_codes(&self, class: &ClassData) -> &'static str {
        if class.tag == "wizard" {
            if self.wizard_armor_exclusion { WIZARD_ARMOR_EXCLUSION } else { "" }
        } else {
            class.only_one
        }
    }
}

#[derive(Debug, Clone)]
pub struct Build {
    pub class: &'static ClassData,
    pub mode: BuildMode,
    /// Six active skill codes, slot order.
    pub skills: String,
    /// Four passive codes.
    pub passives: String,
    /// Six rune selection codes, parallel to `skills`.
    pub runes: String,
    /// The elective roll ran out of retries; the skills may break a rule.
    pub exhausted: bool,
    pub paragon: Vec<ParagonPriority>,
}

impl Build {
    /// Calculator fragment: `skills!passives!runes`.
    pub fn calculator_code(&self) -> String {
        format!("{}!{}!{}", self.skills, self.passives, self.runes)
    }

    /// Active skills paired with their rune selection codes.
    pub fn slots(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.skills.chars().zip(self.runes.chars())
    }
}

/// Roll a complete build.
pub fn generate<R: Rng + ?Sized>(options: &BuildOptions, rng: &mut R) -> Result<Build> {
    let class = match &options.class {
        Some(tag) => class_by_tag(tag)?,
        None => &CLASSES[rng.gen_range(0..CLASSES.len())],
    };
    tracing::debug!("Rolling {} build", class.name);

    let (mode, skills, exhausted) = if options.elective {
        let roll = elective_build(
            class,
            options.exclusion_codes(class),
            options.force_primary,
            rng,
        );
        (BuildMode::Elective, roll.skills, roll.exhausted)
    } else {
        (BuildMode::Standard, standard_build(class, rng), false)
    };

    let passives = roll_passives(class, rng);
    let runes = roll_runes(options.allow_no_rune, rng);
    let paragon = if options.paragon { roll_paragon(rng) } else { Vec::new() };

    Ok(Build {
        class,
        mode,
        skills,
        passives,
        runes,
        exhausted,
        paragon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rune_index() {
        assert_eq!(rune_index('a'), Some(0));
        assert_eq!(rune_index('Z'), Some(1));
        assert_eq!(rune_index('b'), Some(2));
        assert_eq!(rune_index('Y'), Some(3));
        assert_eq!(rune_index('c'), Some(4));
        assert_eq!(rune_index(NO_RUNE), None);
    }

    #[test]
    fn test_class_by_tag() {
        assert_eq!(class_by_tag("witch-doctor").unwrap().name, "Witch Doctor");
        assert!(matches!(class_by_tag("necromancer"), Err(Error::UnknownClass(_))));
    }

    #[test]
    fn test_wizard_exclusion_is_per_roll() {
        let wizard = class_by_tag("wizard").unwrap();
        let on = BuildOptions { wizard_armor_exclusion: true, ..Default::default() };
        assert_eq!(on.exclusion_codes(wizard), "fTO");
        assert_eq!(BuildOptions::default().exclusion_codes(wizard), "");
        assert_eq!(wizard.only_one, "");

        let monk = class_by_tag("monk").unwrap();
        assert_eq!(on.exclusion_codes(monk), "hiQk");
    }

    #[test]
    fn test_generate_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = BuildOptions { class: Some("crusader".into()), ..Default::default() };
        let build = generate(&options, &mut rng).unwrap();
        assert_eq!(build.class.tag, "crusader");
        assert_eq!(build.mode, BuildMode::Standard);
        assert_eq!(build.skills.len(), SKILL_SLOTS);
        assert_eq!(build.passives.len(), PASSIVE_SLOTS);
        assert_eq!(build.runes.len(), SKILL_SLOTS);
        assert!(build.paragon.is_empty());

        let code = build.calculator_code();
        let parts: Vec<&str> = code.split('!').collect();
        assert_eq!(parts, [build.skills.as_str(), build.passives.as_str(), build.runes.as_str()]);
    }

    #[test]
    fn test_generate_is_seeded() {
        let options = BuildOptions { elective: true, paragon: true, ..Default::default() };
        let a = generate(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.class.tag, b.class.tag);
        assert_eq!(a.calculator_code(), b.calculator_code());
        assert_eq!(a.paragon, b.paragon);
    }
}

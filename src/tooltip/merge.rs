//! Skill + rune tooltip merging.
//!
//! The content service only renders stand-alone rune tooltips, so a combined
//! skill-and-rune tooltip is assembled locally: the rune's fields are pulled
//! out of its markup and re-rendered as an extension block inside the skill
//! tooltip's outer container.
//!
//! Extraction depends on the service's markup. The expected shape is pinned
//! as [`MARKUP_CONTRACT`]; any mismatch is reported as
//! [`Error::MarkupShape`] instead of producing a half-filled tooltip.

use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

/// Version tag of the rune/skill markup shape this module understands.
pub const MARKUP_CONTRACT: &str = "bnet-d3-tooltip-v1";

const CONTAINER_CLOSE: &str = "</div>";

/// Fields of a rune needed to decorate a skill tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuneFields {
    pub name: String,
    /// Description markup, line breaks removed.
    pub description: String,
    pub unlock_level: u32,
    pub letter: char,
}

struct RunePatterns {
    name: Regex,
    description: Regex,
    level: Regex,
    letter: Regex,
}

fn rune_patterns() -> &'static RunePatterns {
    static CACHE: OnceLock<RunePatterns> = OnceLock::new();
    CACHE.get_or_init(|| RunePatterns {
        name: Regex::new(r#"<h3 class="">(.+?)</h3>"#).expect("invalid regex"),
        description: Regex::new(r#"(?s)<div class="description">(.+?)</p"#).expect("invalid regex"),
        level: Regex::new(r"<em>([0-9]+)</em>").expect("invalid regex"),
        letter: Regex::new(r#"class="rune-([a-z])""#).expect("invalid regex"),
    })
}

fn shape_error(field: &'static str) -> Error {
    Error::MarkupShape {
        contract: MARKUP_CONTRACT,
        field,
    }
}

fn capture<'h>(re: &Regex, haystack: &'h str, field: &'static str) -> Result<&'h str> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| shape_error(field))
}

impl RuneFields {
    /// Extract rune fields from a stand-alone rune tooltip.
    pub fn extract(rune_html: &str) -> Result<Self> {
        let p = rune_patterns();
        let name = capture(&p.name, rune_html, "rune name")?.to_string();
        let description = capture(&p.description, rune_html, "rune description")?
            .replace(['\r', '\n'], "");
        let unlock_level = capture(&p.level, rune_html, "unlock level")?
            .parse()
            .map_err(|_| shape_error("unlock level"))?;
        let letter = capture(&p.letter, rune_html, "rune letter")?
            .chars()
            .next()
            .ok_or_else(|| shape_error("rune letter"))?;
        Ok(Self {
            name,
            description,
            unlock_level,
            letter,
        })
    }
}

/// Render the rune extension block placed inside a skill tooltip.
pub fn render_rune_extension(rune: &RuneFields) -> String {
    format!(
        concat!(
            r#"<div class="tooltip-extension rune-extension">"#,
            r#"<span class="d3-icon d3-icon-rune d3-icon-rune-large">"#,
            r#"<span class="rune-{letter}"></span>"#,
            r#"</span>"#,
            r#"<h3 class="header-3" >{name}</h3>"#,
            "{description}",
            r#"<p class="subtle">Unlocked at level <em>{level}</em></p>"#,
            r#"</div>"#,
        ),
        letter = rune.letter,
        name = rune.name,
        description = rune.description,
        level = rune.unlock_level,
    )
}

/// Insert `fragment` just before the skill tooltip's final `</div>`.
pub fn splice_into_skill(skill_html: &str, fragment: &str) -> Result<String> {
    let body = skill_html
        .trim_end()
        .strip_suffix(CONTAINER_CLOSE)
        .ok_or_else(|| shape_error("skill container close tag"))?;
    let mut merged = String::with_capacity(body.len() + fragment.len() + CONTAINER_CLOSE.len());
    merged.push_str(body);
    merged.push_str(fragment);
    merged.push_str(CONTAINER_CLOSE);
    Ok(merged)
}

/// Merge from fields the caller already has.
pub fn merge_structured(rune: &RuneFields, skill_html: &str) -> Result<String> {
    splice_into_skill(skill_html, &render_rune_extension(rune))
}

/// Merge a rendered rune tooltip into a rendered skill tooltip.
pub fn merge_skill_and_rune(rune_html: &str, skill_html: &str) -> Result<String> {
    let rune = RuneFields::extract(rune_html)?;
    merge_structured(&rune, skill_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNE: &str = concat!(
        r#"<div class="d3-tooltip d3-tooltip-rune">"#,
        r#"<div class="tooltip-head"><h3 class="">Frostbite</h3></div>"#,
        r#"<div class="tooltip-body"><span class="d3-icon d3-icon-rune"><span class="rune-a"></span></span>"#,
        "<div class=\"description\"><p>Slows the target\r\nby 60%.</p></div>",
        r#"<p class="subtle">Unlocked at level <em>12</em></p></div></div>"#,
    );

    const SKILL: &str = r#"<div class="d3-tooltip d3-tooltip-skill"><h3>Bash</h3><p>Smash it.</p></div>"#;

    #[test]
    fn test_extract_rune_fields() {
        let fields = RuneFields::extract(RUNE).unwrap();
        assert_eq!(fields.name, "Frostbite");
        assert_eq!(fields.description, "<p>Slows the targetby 60%.");
        assert_eq!(fields.unlock_level, 12);
        assert_eq!(fields.letter, 'a');
    }

    #[test]
    fn test_merge_places_extension_before_container_close() {
        let merged = merge_skill_and_rune(RUNE, SKILL).unwrap();
        assert!(merged.starts_with(r#"<div class="d3-tooltip d3-tooltip-skill"><h3>Bash</h3><p>Smash it.</p><div class="tooltip-extension rune-extension">"#));
        assert!(merged.ends_with("<em>12</em></p></div></div>"));
        assert!(merged.contains(r#"<span class="rune-a"></span>"#));
        assert!(merged.contains(r#"<h3 class="header-3" >Frostbite</h3>"#));
    }

    #[test]
    fn test_missing_rune_name_fails_loudly() {
        let html = RUNE.replace(r#"<h3 class="">"#, "<h3>");
        match RuneFields::extract(&html) {
            Err(Error::MarkupShape { field, contract }) => {
                assert_eq!(field, "rune name");
                assert_eq!(contract, MARKUP_CONTRACT);
            }
            other => panic!("expected markup shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_skill_without_container_close_fails() {
        let fields = RuneFields::extract(RUNE).unwrap();
        assert!(matches!(
            merge_structured(&fields, "<span>Bash</span>"),
            Err(Error::MarkupShape { field: "skill container close tag", .. })
        ));
    }

    #[test]
    fn test_trailing_whitespace_after_skill_is_tolerated() {
        let skill = format!("{SKILL}\n  ");
        let merged = merge_skill_and_rune(RUNE, &skill).unwrap();
        assert!(merged.ends_with("</div></div>"));
    }
}

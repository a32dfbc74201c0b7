//! HTML summary of a rolled build.
//!
//! Every link points at a page shape the tooltip router recognises, so the
//! rendered summary gets hover tooltips for free.

use std::fmt::Write;

use super::{Build, rune_index};
use crate::config::TooltipConfig;

/// Page-name form of a skill or passive name: lowercase, apostrophes and
/// dashes dropped, spaces turned into dashes.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|&c| c != '\'' && c != '-')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Site the rendered links point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    pub region: String,
    pub locale: String,
    pub domain: String,
    pub product: String,
}

impl SiteLinks {
    pub fn new(region: &str, locale: &str, domain: &str, product: &str) -> Self {
        Self {
            region: region.to_string(),
            locale: locale.to_string(),
            domain: domain.to_string(),
            product: product.to_string(),
        }
    }

    pub fn from_config(config: &TooltipConfig) -> Self {
        Self::new(
            &config.default_region,
            &config.default_locale,
            &config.site_domain,
            &config.product,
        )
    }

    fn root(&self) -> String {
        format!(
            "https://{}.{}/{}/{}/",
            self.region, self.domain, self.product, self.locale
        )
    }

    pub fn calculator_url(&self, build: &Build) -> String {
        format!(
            "{}calculator/{}#{}",
            self.root(),
            build.class.tag,
            build.calculator_code()
        )
    }

    pub fn class_base(&self, tag: &str) -> String {
        format!("{}class/{}/", self.root(), tag)
    }
}

/// Render a build as a heading plus skill and passive lists.
pub fn render_html(build: &Build, site: &SiteLinks) -> String {
    let class = build.class;
    let base = site.class_base(class.tag);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<h3><a href="{}" target="_blank">Random {} Build</a> ({})</h3>"#,
        site.calculator_url(build),
        class.name,
        build.mode.label()
    );

    out.push_str("<p>Skills:</p>\n<ul>\n");
    for (code, rune_code) in build.slots() {
        let Some(skill) = class.actives.get(&code) else {
            tracing::warn!("{} has no active skill {}", class.name, code);
            continue;
        };
        let group = class.group_of(code).map_or("", |g| class.groups[g]);
        let (rune_name, fragment) = match rune_index(rune_code) {
            Some(i) => {
                let fragment = skill
                    .rune_urls
                    .chars()
                    .nth(i)
                    .map(|letter| format!("#{letter}+"))
                    .unwrap_or_default();
                (skill.runes[i], fragment)
            }
            None => ("No Rune", String::new()),
        };
        let _ = writeln!(
            out,
            r#"<li>({}) <a href="{}active/{}{}">{} -- {}</a></li>"#,
            group,
            base,
            slugify(skill.name),
            fragment,
            skill.name,
            rune_name
        );
    }

    out.push_str("</ul>\n<p>Passives:</p>\n<ul>\n");
    for code in build.passives.chars() {
        let Some(name) = class.passives.get(&code) else {
            tracing::warn!("{} has no passive {}", class.name, code);
            continue;
        };
        let _ = writeln!(
            out,
            r#"<li><a href="{}passive/{}">{}</a></li>"#,
            base,
            slugify(name),
            name
        );
    }

    if !build.paragon.is_empty() {
        out.push_str("</ul>\n<p>Paragon:</p>\n<ul>\n");
        for priority in &build.paragon {
            let _ = writeln!(out, "<li>{}<ol>", priority.category);
            for choice in &priority.order {
                let _ = writeln!(out, "<li>{choice}</li>");
            }
            out.push_str("</ol></li>\n");
        }
    }
    out.push_str("</ul>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildMode, class_by_tag};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hammer of the Ancients"), "hammer-of-the-ancients");
        assert_eq!(slugify("The Devil's Anvil"), "the-devils-anvil");
        assert_eq!(slugify("Follow-Through"), "followthrough");
    }

    fn fixed_build() -> Build {
        Build {
            class: class_by_tag("barbarian").unwrap(),
            mode: BuildMode::Standard,
            skills: "aZYdfT".into(),
            passives: "aZbY".into(),
            runes: "a.cZbY".into(),
            exhausted: false,
            paragon: Vec::new(),
        }
    }

    #[test]
    fn test_render_html_links() {
        let site = SiteLinks::new("us", "en", "example.org", "d3");
        let html = render_html(&fixed_build(), &site);

        assert!(html.starts_with(
            r#"<h3><a href="https://us.example.org/d3/en/calculator/barbarian#aZYdfT!aZbY!a.cZbY" target="_blank">Random Barbarian Build</a> (standard mode)</h3>"#
        ));
        // Bash, rune index 0 -> first rune URL letter.
        assert!(html.contains(
            r#"<li>(Primary) <a href="https://us.example.org/d3/en/class/barbarian/active/bash#c+">Bash -- Frostbite</a></li>"#
        ));
        // No rune: plain skill link.
        assert!(html.contains(
            r#"<li>(Secondary) <a href="https://us.example.org/d3/en/class/barbarian/active/hammer-of-the-ancients">Hammer of the Ancients -- No Rune</a></li>"#
        ));
        assert_eq!(html.matches("/passive/").count(), 4);
        assert!(!html.contains("Paragon"));
        assert!(html.ends_with("</ul>\n"));
    }

    #[test]
    fn test_render_html_paragon() {
        let mut build = fixed_build();
        build.paragon = crate::build::roll_paragon(&mut rand::thread_rng());
        let html = render_html(&build, &SiteLinks::new("eu", "de", "example.org", "d3"));
        assert!(html.contains("<p>Paragon:</p>"));
        assert!(html.contains("<li>Offensive<ol>"));
    }
}

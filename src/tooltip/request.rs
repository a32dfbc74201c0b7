//! Tooltip request model: content kinds, classified requests, and cache keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of tooltip content a link points at.
///
/// Serialized with the content service's own type names (`item`, `skill`,
/// `skillAndRune`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipKind {
    Item,
    Recipe,
    Skill,
    Calculator,
    Rune,
    /// A skill link with a rune suffix: two fetches merged into one tooltip.
    SkillAndRune,
}

impl TooltipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Recipe => "recipe",
            Self::Skill => "skill",
            Self::Calculator => "calculator",
            Self::Rune => "rune",
            Self::SkillAndRune => "skillAndRune",
        }
    }

    /// Fetch path template relative to the service base.
    ///
    /// `SkillAndRune` has none: it is always split into a skill and a rune fetch.
    pub fn url_template(&self) -> Option<&'static str> {
        match self {
            Self::Item => Some("item/{key}"),
            Self::Recipe => Some("recipe/{key}"),
            Self::Skill => Some("skill/{folder}/{key}"),
            Self::Calculator => Some("calculator/{folder}/{key}"),
            Self::Rune => Some("rune/{folder}/{key}"),
            Self::SkillAndRune => None,
        }
    }
}

impl fmt::Display for TooltipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fetchable tooltip resource, as classified from a link URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRequest {
    #[serde(rename = "type")]
    pub kind: TooltipKind,
    pub region: String,
    pub locale: String,
    /// Path segment such as a class or artisan slug. Empty for items.
    #[serde(default)]
    pub folder: String,
    pub key: String,
    /// Class slug of a rune link, kept to rebuild the skill sub-request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_class: Option<String>,
}

/// Cache address of resolved content: `(region, locale, kind, key)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub region: String,
    pub locale: String,
    pub kind: TooltipKind,
    pub key: String,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.region, self.locale, self.kind, self.key)
    }
}

impl TooltipRequest {
    pub fn new(
        kind: TooltipKind,
        region: impl Into<String>,
        locale: impl Into<String>,
        folder: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            region: region.into(),
            locale: locale.into(),
            folder: folder.into(),
            key: key.into(),
            owner_class: None,
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            region: self.region.clone(),
            locale: self.locale.clone(),
            kind: self.kind,
            key: self.key.clone(),
        }
    }

    /// The skill half of a `SkillAndRune` request.
    pub fn skill_part(&self) -> Option<TooltipRequest> {
        if self.kind != TooltipKind::SkillAndRune {
            return None;
        }
        let owner = self.owner_class.clone().unwrap_or_default();
        Some(TooltipRequest::new(
            TooltipKind::Skill,
            &self.region,
            &self.locale,
            owner,
            &self.folder,
        ))
    }

    /// The rune half of a `SkillAndRune` request.
    pub fn rune_part(&self) -> Option<TooltipRequest> {
        if self.kind != TooltipKind::SkillAndRune {
            return None;
        }
        Some(TooltipRequest::new(
            TooltipKind::Rune,
            &self.region,
            &self.locale,
            &self.folder,
            &self.key,
        ))
    }

    /// Key as it appears in the fetch URL. Rune keys are composite
    /// (`skill-letter`) locally but only the letter is sent.
    pub fn fetch_key(&self) -> &str {
        match self.kind {
            TooltipKind::Rune => match self.key.rfind('-') {
                Some(pos) => &self.key[pos + 1..],
                None => &self.key,
            },
            _ => &self.key,
        }
    }

    /// Build the outbound fetch URL from a service base such as
    /// `https://{region}.example.org/d3/{locale}/tooltip/`.
    pub fn fetch_url(&self, service_base: &str, suffix: &str) -> Option<String> {
        let template = self.kind.url_template()?;
        let url = format!("{service_base}{template}{suffix}")
            .replace("{region}", &self.region)
            .replace("{locale}", &self.locale)
            .replace("{folder}", &self.folder)
            .replace("{key}", self.fetch_key());
        Some(url)
    }
}

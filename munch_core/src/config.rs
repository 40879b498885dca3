//! Site configuration: every piece of page content, loaded from JSON.
//!
//! The page never hard-codes copy, links or the section list. A [`SiteConfig`]
//! is parsed once at startup (normally from the bundle compiled into the
//! binary), validated, and then handed to the component tree as an
//! immutable value.

use serde::{Deserialize, Serialize};

use crate::error::{MunchError, Result};
use crate::section::{SectionDescriptor, validate_sections};

/// Site bundle compiled into the binary.
const BUNDLED_SITE: &str = include_str!("../content/site.json");

/// Section that the `team-nav` variant adds to the nav bar.
pub const TEAM_SECTION_ID: &str = "team";

/// How overlapping section ranges are resolved during a tracking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The last matching section in nav order wins.
    #[default]
    LastMatch,
    /// The first matching section in nav order wins.
    FirstMatch,
}

/// Scroll tracking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Pixels subtracted from both edges of every section range
    /// (roughly the height of the fixed nav bar).
    pub offset: f64,
    pub policy: MatchPolicy,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            offset: 100.0,
            policy: MatchPolicy::LastMatch,
        }
    }
}

impl TrackingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.offset.is_finite() || self.offset < 0.0 {
            return Err(MunchError::InvalidOffset(self.offset));
        }
        Ok(())
    }
}

/// `#rrggbb` color, parsed when the bundle is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// CSS `rgba(...)` form at the given opacity.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(raw: String) -> std::result::Result<Self, Self::Error> {
        let digits = raw
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("expected a #rrggbb color, got {raw:?}"))?;

        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(format!("expected a #rrggbb color, got {raw:?}")),
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub pink: HexColor,
    pub purple: HexColor,
}

impl BrandColors {
    /// Opacity of the pink wash behind the tinted sections.
    pub const SECTION_TINT: f64 = 0.35;

    /// Inline style for the tinted section background.
    pub fn section_background(&self) -> String {
        format!(
            "background-color: {}; background-blend-mode: overlay; background-size: cover; \
             background-position: center; background-repeat: no-repeat;",
            self.pink.rgba(Self::SECTION_TINT)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub tagline: String,
    pub pitch: String,
    pub hero_image: String,
    pub colors: BrandColors,
}

/// Outbound call-to-action button in the hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    pub icon: String,
    pub label: String,
    pub href: String,
}

/// One of the "About" pillars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub icon: String,
    pub title: String,
    pub body: String,
    /// Opacity of the pink badge behind the icon.
    #[serde(default = "Pillar::default_tint")]
    pub tint: f64,
}

impl Pillar {
    pub const DEFAULT_TINT: f64 = 0.2;

    fn default_tint() -> f64 {
        Self::DEFAULT_TINT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEmbed {
    pub title: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramCard {
    pub image: String,
    pub alt: String,
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub contributions: Vec<String>,
}

/// Complete, validated description of the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: Brand,
    pub nav: Vec<SectionDescriptor>,
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub links: Vec<LinkButton>,
    #[serde(default)]
    pub about: Vec<Pillar>,
    #[serde(default)]
    pub videos: Vec<VideoEmbed>,
    #[serde(default)]
    pub features: Vec<FeatureCard>,
    #[serde(default)]
    pub diagrams: Vec<DiagramCard>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

impl SiteConfig {
    /// Parses and validates a site bundle.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        tracing::debug!(
            sections = config.nav.len(),
            videos = config.videos.len(),
            team = config.team.len(),
            "site configuration loaded"
        );
        Ok(config)
    }

    /// The default variant: five nav entries, team rendered but not linked.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SITE)
    }

    /// The variant whose nav bar also links the team section.
    pub fn bundled_team_nav() -> Result<Self> {
        Self::bundled()?.with_team_nav()
    }

    /// Appends the team section to the nav bar, if not already listed.
    pub fn with_team_nav(mut self) -> Result<Self> {
        if !self.nav.iter().any(|s| s.id == TEAM_SECTION_ID) {
            self.nav.push(SectionDescriptor::new(TEAM_SECTION_ID, "Team"));
        }
        self.validate()?;
        Ok(self)
    }

    /// Anchor of the section that is active before the first scroll event.
    pub fn initial_section(&self) -> &str {
        self.nav.first().map(|s| s.id.as_str()).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        validate_sections(&self.nav)?;
        self.tracking.validate()?;

        for pillar in &self.about {
            if !(0.0..=1.0).contains(&pillar.tint) {
                return Err(MunchError::InvalidTint {
                    title: pillar.title.clone(),
                    tint: pillar.tint,
                });
            }
        }
        for link in &self.links {
            require_https(&format!("link {:?}", link.label), &link.href)?;
        }
        for video in &self.videos {
            require_https(&format!("video {:?}", video.title), &video.embed_url)?;
        }

        Ok(())
    }
}

fn require_https(field: &str, url: &str) -> Result<()> {
    let has_host = url
        .strip_prefix("https://")
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'));

    if has_host {
        Ok(())
    } else {
        Err(MunchError::InvalidUrl {
            field: field.to_string(),
            url: url.to_string(),
        })
    }
}

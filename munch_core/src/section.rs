//! Section descriptors and the layout they are measured against.

use serde::{Deserialize, Serialize};

use crate::error::{MunchError, Result};

/// One anchorable region of the page, as listed in the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Anchor id (`<section id=...>`), also the `#fragment` of the nav link.
    pub id: String,
    /// Text shown in the nav bar.
    pub label: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// In-page link target, e.g. `#about`.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Checks that `sections` is a usable nav list: non-empty, unique, anchor-safe ids.
pub fn validate_sections(sections: &[SectionDescriptor]) -> Result<()> {
    if sections.is_empty() {
        return Err(MunchError::EmptyNav);
    }

    for (idx, section) in sections.iter().enumerate() {
        let id = section.id.as_str();
        if id.is_empty() || id.contains('#') || id.chars().any(char::is_whitespace) {
            return Err(MunchError::InvalidSectionId(id.to_string()));
        }
        if sections[..idx].iter().any(|earlier| earlier.id == id) {
            return Err(MunchError::DuplicateSection(id.to_string()));
        }
    }

    Ok(())
}

/// Vertical placement of a rendered section, in CSS pixels from the document top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether `scroll_y` falls in `[top - offset, top + height - offset)`.
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        scroll_y >= self.top - offset && scroll_y < self.top + self.height - offset
    }
}

/// Anything that can report where a section currently sits on the page.
///
/// Returning `None` means the section is not mounted (or not measurable);
/// the tracker skips it for that pass.
pub trait SectionLayout {
    fn bounds(&self, id: &str) -> Option<SectionBounds>;
}

impl<L: SectionLayout + ?Sized> SectionLayout for &L {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        (**self).bounds(id)
    }
}

/// Fixed layout table, used for prerendered measurements and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    entries: Vec<(String, SectionBounds)>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the bounds of `id`.
    pub fn with(mut self, id: impl Into<String>, top: f64, height: f64) -> Self {
        let id = id.into();
        let bounds = SectionBounds::new(top, height);
        match self.entries.iter_mut().find(|(known, _)| *known == id) {
            Some((_, slot)) => *slot = bounds,
            None => self.entries.push((id, bounds)),
        }
        self
    }
}

impl SectionLayout for StaticLayout {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.entries
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, bounds)| *bounds)
    }
}

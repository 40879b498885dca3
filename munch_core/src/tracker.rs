//! Active-section tracking.
//!
//! On every scroll event the tracker walks the nav list in declared order,
//! measures each section and checks whether the scroll position falls inside
//! `[top - offset, top + height - offset)`. With the default
//! [`MatchPolicy::LastMatch`] the last hit wins; with no hit the previous
//! active section is kept.

use crate::config::{MatchPolicy, TrackingConfig};
use crate::error::Result;
use crate::section::{SectionDescriptor, SectionLayout, validate_sections};

/// Works out which section a scroll position belongs to.
///
/// Pure: no state, no side effects beyond trace logging. Sections the layout
/// cannot measure are skipped.
pub fn resolve_active<'a, L>(
    sections: &'a [SectionDescriptor],
    layout: &L,
    scroll_y: f64,
    tracking: &TrackingConfig,
) -> Option<&'a str>
where
    L: SectionLayout + ?Sized,
{
    let mut hit: Option<&'a str> = None;
    let mut matches = 0usize;

    for section in sections {
        let Some(bounds) = layout.bounds(&section.id) else {
            tracing::trace!(section = %section.id, "section not mounted, skipped");
            continue;
        };
        if !bounds.contains(scroll_y, tracking.offset) {
            continue;
        }

        matches += 1;
        match tracking.policy {
            MatchPolicy::LastMatch => hit = Some(section.id.as_str()),
            MatchPolicy::FirstMatch => {
                if hit.is_none() {
                    hit = Some(section.id.as_str());
                }
            }
        }
    }

    if matches > 1 {
        tracing::trace!(scroll_y, matches, "overlapping section ranges");
    }

    hit
}

/// Owns the `activeSectionId` state for one page view.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    sections: Vec<SectionDescriptor>,
    tracking: TrackingConfig,
    active: String,
}

impl ActiveSectionTracker {
    /// Starts with the first section active.
    pub fn new(sections: Vec<SectionDescriptor>, tracking: TrackingConfig) -> Result<Self> {
        validate_sections(&sections)?;
        tracking.validate()?;

        let active = sections[0].id.clone();
        Ok(Self {
            sections,
            tracking,
            active,
        })
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn tracking(&self) -> &TrackingConfig {
        &self.tracking
    }

    /// Runs one tracking pass. Returns `true` when the active section changed.
    pub fn update<L>(&mut self, scroll_y: f64, layout: &L) -> bool
    where
        L: SectionLayout + ?Sized,
    {
        let Some(next) = resolve_active(&self.sections, layout, scroll_y, &self.tracking) else {
            return false;
        };
        if next == self.active {
            return false;
        }

        tracing::debug!(from = %self.active, to = %next, scroll_y, "active section changed");
        self.active = next.to_string();
        true
    }
}

//! Nav bar render model.
//!
//! The nav bar holds no state of its own; everything it shows is derived from
//! the section list, the active section and the menu state.

use crate::section::SectionDescriptor;

/// Classes for a desktop nav link.
pub const DESKTOP_ACTIVE: &str = "text-brand-purple font-semibold";
pub const DESKTOP_IDLE: &str = "text-gray-600";

/// Classes for a mobile panel link.
pub const MOBILE_ACTIVE: &str = "bg-brand-pink/20 text-brand-purple";
pub const MOBILE_IDLE: &str = "text-gray-600";

const DESKTOP_BASE: &str = "hover:text-brand-purple transition-colors";
const MOBILE_BASE: &str = "block px-3 py-2 rounded-md";

/// A nav link as the view needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One entry per section, in declared order; exactly the one matching
/// `active_id` is flagged.
pub fn entries(sections: &[SectionDescriptor], active_id: &str) -> Vec<NavEntry> {
    sections
        .iter()
        .map(|section| NavEntry {
            id: section.id.clone(),
            label: section.label.clone(),
            href: section.href(),
            active: section.id == active_id,
        })
        .collect()
}

pub fn desktop_class(active: bool) -> String {
    let emphasis = if active { DESKTOP_ACTIVE } else { DESKTOP_IDLE };
    format!("{DESKTOP_BASE} {emphasis}")
}

pub fn mobile_class(active: bool) -> String {
    let emphasis = if active { MOBILE_ACTIVE } else { MOBILE_IDLE };
    format!("{MOBILE_BASE} {emphasis}")
}

//! Error type shared by the configuration loader and the scroll plumbing.

use thiserror::Error;

/// Result alias used across `munch-core`.
pub type Result<T> = std::result::Result<T, MunchError>;

/// Everything that can go wrong before the page is interactive.
///
/// Nothing here is raised while scrolling: a section that cannot be measured
/// is skipped, not reported.
#[derive(Debug, Error)]
pub enum MunchError {
    /// The site bundle is not valid JSON or does not match [`crate::SiteConfig`].
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The nav bar has nothing to link to.
    #[error("navigation must list at least one section")]
    EmptyNav,

    /// A section id that cannot be used as an HTML anchor.
    #[error("section id {0:?} is not a usable anchor")]
    InvalidSectionId(String),

    /// Two nav entries point at the same anchor.
    #[error("section {0:?} is listed more than once")]
    DuplicateSection(String),

    /// Tracking offset is negative, NaN or infinite.
    #[error("tracking offset must be a finite, non-negative number (got {0})")]
    InvalidOffset(f64),

    /// A pillar tint outside `0.0..=1.0`.
    #[error("tint of {title:?} must be between 0 and 1 (got {tint})")]
    InvalidTint {
        /// Title of the pillar carrying the tint.
        title: String,
        /// The offending value.
        tint: f64,
    },

    /// An embed or outbound link that is not absolute https.
    #[error("{field} must be an absolute https URL (got {url:?})")]
    InvalidUrl {
        /// Which piece of content carried the URL.
        field: String,
        /// The offending value.
        url: String,
    },

    /// The event source refused to register the scroll listener.
    #[error("failed to subscribe to scroll events: {0}")]
    Subscribe(String),
}

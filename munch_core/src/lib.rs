//! # munch-core
//!
//! Browser-independent logic behind the Munch landing page.
//!
//! The page itself is presentational; what little behavior it has lives here
//! so it can be tested without a DOM:
//!
//! - [`config`] - the site bundle (copy, links, embeds, nav list) and its validation
//! - [`tracker`] - which section is scrolled into view
//! - [`menu`] - the mobile menu's `Closed` / `Open` state
//! - [`nav`] - nav bar render model and emphasis classes
//! - [`subscription`] - scroll listener guard, detached on drop
//!
//! ## Quick Start
//!
//! ```rust
//! use munch_core::{ActiveSectionTracker, SiteConfig, StaticLayout};
//!
//! let site = SiteConfig::bundled()?;
//! let mut tracker = ActiveSectionTracker::new(site.nav.clone(), site.tracking)?;
//!
//! let layout = StaticLayout::new()
//!     .with("home", 0.0, 800.0)
//!     .with("about", 800.0, 600.0);
//!
//! assert!(tracker.update(850.0, &layout));
//! assert_eq!(tracker.active(), "about");
//! # Ok::<(), munch_core::MunchError>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod menu;
pub mod nav;
pub mod section;
pub mod subscription;
pub mod tracker;

pub use config::{MatchPolicy, SiteConfig, TrackingConfig};
pub use error::{MunchError, Result};
pub use menu::MenuState;
pub use nav::NavEntry;
pub use section::{SectionBounds, SectionDescriptor, SectionLayout, StaticLayout};
pub use subscription::{ScrollHandler, ScrollSource, ScrollSubscription};
pub use tracker::{ActiveSectionTracker, resolve_active};

use leptos::prelude::*;
use munch_core::{
    ActiveSectionTracker, MenuState, ScrollSource, ScrollSubscription, SectionDescriptor,
    SiteConfig, TrackingConfig,
};

use super::{About, Diagrams, Features, Hero, Nav, Team, VideoDemos};
use crate::browser::{DomLayout, WindowScrollSource, scroll_y};
use leptos::reactive::owner::LocalStorage;

/// The whole page. `site` is provided to every section through context.
#[component]
pub fn LandingPage(site: SiteConfig) -> impl IntoView {
    let active = RwSignal::new(site.initial_section().to_string());
    let menu = RwSignal::new(MenuState::default());

    track_active_section(site.nav.clone(), site.tracking, active);
    provide_context(site);

    view! {
        <div class="min-h-screen bg-brand-pink/10">
            <Nav active=active.read_only() menu=menu />
            <main>
                <Hero />
                <About />
                <VideoDemos />
                <Features />
                <Diagrams />
                <Team />
            </main>
        </div>
    }
}

/// Keeps `active` in sync with the scroll position for as long as the
/// calling component is mounted.
///
/// One pass runs right after mount; the scroll listener is detached in
/// `on_cleanup`.
fn track_active_section(
    sections: Vec<SectionDescriptor>,
    tracking: TrackingConfig,
    active: RwSignal<String>,
) {
    let tracker = match ActiveSectionTracker::new(sections, tracking) {
        Ok(tracker) => StoredValue::new(tracker),
        Err(err) => {
            tracing::warn!(%err, "section tracking disabled");
            return;
        }
    };

    let on_scroll = move |y: f64| {
        tracker.update_value(|tracker| {
            if tracker.update(y, &DomLayout) {
                active.set(tracker.active().to_string());
            }
        });
    };

    let subscription = StoredValue::new_local(None::<ScrollSubscription<WindowScrollSource>>);

    Effect::new(move || {
        on_scroll(scroll_y());
        match ScrollSubscription::subscribe(WindowScrollSource, on_scroll) {
            Ok(live) => subscription.set_value(Some(live)),
            Err(err) => tracing::warn!(%err, "scroll tracking unavailable"),
        }
    });

    release_on_cleanup(subscription);
}

/// Detaches whatever listener `slot` holds when the current owner is cleaned up.
fn release_on_cleanup<S>(slot: StoredValue<Option<ScrollSubscription<S>>, LocalStorage>)
where
    S: ScrollSource + 'static,
{
    on_cleanup(move || {
        if let Some(Some(live)) = slot.try_update_value(Option::take) {
            live.cancel();
        }
    });
}

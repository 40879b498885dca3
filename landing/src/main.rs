// Munch Landing Page, Leptos 0.8 Edition
// Where Friends Meet to Munch

mod browser;
mod logging;
mod sections;

use leptos::prelude::*;
use munch_core::SiteConfig;
use sections::LandingPage;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    match load_site() {
        Ok(site) => {
            tracing::info!(sections = site.nav.len(), "mounting landing page");
            leptos::mount::mount_to_body(move || view! { <LandingPage site=site /> });
        }
        Err(err) => {
            tracing::error!(%err, "site configuration rejected");
            leptos::mount::mount_to_body(|| view! { <Unavailable /> });
        }
    }
}

#[cfg(not(feature = "team-nav"))]
fn load_site() -> munch_core::Result<SiteConfig> {
    SiteConfig::bundled()
}

#[cfg(feature = "team-nav")]
fn load_site() -> munch_core::Result<SiteConfig> {
    SiteConfig::bundled_team_nav()
}

/// Shown instead of the page when the bundled content does not validate.
#[component]
fn Unavailable() -> impl IntoView {
    view! {
        <main class="min-h-screen flex items-center justify-center">
            <p class="text-gray-600">"This page is temporarily unavailable."</p>
        </main>
    }
}

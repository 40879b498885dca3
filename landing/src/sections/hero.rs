use leptos::prelude::*;
use munch_core::SiteConfig;
use munch_core::config::LinkButton;

#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let brand = site.brand;
    let background = brand.colors.section_background();
    let preview_alt = format!("{} App Preview", brand.name);

    view! {
        <section id="home" class="min-h-screen flex items-center pt-16 relative" style=background>
            <div class="max-w-7xl mx-auto px-4 relative z-10">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="md:w-1/2 mb-8 md:mb-0">
                        <h1 class="text-4xl md:text-6xl font-bold mb-4 text-brand-purple">
                            {brand.tagline}
                        </h1>
                        <p class="text-xl text-black mb-8">{brand.pitch}</p>
                        <div class="grid grid-cols-2 gap-4">
                            {site.links
                                .into_iter()
                                .map(|link| view! { <LinkPill link=link /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="md:w-1/2">
                        <img
                            src=brand.hero_image
                            alt=preview_alt
                            class="rounded-lg shadow-xl w-full max-w-sm mx-auto"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Outbound button; always opens in a new tab without an opener.
#[component]
fn LinkPill(link: LinkButton) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center justify-center bg-brand-purple text-white px-6 py-3 rounded-full hover:opacity-90 transition-colors"
        >
            {format!("{} {}", link.icon, link.label)}
        </a>
    }
}

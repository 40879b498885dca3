use leptos::prelude::*;
use munch_core::SiteConfig;
use munch_core::config::VideoEmbed;

/// Permissions granted to every embedded player.
const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn VideoDemos() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let background = site.brand.colors.section_background();
    let heading = format!("See {} in Action", site.brand.name);

    view! {
        <section id="video" style=background>
            <div class="max-w-7xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold text-center mb-12">{heading}</h2>
                <div class="grid grid-cols-1 gap-8 max-w-3xl mx-auto">
                    {site.videos
                        .into_iter()
                        .map(|video| view! { <VideoCard video=video /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn VideoCard(video: VideoEmbed) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg p-6 shadow-md">
            <h3 class="text-xl font-semibold mb-4">{video.title.clone()}</h3>
            <div class="aspect-w-1 aspect-h-1">
                <iframe
                    class="w-full h-96 rounded-lg"
                    src=video.embed_url
                    title=video.title
                    allow=PLAYER_ALLOW
                    allowfullscreen=true
                ></iframe>
            </div>
        </div>
    }
}

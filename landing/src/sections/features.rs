use leptos::prelude::*;
use munch_core::SiteConfig;
use munch_core::config::FeatureCard as Feature;

#[component]
pub fn Features() -> impl IntoView {
    let site = expect_context::<SiteConfig>();

    view! {
        <section id="features" class="bg-white">
            <div class="max-w-7xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold text-center mb-12">"Key Features"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {site.features
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="p-6 border rounded-lg bg-white hover:border-brand-purple transition-colors">
            <h3 class="text-xl font-semibold mb-4 text-brand-purple">{feature.title}</h3>
            <p class="text-gray-600">{feature.body}</p>
        </article>
    }
}

use leptos::prelude::*;
use munch_core::SiteConfig;

#[component]
pub fn About() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let heading = format!("About {}", site.brand.name);
    let pink = site.brand.colors.pink;

    view! {
        <section id="about" class="bg-white">
            <div class="max-w-7xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold text-center mb-12">{heading}</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {site.about
                        .into_iter()
                        .map(move |pillar| view! {
                            <div class="text-center p-6">
                                <div
                                    class="w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4"
                                    style=format!("background-color: {}", pink.rgba(pillar.tint))
                                >
                                    <span class="text-2xl">{pillar.icon}</span>
                                </div>
                                <h3 class="text-xl font-semibold mb-2">{pillar.title}</h3>
                                <p class="text-gray-600">{pillar.body}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;
use munch_core::SiteConfig;

#[component]
pub fn Diagrams() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let background = site.brand.colors.section_background();

    view! {
        <section id="diagrams" style=background>
            <div class="max-w-7xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold text-center mb-12">"How It Works"</h2>
                <div class="grid grid-cols-1 gap-8 max-w-3xl mx-auto">
                    {site.diagrams
                        .into_iter()
                        .map(|diagram| view! {
                            <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-lg transition-all">
                                <img src=diagram.image alt=diagram.alt class="w-full rounded-lg mb-4" />
                                <h3 class="text-xl font-semibold mb-2 text-brand-purple">{diagram.title}</h3>
                                <p class="text-gray-600">{diagram.caption}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

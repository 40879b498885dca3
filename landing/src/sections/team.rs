use leptos::prelude::*;
use munch_core::SiteConfig;
use munch_core::config::TeamMember;

/// Team credits. Renders nothing when the site lists no members.
#[component]
pub fn Team() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    if site.team.is_empty() {
        return None;
    }

    Some(view! {
        <section id="team" class="bg-white">
            <div class="max-w-7xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold text-center mb-12">"Team Members & Contributions"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {site.team
                        .into_iter()
                        .map(|member| view! { <MemberCard member=member /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    })
}

#[component]
fn MemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="p-6 border rounded-lg bg-white hover:border-brand-purple transition-colors">
            <h3 class="text-xl font-semibold mb-4 text-brand-purple">{member.name}</h3>
            <ul class="list-disc pl-5 space-y-2">
                {member.contributions
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

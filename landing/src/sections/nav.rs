use leptos::prelude::*;
use munch_core::{MenuState, SiteConfig, nav};

/// Fixed top bar: logo, desktop links, and the mobile menu panel.
///
/// Owns no state. Emphasis follows `active`; the mobile panel follows `menu`.
#[component]
pub fn Nav(active: ReadSignal<String>, menu: RwSignal<MenuState>) -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let desktop_sections = site.nav.clone();
    let mobile_sections = site.nav;
    let logo_alt = format!("{} Logo", site.brand.name);

    view! {
        <nav class="fixed top-0 left-0 right-0 shadow-md z-50 bg-brand-pink">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <img src=site.brand.logo alt=logo_alt class="h-12 w-auto" />
                    </div>

                    // Desktop
                    <div class="hidden md:flex space-x-8">
                        {move || {
                            active.with(|current| nav::entries(&desktop_sections, current))
                                .into_iter()
                                .map(|entry| view! {
                                    <a href=entry.href class=nav::desktop_class(entry.active)>
                                        {entry.label}
                                    </a>
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    // Mobile menu button
                    <div class="md:hidden">
                        <button
                            class="text-gray-600 hover:text-brand-purple"
                            aria-label="Toggle navigation"
                            aria-expanded=move || menu.get().aria_expanded()
                            on:click=move |_| menu.update(|m| *m = m.toggled())
                        >
                            {move || menu.get().glyph()}
                        </button>
                    </div>
                </div>
            </div>

            // Mobile panel
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-white">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {
                            let mobile_sections = mobile_sections.clone();
                            move || {
                                active.with(|current| nav::entries(&mobile_sections, current))
                                    .into_iter()
                                    .map(|entry| view! {
                                        <a
                                            href=entry.href
                                            class=nav::mobile_class(entry.active)
                                            on:click=move |_| menu.update(|m| *m = m.link_selected())
                                        >
                                            {entry.label}
                                        </a>
                                    })
                                    .collect::<Vec<_>>()
                            }
                        }
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    /// Lets queued render effects run.
    async fn settle() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    fn mount_nav(active_id: &str) -> (HtmlElement, impl Sized) {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let active_id = active_id.to_string();
        let handle = leptos::mount::mount_to(host.clone(), move || {
            provide_context(SiteConfig::bundled().expect("bundled config is valid"));
            let active = RwSignal::new(active_id);
            let menu = RwSignal::new(MenuState::default());
            view! { <Nav active=active.read_only() menu=menu /> }
        });
        (host, handle)
    }

    fn links_to(host: &HtmlElement, id: &str) -> Vec<Element> {
        let found = host
            .query_selector_all(&format!("a[href='#{id}']"))
            .unwrap();
        (0..found.length())
            .filter_map(|i| found.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn menu_button(host: &HtmlElement) -> HtmlElement {
        host.query_selector("button")
            .unwrap()
            .expect("menu button is rendered")
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn mobile_panel_follows_menu_state() {
        let (host, handle) = mount_nav("home");
        settle().await;

        // Closed: only the desktop link exists.
        assert_eq!(links_to(&host, "about").len(), 1);
        let button = menu_button(&host);
        assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));

        button.click();
        settle().await;
        assert_eq!(links_to(&host, "about").len(), 2);
        assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert_eq!(button.text_content().as_deref(), Some("✕"));

        // Picking a panel link closes the menu.
        let panel_link = links_to(&host, "about")
            .pop()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        panel_link.click();
        settle().await;
        assert_eq!(links_to(&host, "about").len(), 1);
        assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));

        drop(handle);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn active_entry_is_emphasised() {
        let (host, handle) = mount_nav("features");
        settle().await;

        let features = links_to(&host, "features");
        assert_eq!(features.len(), 1);
        assert!(features[0].class_name().contains(nav::DESKTOP_ACTIVE));

        let home = links_to(&host, "home");
        assert!(!home[0].class_name().contains(nav::DESKTOP_ACTIVE));
        assert!(home[0].class_name().contains(nav::DESKTOP_IDLE));

        drop(handle);
        host.remove();
    }
}

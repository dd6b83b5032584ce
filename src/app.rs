//! App Root Component
//!
//! Provides the route store, wires the hash listener, and composes the
//! shell around whichever page the current route resolves to. Every store
//! notification re-runs the view closure and remounts the page subtree, so
//! the CSS entry transition restarts even on an idempotent navigation.

use chrono::Datelike;
use leptos::*;

use crate::components::{LinkButton, TopNav};
use crate::config::{self, Destination};
use crate::pages::{
    About, Contact, Faq, Home, Members, Page, Pricing, Program, Testimonials,
};
use crate::state::{init_hash_listener, provide_route_store};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let store = provide_route_store();
    init_hash_listener(store);

    view! {
        <div class="min-h-screen bg-neutral-950 text-neutral-100">
            <BackgroundGlow />
            <TopNav />

            // Page composer: exactly one page is mounted at any time; the
            // swap happens synchronously with the route notification.
            <main class="mx-auto w-full max-w-6xl px-4 pb-24 pt-8 sm:px-6 lg:px-8">
                {move || {
                    let page = Page::resolve(&store.route.get());
                    view! {
                        <div class="page-enter">{mount_page(page)}</div>
                    }
                }}
            </main>

            <Footer />
        </div>
    }
}

fn mount_page(page: Page) -> View {
    match page {
        Page::Home => view! { <Home /> }.into_view(),
        Page::Program => view! { <Program /> }.into_view(),
        Page::Pricing => view! { <Pricing /> }.into_view(),
        Page::Testimonials => view! { <Testimonials /> }.into_view(),
        Page::About => view! { <About /> }.into_view(),
        Page::Faq => view! { <Faq /> }.into_view(),
        Page::Members => view! { <Members /> }.into_view(),
        Page::Contact => view! { <Contact /> }.into_view(),
        Page::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// Decorative fixed glow layer behind all pages
#[component]
fn BackgroundGlow() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none fixed inset-0 overflow-hidden">
            <div class="absolute -top-24 left-1/2 h-[420px] w-[820px] -translate-x-1/2 rounded-full bg-yellow-500/10 blur-3xl" />
            <div class="absolute -bottom-24 right-[-120px] h-[360px] w-[520px] rounded-full bg-white/5 blur-3xl" />
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_50%_0%,rgba(255,255,255,0.08),transparent_60%)]" />
        </div>
    }
}

/// Footer with brand line, quick links, and dynamic copyright year
#[component]
fn Footer() -> impl IntoView {
    let standard = config::resolve_external(config::LINKS.the_standard, Page::Contact);
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-white/10 bg-neutral-950/70 backdrop-blur">
            <div class="mx-auto max-w-6xl px-4 py-8 text-sm text-neutral-400 sm:px-6 lg:px-8">
                <div class="flex flex-col gap-6 sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <div class="font-semibold text-neutral-200">{config::BRAND.name}</div>
                        <div class="text-xs">
                            {format!("{} • {}", config::BRAND.subtitle, config::BRAND.tagline)}
                        </div>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        <a class="hover:text-white" href="#/program">"Program"</a>
                        <a class="hover:text-white" href="#/pricing">"Pricing"</a>
                        <a class="hover:text-white" href="#/testimonials">"Testimonials"</a>
                        <a class="hover:text-white" href="#/members">"Members"</a>
                        <a class="hover:text-white" href="#/contact">"Apply"</a>
                        {match standard {
                            Destination::External(url) => view! {
                                <a class="hover:text-white" href=url target="_blank" rel="noreferrer">
                                    "THE STANDARD ↗"
                                </a>
                            }.into_view(),
                            Destination::Page(_) => ().into_view(),
                        }}
                    </div>
                </div>
                <div class="mt-6 text-xs text-neutral-500">
                    {format!(
                        "© {} {}. All rights reserved. Terms, policies, and disclosures \
                         should be reviewed by counsel before launch.",
                        year,
                        config::BRAND.name
                    )}
                </div>
            </div>
        </footer>
    }
}

/// Not-found page for unregistered fragments
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="rounded-[28px] border border-white/10 bg-white/5 p-8">
            <div class="text-2xl font-semibold">"Page not found"</div>
            <div class="mt-2 text-neutral-300">"Try going back to the home page."</div>
            <div class="mt-5">
                <LinkButton href="#/home">"Home"</LinkButton>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Route, RouteStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    // Loading at #/pricing then navigating to about must mount pricing,
    // then about, with no third page in between.
    #[test]
    fn test_composer_sees_exactly_the_final_pages() {
        let runtime = create_runtime();
        let store = RouteStore::new();
        store.route.set(Route::parse("#/pricing"));

        let mounted = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&mounted);
        create_isomorphic_effect(move |_| {
            seen.borrow_mut().push(Page::resolve(&store.route.get()));
        });

        store.navigate("#/about");

        assert_eq!(*mounted.borrow(), vec![Page::Pricing, Page::About]);
        runtime.dispose();
    }

    #[test]
    fn test_unknown_fragment_mounts_not_found() {
        let runtime = create_runtime();
        let store = RouteStore::new();

        store.navigate("#/definitely-not-a-page");
        assert_eq!(Page::resolve(&store.current()), Page::NotFound);
        // The fragment itself is left as typed.
        assert_eq!(store.current().page, "definitely-not-a-page");

        runtime.dispose();
    }
}

//! Navigation Component
//!
//! Sticky header with brand mark, desktop links, a "View tiers" call to
//! action, and a mobile menu driven by an open/close signal.

use leptos::*;

use crate::components::media::hide_on_error;
use crate::config;
use crate::pages::Page;
use crate::state::RouteStore;

/// Viewport width at which the desktop links replace the mobile menu
/// (Tailwind's `lg` breakpoint).
const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

fn is_desktop_width(width: f64) -> bool {
    width >= DESKTOP_BREAKPOINT_PX
}

/// Navigation header component
#[component]
pub fn TopNav() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    close_menu_on_desktop_resize(set_menu_open);

    view! {
        <header class="sticky top-0 z-40 border-b border-white/10 bg-neutral-950/70 backdrop-blur">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3 sm:px-6 lg:px-8">
                // Brand mark
                <a href="#/home" class="group flex items-center gap-3">
                    <div class="flex h-9 w-9 items-center justify-center overflow-hidden rounded-2xl border border-white/10 bg-white/5">
                        <img
                            src=config::ASSETS.logo
                            alt=format!("{} logo", config::BRAND.name)
                            class="h-7 w-7 object-contain"
                            on:error=hide_on_error
                        />
                        <span class="text-sm text-yellow-400" aria-hidden="true">"👑"</span>
                    </div>
                    <div class="leading-tight">
                        <div class="text-sm font-semibold tracking-wide">{config::BRAND.name}</div>
                        <div class="text-xs text-neutral-400">{config::BRAND.subtitle}</div>
                    </div>
                </a>

                // Desktop links
                <nav class="hidden items-center gap-1 lg:flex">
                    {config::NAV.iter().map(|entry| view! {
                        <NavLink page=entry.page label=entry.label />
                    }).collect_view()}
                    <a
                        href="#/pricing"
                        class="ml-2 inline-flex items-center gap-2 rounded-2xl bg-yellow-500 px-4 py-2
                               text-sm font-semibold text-neutral-950 shadow-lg shadow-yellow-500/10
                               hover:bg-yellow-400"
                    >
                        "View tiers"
                    </a>
                </nav>

                // Mobile menu toggle
                <button
                    type="button"
                    aria-label="Open menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    class="lg:hidden rounded-2xl border border-white/10 bg-white/5 px-3 py-2 text-sm"
                >
                    "Menu"
                </button>
            </div>

            // Mobile menu
            {move || menu_open.get().then(|| view! {
                <div class="lg:hidden overflow-hidden border-t border-white/10">
                    <div class="mx-auto max-w-6xl px-4 py-3 sm:px-6 lg:px-8">
                        <div class="grid grid-cols-2 gap-2">
                            {config::NAV.iter().map(|entry| view! {
                                <NavLink
                                    page=entry.page
                                    label=entry.label
                                    close_menu=set_menu_open
                                />
                            }).collect_view()}
                        </div>
                        <a
                            href="#/pricing"
                            on:click=move |_| set_menu_open.set(false)
                            class="mt-3 inline-flex w-full items-center justify-center gap-2 rounded-2xl
                                   bg-yellow-500 px-4 py-2 text-sm font-semibold text-neutral-950"
                        >
                            "View tiers"
                        </a>
                    </div>
                </div>
            })}
        </header>
    }
}

/// Close the mobile menu whenever the viewport grows past the desktop
/// breakpoint, so stale open state never lingers across a resize
/// round-trip.
fn close_menu_on_desktop_resize(set_menu_open: WriteSignal<bool>) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_resize = Closure::wrap(Box::new(move || {
            let width = web_sys::window()
                .and_then(|window| window.inner_width().ok())
                .and_then(|width| width.as_f64())
                .unwrap_or(0.0);
            if is_desktop_width(width) {
                set_menu_open.set(false);
            }
        }) as Box<dyn FnMut()>);

        window.set_onresize(Some(on_resize.as_ref().unchecked_ref()));
        on_resize.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_menu_open;
}

/// Individual navigation link with active-page highlighting
#[component]
fn NavLink(
    page: Page,
    label: &'static str,
    #[prop(optional)] close_menu: Option<WriteSignal<bool>>,
) -> impl IntoView {
    let store = use_context::<RouteStore>().expect("RouteStore not found");

    let classes = move || {
        let base = "rounded-2xl px-3 py-2 text-sm transition";
        if Page::resolve(&store.route.get()) == page {
            format!("{} bg-white/10 text-white", base)
        } else {
            format!("{} text-neutral-300 hover:bg-white/5 hover:text-white", base)
        }
    };

    view! {
        <a
            href=page.href()
            class=classes
            on:click=move |_| {
                if let Some(close) = close_menu {
                    close.set(false);
                }
            }
        >
            {label}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_menu_prop_is_optional() {
        let runtime = create_runtime();

        let props = NavLinkProps::builder()
            .page(Page::Home)
            .label("Home")
            .build();
        assert!(props.close_menu.is_none());

        let (_, set_menu_open) = create_signal(false);
        let props = NavLinkProps::builder()
            .page(Page::Pricing)
            .label("Pricing")
            .close_menu(set_menu_open)
            .build();
        assert!(props.close_menu.is_some());

        runtime.dispose();
    }

    #[test]
    fn test_desktop_width_threshold() {
        assert!(is_desktop_width(1024.0));
        assert!(is_desktop_width(1920.0));
        assert!(!is_desktop_width(1023.9));
        assert!(!is_desktop_width(390.0));
        assert!(!is_desktop_width(0.0));
    }
}

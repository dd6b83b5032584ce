//! Route Store
//!
//! Reactive ownership of the current route, derived from the URL hash
//! fragment. Consumers read the signal inside a reactive scope or ask for a
//! change via [`RouteStore::navigate`]; nobody mutates a `Route` in place.

use leptos::*;

/// A parsed hash fragment. Replaced wholesale on every fragment change,
/// never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// First path segment, unvalidated here. Resolution against the page
    /// registry (including the not-found fallback) happens in `Page::resolve`.
    pub page: String,
    /// Second path segment. Parsed and carried, currently read by no page.
    pub subpath: String,
}

impl Route {
    /// Page shown when the fragment carries no usable segment.
    pub const DEFAULT_PAGE: &'static str = "home";

    /// Parse a fragment of the form `#/page` or `#/page/subpath`.
    ///
    /// The leading `#` is stripped and the token before the first `/` is
    /// discarded, so `#pricing` (no slash) parses to the default page while
    /// `#/pricing` parses to `pricing`. Segments past the second are ignored.
    pub fn parse(fragment: &str) -> Self {
        let trimmed = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut segments = trimmed.split('/');
        let _ = segments.next();
        let page = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(Self::DEFAULT_PAGE);
        let subpath = segments.next().unwrap_or("");

        Self {
            page: page.to_string(),
            subpath: subpath.to_string(),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE.to_string(),
            subpath: String::new(),
        }
    }
}

/// Single owner of the current route, provided through context.
#[derive(Clone, Copy)]
pub struct RouteStore {
    /// The current route. Read it inside a reactive scope to subscribe.
    pub route: RwSignal<Route>,
}

impl RouteStore {
    /// Create a store seeded from the live fragment (or the default route
    /// when no browser window is available).
    pub fn new() -> Self {
        Self {
            route: create_rw_signal(live_route()),
        }
    }

    /// Snapshot of the current route, untracked.
    pub fn current(&self) -> Route {
        self.route.get_untracked()
    }

    /// Write a new fragment and publish the parsed route unconditionally.
    ///
    /// Signals notify on every `set`, so navigating to the page already
    /// shown still re-triggers display logic. The hashchange handler dedupes
    /// the browser echo of this write (see [`init_hash_listener`]).
    pub fn navigate(&self, path: &str) {
        write_fragment(path);
        self.route.set(Route::parse(path));
    }

    /// Publish `next` only when it differs from the current value. Used for
    /// browser-initiated fragment changes, where a programmatic `navigate`
    /// has already published the same value.
    pub(crate) fn publish_if_changed(&self, next: Route) {
        if next != self.route.get_untracked() {
            self.route.set(next);
        }
    }
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the route store to the component tree and return it.
pub fn provide_route_store() -> RouteStore {
    let store = RouteStore::new();
    provide_context(store);
    store
}

/// Wire the store to the browser's `hashchange` event. Anchor clicks and
/// back/forward navigation land here; programmatic echoes are deduped.
pub fn init_hash_listener(store: RouteStore) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_hash = Closure::wrap(Box::new(move || {
            let next = live_route();
            crate::diag::debug(&format!("route change: {}/{}", next.page, next.subpath));
            store.publish_if_changed(next);
        }) as Box<dyn FnMut()>);

        window.set_onhashchange(Some(on_hash.as_ref().unchecked_ref()));
        on_hash.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = store;
}

/// Route parsed from the live fragment; default when there is no window.
fn live_route() -> Route {
    read_fragment()
        .map(|fragment| Route::parse(&fragment))
        .unwrap_or_default()
}

fn read_fragment() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    return web_sys::window().and_then(|window| window.location().hash().ok());

    #[cfg(not(target_arch = "wasm32"))]
    None
}

fn write_fragment(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = path;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_parse_full_fragment() {
        let route = Route::parse("#/program/advanced");
        assert_eq!(route.page, "program");
        assert_eq!(route.subpath, "advanced");
    }

    #[test]
    fn test_parse_page_only() {
        let route = Route::parse("#/pricing");
        assert_eq!(route.page, "pricing");
        assert_eq!(route.subpath, "");
    }

    #[test]
    fn test_parse_empty_fragment_defaults_to_home() {
        assert_eq!(Route::parse(""), Route::default());
        assert_eq!(Route::parse("#/"), Route::default());
        assert_eq!(Route::parse("#"), Route::default());
    }

    #[test]
    fn test_parse_fragment_without_slash_defaults_to_home() {
        // "#pricing" has no '/' so the whole token sits before the first
        // separator and is discarded.
        assert_eq!(Route::parse("#pricing"), Route::default());
    }

    #[test]
    fn test_parse_ignores_segments_past_the_second() {
        let route = Route::parse("#/faq/billing/extra/noise");
        assert_eq!(route.page, "faq");
        assert_eq!(route.subpath, "billing");
    }

    #[test]
    fn test_store_starts_at_default_without_a_window() {
        let runtime = create_runtime();
        let store = RouteStore::new();
        assert_eq!(store.current(), Route::default());
        runtime.dispose();
    }

    #[test]
    fn test_navigate_same_target_notifies_each_time() {
        let runtime = create_runtime();
        let store = RouteStore::new();

        let runs = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&runs);
        create_isomorphic_effect(move |_| {
            let _ = store.route.get();
            seen.set(seen.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        store.navigate("#/pricing");
        store.navigate("#/pricing");

        // One run at creation plus one per navigate, idempotent or not.
        assert_eq!(runs.get(), 3);
        assert_eq!(store.current().page, "pricing");

        runtime.dispose();
    }

    #[test]
    fn test_publish_if_changed_dedupes_echoes() {
        let runtime = create_runtime();
        let store = RouteStore::new();

        let runs = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&runs);
        create_isomorphic_effect(move |_| {
            let _ = store.route.get();
            seen.set(seen.get() + 1);
        });

        store.navigate("#/about");
        store.publish_if_changed(Route::parse("#/about"));
        assert_eq!(runs.get(), 2);

        store.publish_if_changed(Route::parse("#/faq"));
        assert_eq!(runs.get(), 3);

        runtime.dispose();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn navigate_writes_the_location_hash() {
        let runtime = create_runtime();
        let store = RouteStore::new();

        store.navigate("#/pricing");

        let hash = web_sys::window().unwrap().location().hash().unwrap();
        assert_eq!(hash, "#/pricing");
        assert_eq!(store.current().page, "pricing");

        runtime.dispose();
    }
}

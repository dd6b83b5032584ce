//! Pages
//!
//! Top-level page components for each route, plus the `Page` registry that
//! maps parsed routes onto them.

pub mod about;
pub mod contact;
pub mod faq;
pub mod home;
pub mod members;
pub mod pricing;
pub mod program;
pub mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use faq::Faq;
pub use home::Home;
pub use members::Members;
pub use pricing::Pricing;
pub use program::Program;
pub use testimonials::Testimonials;

use crate::state::Route;

/// Closed set of logical pages. `NotFound` is the fallback arm, never a
/// navigation target of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Program,
    Pricing,
    Testimonials,
    About,
    Faq,
    Members,
    Contact,
    NotFound,
}

impl Page {
    /// Every page reachable by slug, in display order.
    pub const REGISTERED: [Page; 8] = [
        Page::Home,
        Page::Program,
        Page::Pricing,
        Page::Testimonials,
        Page::About,
        Page::Faq,
        Page::Members,
        Page::Contact,
    ];

    /// Total mapping from a parsed route to a page. Slug matching is
    /// case-sensitive; everything unregistered lands on `NotFound` while the
    /// fragment stays as typed.
    pub fn resolve(route: &Route) -> Page {
        match route.page.as_str() {
            "home" => Page::Home,
            "program" => Page::Program,
            "pricing" => Page::Pricing,
            "testimonials" => Page::Testimonials,
            "about" => Page::About,
            "faq" => Page::Faq,
            "members" => Page::Members,
            "contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    /// Fragment slug for registered pages. `NotFound` has no slug of its
    /// own; it borrows the default so links never dead-end.
    pub const fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Program => "program",
            Page::Pricing => "pricing",
            Page::Testimonials => "testimonials",
            Page::About => "about",
            Page::Faq => "faq",
            Page::Members => "members",
            Page::Contact => "contact",
            Page::NotFound => Route::DEFAULT_PAGE,
        }
    }

    /// Href of the form `#/slug`.
    pub fn href(self) -> String {
        format!("#/{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_slugs_round_trip() {
        for page in Page::REGISTERED {
            let fragment = format!("#/{}", page.slug());
            assert_eq!(Page::resolve(&Route::parse(&fragment)), page);
        }
    }

    #[test]
    fn test_unregistered_tokens_resolve_to_not_found() {
        for fragment in ["#/checkout", "#/admin", "#/home2", "#/not-found", "#/ "] {
            assert_eq!(
                Page::resolve(&Route::parse(fragment)),
                Page::NotFound,
                "fragment {:?} should not resolve to a registered page",
                fragment
            );
        }
    }

    #[test]
    fn test_slug_matching_is_case_sensitive() {
        assert_eq!(Page::resolve(&Route::parse("#/PRICING")), Page::NotFound);
        assert_eq!(Page::resolve(&Route::parse("#/Home")), Page::NotFound);
    }

    #[test]
    fn test_empty_fragment_resolves_to_home() {
        assert_eq!(Page::resolve(&Route::parse("")), Page::Home);
        assert_eq!(Page::resolve(&Route::parse("#/")), Page::Home);
    }

    #[test]
    fn test_subpath_does_not_affect_resolution() {
        assert_eq!(
            Page::resolve(&Route::parse("#/program/advanced")),
            Page::Program
        );
    }

    #[test]
    fn test_hrefs_are_fragment_links() {
        assert_eq!(Page::Pricing.href(), "#/pricing");
        assert_eq!(Page::NotFound.href(), "#/home");
    }
}

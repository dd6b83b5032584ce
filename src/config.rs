//! Site Configuration
//!
//! Inline constant data read once at startup: brand copy, asset paths,
//! video registries, checkout and community links, and the navigation
//! registry. Pure resolvers turn the external URLs into destinations with
//! an internal fallback, so a half-filled template never renders a dead
//! link.

use crate::pages::Page;

/// Reserved substring marking a config value as a template stand-in, not a
/// real destination.
pub const PLACEHOLDER_MARKER: &str = "REPLACE_ME";

pub struct Brand {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub presenter: &'static str,
    pub role: &'static str,
    pub email: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "THE UPGRADE SOCIETY",
    subtitle: "Ultimate Masterclass",
    tagline: "5-star living. 3-star budget.",
    presenter: "KRIS BUBAN",
    role: "Luxury Lifestyle Strategist & Educator",
    email: "support@theupgradesociety.com",
};

/// Root-relative paths into the host's public folder.
pub struct Assets {
    pub logo: &'static str,
    pub about_photo: &'static str,
}

pub const ASSETS: Assets = Assets {
    logo: "/upgrade-society-logo.png",
    about_photo: "/kris.jpg",
};

/// Hero sizzle reel.
pub const HERO_VIDEO_ID: &str = "dQw4w9WgXcQ";

pub struct TestimonialClip {
    pub video_id: &'static str,
    pub name: &'static str,
    pub note: &'static str,
}

/// Exactly six member clips; the self-check flags any other count.
pub const TESTIMONIAL_CLIPS: [TestimonialClip; 6] = [
    TestimonialClip {
        video_id: "M7lc1UVf-VE",
        name: "Marcus T.",
        note: "Ritz suite for $127",
    },
    TestimonialClip {
        video_id: "ysz5S6PUM-U",
        name: "Jennifer K.",
        note: "Status stacking + luxury rentals",
    },
    TestimonialClip {
        video_id: "ScMzIvxBSi4",
        name: "David R.",
        note: "Business credit breakthrough",
    },
    TestimonialClip {
        video_id: "aqz-KE-bpKQ",
        name: "Member 4",
        note: "Hotel upgrades",
    },
    TestimonialClip {
        video_id: "w7ejDZ8SWv8",
        name: "Member 5",
        note: "Points strategy",
    },
    TestimonialClip {
        video_id: "dQw4w9WgXcQ",
        name: "Member 6",
        note: "Lifestyle ROI",
    },
];

/// Stripe payment links, one per paid tier. Until real links are pasted in,
/// the placeholder marker keeps checkout buttons routed to the contact page.
pub struct Checkout {
    pub hotel_hack: &'static str,
    pub full_course: &'static str,
}

pub const CHECKOUT: Checkout = Checkout {
    hotel_hack: "REPLACE_ME",
    full_course: "REPLACE_ME",
};

/// Optional cross-property and community destinations.
pub struct Links {
    pub the_standard: &'static str,
    pub circle: &'static str,
    pub discord: &'static str,
}

pub const LINKS: Links = Links {
    the_standard: "REPLACE_ME",
    circle: "REPLACE_ME",
    discord: "REPLACE_ME",
};

pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
}

/// Navigation registry: one entry per registered page, in display order.
pub const NAV: [NavEntry; 8] = [
    NavEntry {
        page: Page::Home,
        label: "Home",
    },
    NavEntry {
        page: Page::Program,
        label: "Program",
    },
    NavEntry {
        page: Page::Pricing,
        label: "Pricing",
    },
    NavEntry {
        page: Page::Testimonials,
        label: "Testimonials",
    },
    NavEntry {
        page: Page::About,
        label: "About",
    },
    NavEntry {
        page: Page::Faq,
        label: "FAQ",
    },
    NavEntry {
        page: Page::Members,
        label: "Members",
    },
    NavEntry {
        page: Page::Contact,
        label: "Apply / Contact",
    },
];

/// Where an outbound link actually goes once configuration is checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    External(String),
    Page(Page),
}

impl Destination {
    pub fn href(&self) -> String {
        match self {
            Destination::External(url) => url.clone(),
            Destination::Page(page) => page.href(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Destination::External(_))
    }
}

/// The trimmed URL when it is a real configured destination: an absolute
/// http(s) URL that does not carry the placeholder marker.
pub fn configured_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if is_http_url(trimmed) && !trimmed.contains(PLACEHOLDER_MARKER) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Resolve an external URL with an internal fallback page. Pure; computed
/// at render time.
pub fn resolve_external(url: &str, fallback: Page) -> Destination {
    match configured_url(url) {
        Some(url) => Destination::External(url),
        None => Destination::Page(fallback),
    }
}

/// ASCII-case-insensitive absolute http(s) URL check. Deliberately shallow;
/// the site never dereferences these itself.
pub fn is_http_url(s: &str) -> bool {
    let s = s.trim();
    s.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || s.get(..8).is_some_and(|p| p.eq_ignore_ascii_case("https://"))
}

/// YouTube privacy-enhanced embed URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube-nocookie.com/embed/{}?rel=0&modestbranding=1&playsinline=1",
        video_id
    )
}

/// Mailto link to support with a pre-filled subject.
pub fn mailto(subject: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        BRAND.email,
        urlencoding::encode(subject)
    )
}

/// Mailto link with subject and a plain-text body (lead-capture form).
pub fn mailto_with_body(subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        BRAND.email,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://buy.stripe.com/xxxx"));
        assert!(is_http_url("http://example.com"));
        assert!(is_http_url("  HTTPS://EXAMPLE.COM  "));
        assert!(!is_http_url(""));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("buy.stripe.com/xxxx"));
        assert!(!is_http_url("https:/example.com"));
    }

    #[test]
    fn test_placeholder_url_falls_back_to_contact() {
        let destination = resolve_external("https://REPLACE_ME.stripe.com", Page::Contact);
        assert_eq!(destination, Destination::Page(Page::Contact));
        assert_eq!(destination.href(), "#/contact");
    }

    #[test]
    fn test_configured_url_is_rendered_verbatim() {
        let destination = resolve_external("  https://buy.stripe.com/xxxx  ", Page::Contact);
        assert_eq!(
            destination,
            Destination::External("https://buy.stripe.com/xxxx".to_string())
        );
        assert!(destination.is_external());
    }

    #[test]
    fn test_empty_and_relative_urls_fall_back() {
        assert_eq!(
            resolve_external("", Page::Contact),
            Destination::Page(Page::Contact)
        );
        assert_eq!(
            resolve_external("/portal", Page::Members),
            Destination::Page(Page::Members)
        );
    }

    #[test]
    fn test_shipped_checkout_values_fall_back_to_contact() {
        for url in [CHECKOUT.hotel_hack, CHECKOUT.full_course] {
            assert_eq!(
                resolve_external(url, Page::Contact),
                Destination::Page(Page::Contact)
            );
        }
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("M7lc1UVf-VE"),
            "https://www.youtube-nocookie.com/embed/M7lc1UVf-VE?rel=0&modestbranding=1&playsinline=1"
        );
    }

    #[test]
    fn test_mailto_encodes_subject() {
        let url = mailto("Full Course - The Upgrade Society");
        assert_eq!(
            url,
            "mailto:support@theupgradesociety.com?subject=Full%20Course%20-%20The%20Upgrade%20Society"
        );
    }

    #[test]
    fn test_mailto_with_body_encodes_newlines() {
        let url = mailto_with_body("Inquiry", "Name: Jo\n\nHello");
        assert!(url.contains("subject=Inquiry"));
        assert!(url.contains("body=Name%3A%20Jo%0A%0AHello"));
    }

    #[test]
    fn test_nav_registry_covers_every_registered_page_in_order() {
        assert_eq!(NAV.len(), Page::REGISTERED.len());
        for (entry, page) in NAV.iter().zip(Page::REGISTERED) {
            assert_eq!(entry.page, page);
            assert!(!entry.label.is_empty());
        }
    }
}

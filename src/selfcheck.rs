//! Startup Self-Check
//!
//! Pure audit of the inline configuration, run once from `main`. Findings
//! are collected into a report, serialized to JSON, and logged; they never
//! panic and never change what the user sees.

use serde::Serialize;
use thiserror::Error;

use crate::config::{self, TestimonialClip};
use crate::pages::Page;

/// One inconsistency in the inline configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Finding {
    #[error("navigation entry {index} has an empty label")]
    EmptyNavLabel { index: usize },

    #[error("navigation registry lists {slug} more than once")]
    DuplicateNavPage { slug: String },

    #[error("page {slug} is missing from the navigation registry")]
    MissingNavPage { slug: String },

    #[error("expected exactly {expected} testimonial clips, found {found}")]
    TestimonialCount { expected: usize, found: usize },

    #[error("testimonial clip {index} has an implausible video id {video_id:?}")]
    BadVideoId { index: usize, video_id: String },

    #[error("hero video id is empty")]
    MissingHeroVideo,

    #[error("checkout url for {tier} is neither configured nor a placeholder: {value:?}")]
    AmbiguousCheckoutUrl { tier: String, value: String },

    #[error("asset path {path:?} is not root-relative")]
    BadAssetPath { path: String },
}

/// Everything the audit found, in check order.
#[derive(Debug, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Audit the shipped configuration.
pub fn run() -> Report {
    let mut findings = Vec::new();

    findings.extend(audit_nav());
    findings.extend(audit_testimonials(&config::TESTIMONIAL_CLIPS));
    findings.extend(audit_hero(config::HERO_VIDEO_ID));
    findings.extend(audit_checkout("hotel_hack", config::CHECKOUT.hotel_hack));
    findings.extend(audit_checkout("full_course", config::CHECKOUT.full_course));
    findings.extend(audit_asset_path(config::ASSETS.logo));
    findings.extend(audit_asset_path(config::ASSETS.about_photo));

    Report { findings }
}

/// The navigation registry must cover every registered page exactly once,
/// with non-empty labels.
fn audit_nav() -> Vec<Finding> {
    let mut findings = Vec::new();

    for (index, entry) in config::NAV.iter().enumerate() {
        if entry.label.trim().is_empty() {
            findings.push(Finding::EmptyNavLabel { index });
        }
        let dup = config::NAV[..index].iter().any(|seen| seen.page == entry.page);
        if dup {
            findings.push(Finding::DuplicateNavPage {
                slug: entry.page.slug().to_string(),
            });
        }
    }

    for page in Page::REGISTERED {
        if !config::NAV.iter().any(|entry| entry.page == page) {
            findings.push(Finding::MissingNavPage {
                slug: page.slug().to_string(),
            });
        }
    }

    findings
}

fn audit_testimonials(clips: &[TestimonialClip]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if clips.len() != 6 {
        findings.push(Finding::TestimonialCount {
            expected: 6,
            found: clips.len(),
        });
    }

    for (index, clip) in clips.iter().enumerate() {
        if !plausible_video_id(clip.video_id) {
            findings.push(Finding::BadVideoId {
                index,
                video_id: clip.video_id.to_string(),
            });
        }
    }

    findings
}

fn audit_hero(video_id: &str) -> Vec<Finding> {
    if video_id.trim().is_empty() {
        vec![Finding::MissingHeroVideo]
    } else {
        Vec::new()
    }
}

/// A checkout value must either resolve as configured or fall back cleanly:
/// empty or placeholder-marked values are deliberate stand-ins, a valid
/// http(s) URL is live, and anything else is a typo worth flagging.
fn audit_checkout(tier: &str, value: &str) -> Vec<Finding> {
    let trimmed = value.trim();
    let deliberate_stand_in = trimmed.is_empty() || trimmed.contains(config::PLACEHOLDER_MARKER);
    if deliberate_stand_in || config::is_http_url(trimmed) {
        Vec::new()
    } else {
        vec![Finding::AmbiguousCheckoutUrl {
            tier: tier.to_string(),
            value: value.to_string(),
        }]
    }
}

fn audit_asset_path(path: &str) -> Vec<Finding> {
    if path.starts_with('/') {
        Vec::new()
    } else {
        vec![Finding::BadAssetPath {
            path: path.to_string(),
        }]
    }
}

/// YouTube ids are short tokens of `[A-Za-z0-9_-]`.
fn plausible_video_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 16
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_is_clean() {
        let report = run();
        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings);
    }

    #[test]
    fn test_wrong_testimonial_count_is_flagged() {
        let clips = config::TESTIMONIAL_CLIPS;
        let findings = audit_testimonials(&clips[..5]);
        assert_eq!(
            findings,
            vec![Finding::TestimonialCount {
                expected: 6,
                found: 5,
            }]
        );
    }

    #[test]
    fn test_implausible_video_id_is_flagged() {
        let clips = [TestimonialClip {
            video_id: "not a video id!",
            name: "Member",
            note: "note",
        }];
        let findings = audit_testimonials(&clips);
        assert!(findings.contains(&Finding::BadVideoId {
            index: 0,
            video_id: "not a video id!".to_string(),
        }));
    }

    #[test]
    fn test_checkout_placeholder_and_empty_are_clean() {
        assert!(audit_checkout("hotel_hack", "").is_empty());
        assert!(audit_checkout("hotel_hack", "REPLACE_ME").is_empty());
        assert!(audit_checkout("hotel_hack", "https://buy.stripe.com/xxxx").is_empty());
    }

    #[test]
    fn test_checkout_bad_scheme_is_flagged() {
        let findings = audit_checkout("full_course", "buy.stripe.com/yyyy");
        assert_eq!(
            findings,
            vec![Finding::AmbiguousCheckoutUrl {
                tier: "full_course".to_string(),
                value: "buy.stripe.com/yyyy".to_string(),
            }]
        );
    }

    #[test]
    fn test_relative_asset_path_is_flagged() {
        let findings = audit_asset_path("kris.jpg");
        assert_eq!(
            findings,
            vec![Finding::BadAssetPath {
                path: "kris.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = Report {
            findings: vec![Finding::TestimonialCount {
                expected: 6,
                found: 2,
            }],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"check\":\"testimonial_count\""));
        assert!(json.contains("\"found\":2"));
    }
}

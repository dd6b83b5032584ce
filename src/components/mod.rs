//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod button;
pub mod media;
pub mod nav;
pub mod section;

pub use button::{ButtonVariant, LinkButton};
pub use media::{hide_on_error, YouTubeEmbed};
pub use nav::TopNav;
pub use section::SectionTitle;

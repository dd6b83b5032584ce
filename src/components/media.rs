//! Media Components
//!
//! YouTube embed frame and the hide-on-error image handler.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::config;

/// Responsive 16:9 privacy-enhanced YouTube embed.
#[component]
pub fn YouTubeEmbed(
    #[prop(into)] video_id: String,
    #[prop(into)] title: String,
) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-3xl border border-white/10 bg-black">
            <div class="relative w-full" style="padding-top: 56.25%">
                <iframe
                    class="absolute inset-0 h-full w-full"
                    src=config::embed_url(&video_id)
                    title=title
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; \
                           gyroscope; picture-in-picture; web-share"
                    allowfullscreen=true
                />
            </div>
        </div>
    }
}

/// `on:error` handler for images: hide the broken element instead of
/// showing the browser's placeholder glyph.
pub fn hide_on_error(ev: web_sys::ErrorEvent) {
    if let Some(target) = ev.target() {
        if let Ok(element) = target.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.style().set_property("display", "none");
        }
    }
}

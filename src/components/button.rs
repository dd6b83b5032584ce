//! Link Button Component
//!
//! Anchor styled as a button. External targets open in a new tab with a
//! `noreferrer` rel and a small outbound glyph.

use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Outline,
}

#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    let external = href.starts_with("http");

    let base = "inline-flex items-center justify-center gap-2 rounded-2xl px-4 py-2 \
                text-sm font-semibold transition whitespace-nowrap";
    let styles = match variant {
        ButtonVariant::Primary => {
            "bg-yellow-500 text-neutral-950 hover:bg-yellow-400 shadow-lg shadow-yellow-500/10"
        }
        ButtonVariant::Ghost => "border border-white/10 bg-white/5 text-white hover:bg-white/10",
        ButtonVariant::Outline => {
            "border border-white/10 bg-transparent text-white hover:bg-white/5"
        }
    };

    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            class=format!("{} {}", base, styles)
        >
            {children()}
            {external.then(|| view! { <span aria-hidden="true">"↗"</span> })}
        </a>
    }
}

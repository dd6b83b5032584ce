//! Members Page
//!
//! Portal access explainer. The portal destination resolves Circle first,
//! then Discord, then falls back to contacting support.

use leptos::*;

use crate::components::{ButtonVariant, LinkButton, SectionTitle};
use crate::config;

/// Members page component
#[component]
pub fn Members() -> impl IntoView {
    let portal = config::configured_url(config::LINKS.circle)
        .or_else(|| config::configured_url(config::LINKS.discord));

    view! {
        <div class="space-y-10">
            <SectionTitle
                eyebrow="Members"
                title="Members portal"
                desc="Secure access is delivered immediately after purchase."
            />

            <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
                <div class="grid gap-6 lg:grid-cols-2">
                    <div>
                        <div class="text-2xl font-semibold">"Access"</div>
                        <p class="mt-3 text-sm text-neutral-300">
                            "Immediately after checkout, you will receive an email with your \
                             private portal access details. This page confirms your entry \
                             point."
                        </p>
                        <div class="mt-5 rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
                            <div class="text-sm font-semibold">"Next step"</div>
                            <p class="mt-2 text-sm text-neutral-300">
                                "If you already have your invite, use the button below. If \
                                 you do not, contact support and we will route you."
                            </p>
                        </div>
                        <div class="mt-5 flex flex-wrap gap-3">
                            {match portal {
                                Some(url) => view! {
                                    <LinkButton href=url>"Enter portal"</LinkButton>
                                }.into_view(),
                                None => view! {
                                    <LinkButton href="#/contact" variant=ButtonVariant::Ghost>
                                        "Contact support"
                                    </LinkButton>
                                }.into_view(),
                            }}
                            <LinkButton href="#/pricing" variant=ButtonVariant::Ghost>
                                "View tiers"
                            </LinkButton>
                        </div>
                    </div>

                    <PortalChoice />
                </div>
            </section>

            <section class="text-xs text-neutral-500">
                "If you have not received your access email within 10 minutes, check \
                 spam/junk, then contact support."
            </section>
        </div>
    }
}

#[component]
fn PortalChoice() -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-6">
            <div class="text-sm font-semibold">"Portal destination"</div>
            <p class="mt-2 text-sm text-neutral-400">
                "The portal lives on Circle or Discord. Whichever is configured first \
                 becomes the entry point."
            </p>
            <div class="mt-4 space-y-2 text-sm text-neutral-300">
                <div class="flex items-start gap-2">
                    <span class="mt-0.5 text-yellow-400" aria-hidden="true">"◆"</span>
                    <span>"Circle: clean, branded member experience"</span>
                </div>
                <div class="flex items-start gap-2">
                    <span class="mt-0.5 text-yellow-400" aria-hidden="true">"◆"</span>
                    <span>"Discord: fast chat, lightweight community"</span>
                </div>
            </div>
        </div>
    }
}

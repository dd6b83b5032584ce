//! About Page
//!
//! Presenter card, differentiators, and the conditional Standard
//! credential card.

use leptos::*;

use crate::components::{hide_on_error, ButtonVariant, LinkButton, SectionTitle};
use crate::config::{self, Destination};
use crate::pages::Page;

/// About page component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <SectionTitle
                eyebrow="About"
                title="Presented by Kris Buban"
                desc="Luxury lifestyle strategist and educator. Founder, More4LessMotors LLC and The Upgrade Society."
            />

            <section class="grid gap-6 lg:grid-cols-2">
                <PresenterCard />
                <Differentiators />
            </section>
        </div>
    }
}

#[component]
fn PresenterCard() -> impl IntoView {
    view! {
        <div class="rounded-[28px] border border-white/10 bg-white/5 p-6">
            <div class="flex items-center gap-4">
                <div class="h-16 w-16 overflow-hidden rounded-3xl border border-white/10 bg-neutral-950/40">
                    <img
                        src=config::ASSETS.about_photo
                        alt=config::BRAND.presenter
                        class="h-full w-full object-cover"
                        on:error=hide_on_error
                    />
                </div>
                <div>
                    <div class="text-lg font-semibold">{config::BRAND.presenter}</div>
                    <div class="text-sm text-neutral-400">{config::BRAND.role}</div>
                </div>
            </div>

            <p class="mt-5 text-sm text-neutral-300">
                "Built from real world execution. Private concierge work, complex \
                 itineraries, and sourcing for clients who value time, discretion, and \
                 outcomes over discounts. Built from real concierge execution for clients \
                 spending six and seven figures annually."
            </p>

            <div class="mt-5 rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
                <div class="flex items-start gap-3">
                    <span class="mt-0.5 text-yellow-400" aria-hidden="true">"❝"</span>
                    <div class="text-sm text-neutral-300">
                        "\u{201c}Luxury isn\u{2019}t expensive\u{2014}ignorance is.\u{201d}"
                    </div>
                </div>
            </div>
        </div>
    }
}

const DIFFERENTIATORS: [&str; 5] = [
    "Built from live concierge execution, not theory",
    "Systems used for real travel, sourcing, and deal flow",
    "High-production delivery designed to hold attention",
    "A genuine access advantage: XO Reserve pathway",
    "From the creator and host of THE STANDARD, A Rolls Royce Life",
];

#[component]
fn Differentiators() -> impl IntoView {
    let standard = config::resolve_external(config::LINKS.the_standard, Page::Contact);

    view! {
        <div class="rounded-[28px] border border-white/10 bg-white/5 p-6">
            <div class="text-sm font-semibold">"What makes this different"</div>
            <div class="mt-3 space-y-3 text-sm text-neutral-300">
                {DIFFERENTIATORS.iter().map(|item| view! {
                    <div class="flex gap-2">
                        <span class="text-yellow-400" aria-hidden="true">"•"</span>
                        {*item}
                    </div>
                }).collect_view()}
            </div>

            {match standard {
                Destination::External(url) => view! {
                    <div class="mt-6 rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
                        <div class="text-sm font-semibold">"A quiet credential"</div>
                        <p class="mt-2 text-sm text-neutral-300">
                            "For those who prefer context: THE STANDARD is a documentary \
                             project that reflects the same taste level and restraint."
                        </p>
                        <div class="mt-4">
                            <LinkButton href=url variant=ButtonVariant::Ghost>
                                "Visit THE STANDARD"
                            </LinkButton>
                        </div>
                    </div>
                }.into_view(),
                Destination::Page(_) => ().into_view(),
            }}
        </div>
    }
}

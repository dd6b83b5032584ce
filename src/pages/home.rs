//! Home Page
//!
//! Hero with the sizzle reel, how-it-works split, unlock grid, and the
//! 30-day guarantee.

use leptos::*;

use crate::components::{ButtonVariant, LinkButton, YouTubeEmbed};
use crate::config;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <Hero />
            <HowItWorks />
            <WhatYouUnlock />
            <Guarantee />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="grid items-center gap-10 lg:grid-cols-2">
            <div>
                <div class="inline-flex items-center gap-2 rounded-2xl border border-white/10 bg-white/5 px-3 py-2 text-xs text-neutral-300">
                    <span class="text-yellow-400" aria-hidden="true">"🛡"</span>
                    " Real execution. Discreet systems. High signal."
                </div>

                <h1 class="mt-5 text-4xl font-semibold tracking-tight sm:text-5xl">
                    "Live the five star lifestyle without paying five star prices."
                </h1>

                <p class="mt-4 max-w-xl text-neutral-300">
                    "Upgrade into first class, suites, and top tier experiences for less."
                </p>
                <p class="mt-2 max-w-xl text-neutral-300">
                    "A premium, Netflix style masterclass that teaches how access works. \
                     Hotels, flights, points, private aviation pathways, elite rentals, \
                     luxury sourcing, and business leverage."
                </p>
                <p class="mt-2 max-w-xl text-sm text-neutral-400">
                    "Most members see their first tangible win within their first booking."
                </p>
                <p class="mt-2 max-w-xl text-sm text-neutral-400">
                    "Some wins are available immediately inside the portal. Others land \
                     within three to four days depending on your booking window."
                </p>
                <p class="mt-2 max-w-xl text-sm text-neutral-400">
                    "Example: suite upgrades, first class outcomes, premium rentals, \
                     without premium pricing."
                </p>

                <div class="mt-6 flex flex-wrap items-center gap-3">
                    <LinkButton href="#/pricing">"View tiers"</LinkButton>
                    <LinkButton href="#/program" variant=ButtonVariant::Ghost>
                        "Read the program overview"
                    </LinkButton>
                    <LinkButton href="#/contact" variant=ButtonVariant::Ghost>
                        "Concierge application"
                    </LinkButton>
                </div>

                <div class="mt-6 rounded-3xl border border-yellow-500/30 bg-yellow-500/10 p-5">
                    <div class="flex items-start gap-3">
                        <span class="mt-0.5 text-yellow-400" aria-hidden="true">"❝"</span>
                        <div class="min-w-0">
                            <div class="text-sm font-semibold text-white">"A clean distinction"</div>
                            <div class="mt-1 text-sm text-neutral-200">
                                "The Full Course teaches the system. Concierge is separate and \
                                 application only. We execute using our position and \
                                 relationships. You simply approve."
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="space-y-4">
                <YouTubeEmbed
                    video_id=config::HERO_VIDEO_ID
                    title="Upgrade Society - Sizzle"
                />
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <div class="text-xs font-semibold uppercase tracking-widest text-yellow-400">
                        "How it works"
                    </div>
                    <div class="mt-2 text-2xl font-semibold">
                        "Learn it, or have it done for you"
                    </div>
                    <p class="mt-3 text-neutral-300">
                        "Two entry points. One system. Choose the level of support that \
                         matches your time, lifestyle, and goals. "
                        <span class="text-neutral-200">"Designed for people who execute."</span>
                    </p>
                </div>
                <div class="flex items-end justify-start lg:justify-end">
                    <LinkButton href="#/pricing" variant=ButtonVariant::Ghost>
                        "Compare tiers"
                    </LinkButton>
                </div>
            </div>

            <div class="mt-6 grid gap-4 lg:grid-cols-2">
                <div class="rounded-[28px] border border-white/10 bg-neutral-950/40 p-6">
                    <div class="text-sm font-semibold">"Full Course"</div>
                    <div class="mt-2 text-sm text-neutral-300">
                        "You learn the architecture of access across hotels, flights, points, \
                         private aviation pathways, rentals, luxury sourcing, and business \
                         leverage."
                    </div>
                    <div class="mt-4 flex gap-3">
                        <LinkButton href="#/program" variant=ButtonVariant::Ghost>
                            "See the curriculum"
                        </LinkButton>
                    </div>
                </div>

                <div class="rounded-[28px] border border-yellow-500/30 bg-yellow-500/10 p-6">
                    <div class="text-sm font-semibold text-white">"Concierge"</div>
                    <div class="mt-2 text-sm text-neutral-200">
                        "Done for you execution. Direct access to Kris and team. We leverage \
                         our position and relationships across luxury travel, sourcing, and \
                         business optimization."
                    </div>
                    <div class="mt-4 flex gap-3">
                        <LinkButton href="#/contact">"Request application"</LinkButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

const UNLOCKS: [(&str, &str); 4] = [
    ("Hotels and suites", "Rates, upgrades, and status strategies"),
    ("Flights and points", "Smarter redemptions and routing"),
    ("Private aviation pathways", "How access is structured"),
    ("Elite rentals and exotics", "Premium outcomes with better leverage"),
];

#[component]
fn WhatYouUnlock() -> impl IntoView {
    view! {
        <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <div class="text-xs font-semibold uppercase tracking-widest text-yellow-400">
                        "What you unlock"
                    </div>
                    <div class="mt-2 text-2xl font-semibold">
                        "Luxury outcomes, explained clearly"
                    </div>
                    <p class="mt-3 text-neutral-300">
                        "This is a lifestyle ecosystem. Learn the system, then practice it \
                         in the real world."
                    </p>
                    <p class="mt-2 text-sm text-neutral-400">
                        "Quarterly city meetups give members a reason to apply what they \
                         learn and meet serious operators."
                    </p>
                </div>
                <div class="flex items-end justify-start lg:justify-end">
                    <LinkButton href="#/pricing" variant=ButtonVariant::Ghost>
                        "Choose your tier"
                    </LinkButton>
                </div>
            </div>

            <div class="mt-6 grid gap-3 sm:grid-cols-2">
                {UNLOCKS.iter().map(|(title, desc)| view! {
                    <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-5">
                        <div class="text-sm font-semibold">{*title}</div>
                        <div class="mt-1 text-sm text-neutral-400">{*desc}</div>
                    </div>
                }).collect_view()}

                <div class="rounded-3xl border border-white/10 bg-neutral-950/40 p-5 sm:col-span-2">
                    <div class="text-sm font-semibold">"More inside"</div>
                    <div class="mt-1 text-sm text-neutral-400">
                        "Luxury sourcing, business leverage, and additional releases inside \
                         the members portal."
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Guarantee() -> impl IntoView {
    view! {
        <section class="rounded-[28px] border border-white/10 bg-white/5 p-7">
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <div class="text-xs font-semibold uppercase tracking-widest text-yellow-400">
                        "Guarantee"
                    </div>
                    <div class="mt-2 text-2xl font-semibold">"30 Day Action Guarantee"</div>
                    <p class="mt-3 text-neutral-300">
                        "Complete the 7 Day Quick Wins Challenge and implement at least 3 \
                         strategies. If you do not see meaningful savings or value within \
                         30 days, we will provide 1 on 1 coaching to troubleshoot and \
                         optimize your approach."
                    </p>
                </div>
                <div class="flex items-end justify-start lg:justify-end">
                    <LinkButton href="#/pricing" variant=ButtonVariant::Ghost>
                        "View tiers"
                    </LinkButton>
                </div>
            </div>
        </section>
    }
}
